//! 3-vector primitives used by the frame builder.

use nalgebra::Vector3;

/// Euclidean norm.
#[inline]
pub fn norm(v: &Vector3<f64>) -> f64 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

/// `v / |v|`.
///
/// Pre: `norm(v) > 0`. A zero vector yields NaNs; use [`try_normalize`] when
/// the input is not known to be safe.
#[inline]
pub fn normalize(v: &Vector3<f64>) -> Vector3<f64> {
    v / norm(v)
}

/// `v / |v|`, or `None` if `|v| <= min_len` or the norm is not finite.
#[inline]
pub fn try_normalize(v: &Vector3<f64>, min_len: f64) -> Option<Vector3<f64>> {
    let n = norm(v);
    if !n.is_finite() || n <= min_len {
        return None;
    }
    Some(v / n)
}

#[inline]
pub fn cross(a: &Vector3<f64>, b: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}
