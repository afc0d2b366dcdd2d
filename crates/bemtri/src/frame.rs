//! Triangles and their local orthonormal frames.
//!
//! Conventions
//! - Vertex 0 is the local origin; `a1 = v1 - v0`, `a2 = v2 - v0`.
//! - The rotation tensor `R` has rows `e1, e2, e3` (global components), so
//!   `R · (x - v0)` gives local coordinates of a global point `x`.
//! - `e1 ∥ a1`, `e3 ∥ a1 × a2` (winding order fixes the normal's sign),
//!   `e2 = e3 × e1`. `R` is a proper rotation (det = +1).

use nalgebra::{Matrix3, Vector3};

use crate::cfg::{ElemCfg, ORTHO_EPS};
use crate::error::{ElemError, Result};
use crate::vec3::{cross, norm, normalize, try_normalize};

/// Flat triangle given by three ordered vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub v: [Vector3<f64>; 3],
}

impl Triangle {
    #[inline]
    pub fn new(v0: Vector3<f64>, v1: Vector3<f64>, v2: Vector3<f64>) -> Self {
        Self { v: [v0, v1, v2] }
    }

    /// Column `k` of `m` is vertex `k` (node-array layout).
    #[inline]
    pub fn from_columns(m: &Matrix3<f64>) -> Self {
        Self {
            v: [
                m.column(0).into_owned(),
                m.column(1).into_owned(),
                m.column(2).into_owned(),
            ],
        }
    }

    #[inline]
    pub fn to_columns(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&self.v)
    }

    #[inline]
    pub fn centroid(&self) -> Vector3<f64> {
        (self.v[0] + self.v[1] + self.v[2]) / 3.0
    }

    /// Edge vectors `(v1 - v0, v2 - v0)`.
    #[inline]
    pub fn edges_from_origin(&self) -> (Vector3<f64>, Vector3<f64>) {
        (self.v[1] - self.v[0], self.v[2] - self.v[0])
    }

    /// Unnormalized normal `a1 × a2`; its length is twice the area.
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        let (a1, a2) = self.edges_from_origin();
        cross(&a1, &a2)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        0.5 * norm(&self.normal())
    }
}

/// Rotation tensor from global to element-local Cartesian coordinates.
///
/// Fails with [`ElemError::DegenerateTriangle`] when `a1` or the normal is
/// shorter than `cfg.eps_len` times the longer edge leaving vertex 0.
pub fn make_el_r_tensor(tri: &Triangle, cfg: ElemCfg) -> Result<Matrix3<f64>> {
    let (a1, a2) = tri.edges_from_origin();
    let edge_len = norm(&a1);
    let scale = edge_len.max(norm(&a2));
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ElemError::DegenerateTriangle {
            edge_len,
            normal_len: 0.0,
        });
    }
    let min_len = cfg.eps_len * scale;
    let e1 = try_normalize(&a1, min_len).ok_or(ElemError::DegenerateTriangle {
        edge_len,
        normal_len: 0.0,
    })?;
    let n = cross(&e1, &a2);
    let e3 = try_normalize(&n, min_len).ok_or(ElemError::DegenerateTriangle {
        edge_len,
        normal_len: norm(&n),
    })?;
    let e2 = normalize(&cross(&e3, &e1));
    let r = Matrix3::from_rows(&[e1.transpose(), e2.transpose(), e3.transpose()]);
    debug_assert!(is_rotation(&r, ORTHO_EPS), "frame is not a rotation");
    Ok(r)
}

/// Check `R Rᵀ ≈ I` and `det R ≈ 1` (max-abs metric).
pub fn is_rotation(r: &Matrix3<f64>, eps: f64) -> bool {
    let gram = r * r.transpose();
    (gram - Matrix3::identity()).amax() <= eps && (r.determinant() - 1.0).abs() <= eps
}
