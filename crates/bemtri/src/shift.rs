//! Re-centering of the quadratic τ-monomial basis.

use nalgebra::Matrix6;
use num_complex::Complex64;

/// Operator `S(z)` with `m(τ + z) = S(z) · m(τ)` for
/// `m(τ) = [1, τ, τ̄, τ², τ̄², τ·τ̄]`.
///
/// Right-multiplying an SFM by `S(z)` re-expresses its basis around the
/// origin `z`. Translations compose: `S(z1) · S(z2) = S(z1 + z2)`.
pub fn shift_el_sfm(z: Complex64) -> Matrix6<Complex64> {
    let zc = z.conj();
    let one = Complex64::new(1.0, 0.0);
    let mut s = Matrix6::<Complex64>::zeros();
    s[(0, 0)] = one;
    // τ + z
    s[(1, 0)] = z;
    s[(1, 1)] = one;
    // τ̄ + z̄
    s[(2, 0)] = zc;
    s[(2, 2)] = one;
    // (τ + z)²
    s[(3, 0)] = z * z;
    s[(3, 1)] = 2.0 * z;
    s[(3, 3)] = one;
    // (τ̄ + z̄)²
    s[(4, 0)] = zc * zc;
    s[(4, 2)] = 2.0 * zc;
    s[(4, 4)] = one;
    // (τ + z)(τ̄ + z̄)
    s[(5, 0)] = z * zc;
    s[(5, 1)] = zc;
    s[(5, 2)] = z;
    s[(5, 5)] = one;
    s
}
