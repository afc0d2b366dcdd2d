//! Shape-function coefficient matrices (SFM) in complex τ-coordinates.
//!
//! Purpose
//! - Express the six quadratic nodal basis functions of a flat triangle as
//!   rows of a 6×6 complex matrix over the monomials
//!   `[1, τ, τ̄, τ², τ̄², τ·τ̄]`.
//!
//! Construction (exact, no quadrature)
//! - Master coefficients over `[1, x, y, x², y², xy]` (see `master`).
//! - Monomial conversion: the linear map `(τ, τ̄) ↦ (x, y)` and its quadratic
//!   extension, `x² = a²τ² + b²τ̄² + 2ab·ττ̄` etc.
//! - `SFM = master · conversion`.
//!
//! Node `k` of the SFM is collocation point `k` of `crate::colloc` at β = 0.

pub mod master;

use nalgebra::{Matrix2, Matrix3, Matrix6, Vector6};
use num_complex::Complex64;

use crate::cfg::{ElemCfg, VertexWeights};
use crate::coords::make_el_tau_2_mc;
use crate::error::Result;
use crate::frame::{make_el_r_tensor, Triangle};
use crate::shift::shift_el_sfm;

pub use master::{master_coeffs, master_nodes, xy_monomials};

/// Rotation tensor and SFM of one element, built together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElemSfm {
    pub r_tensor: Matrix3<f64>,
    pub sfm: Matrix6<Complex64>,
}

impl ElemSfm {
    /// Basis values `[N0(τ), …, N5(τ)]`.
    #[inline]
    pub fn eval(&self, tau: Complex64) -> [Complex64; 6] {
        eval_basis(&self.sfm, tau)
    }

    /// Same basis written in monomials of `τ' = τ - z`.
    ///
    /// `N(τ) = SFM · m(τ' + z) = (SFM · S(z)) · m(τ')`.
    pub fn shifted(&self, z: Complex64) -> Matrix6<Complex64> {
        self.sfm * shift_el_sfm(z)
    }
}

/// Monomials `[1, τ, τ̄, τ², τ̄², τ·τ̄]`.
#[inline]
pub fn tau_monomials(tau: Complex64) -> Vector6<Complex64> {
    let tc = tau.conj();
    Vector6::new(Complex64::new(1.0, 0.0), tau, tc, tau * tau, tc * tc, tau * tc)
}

/// Evaluate the six basis functions of `sfm` at `tau`.
pub fn eval_basis(sfm: &Matrix6<Complex64>, tau: Complex64) -> [Complex64; 6] {
    let v = sfm * tau_monomials(tau);
    [v[0], v[1], v[2], v[3], v[4], v[5]]
}

/// Conversion from `[1, x, y, x², y², xy]` to `[1, τ, τ̄, τ², τ̄², ττ̄]`.
///
/// Row `k` holds the τ-monomial coefficients of the k-th xy-monomial, given
/// `t2m = [[a, b], [c, d]]` with `x = aτ + bτ̄`, `y = cτ + dτ̄`.
pub fn tau_sq_2_mc(t2m: &Matrix2<Complex64>) -> Matrix6<Complex64> {
    let mut cq = Matrix3::<Complex64>::zeros();
    for j in 0..2 {
        for k in 0..2 {
            cq[(j, k)] = t2m[(j, k)] * t2m[(j, k)];
        }
        cq[(j, 2)] = 2.0 * t2m[(j, 0)] * t2m[(j, 1)];
        cq[(2, j)] = t2m[(0, j)] * t2m[(1, j)];
    }
    cq[(2, 2)] = t2m[(0, 0)] * t2m[(1, 1)] + t2m[(1, 0)] * t2m[(0, 1)];

    let mut out = Matrix6::<Complex64>::zeros();
    out[(0, 0)] = Complex64::new(1.0, 0.0);
    out.fixed_view_mut::<2, 2>(1, 1).copy_from(t2m);
    out.fixed_view_mut::<3, 3>(3, 3).copy_from(&cq);
    out
}

/// `master_coeffs(weights) · tau_sq_2_mc(t2m)`.
pub(crate) fn sfm_from_tau_map(t2m: &Matrix2<Complex64>, weights: &VertexWeights) -> Matrix6<Complex64> {
    let sfm_mc = master_coeffs(weights).map(|c| Complex64::new(c, 0.0));
    sfm_mc * tau_sq_2_mc(t2m)
}

/// SFM with edge partitioning by `weights`.
pub fn make_el_sfm_nonuniform(
    tri: &Triangle,
    weights: &VertexWeights,
    cfg: ElemCfg,
) -> Result<ElemSfm> {
    let r_tensor = make_el_r_tensor(tri, cfg)?;
    let t2m = make_el_tau_2_mc(tri, &r_tensor, cfg)?;
    Ok(ElemSfm {
        r_tensor,
        sfm: sfm_from_tau_map(&t2m, weights),
    })
}

/// SFM with edge nodes at midpoints; equals the weighted SFM at (1, 1, 1).
pub fn make_el_sfm_uniform(tri: &Triangle, cfg: ElemCfg) -> Result<ElemSfm> {
    make_el_sfm_nonuniform(tri, &VertexWeights::uniform(), cfg)
}
