//! Element-local complex coordinates.
//!
//! - `make_el_tau_crd`: τ = x_local + i·y_local of each vertex (τ0 = 0).
//! - `make_el_tau_2_mc`: linear map `(τ, τ̄) ↦ (x, y)` onto the master
//!   triangle (0,0), (1,0), (0,1).
//! - `make_el_pt_hz`: height above the element plane and in-plane τ of an
//!   arbitrary point, as consumed by kernel integration.

use nalgebra::{Matrix2, Matrix3, Vector3};
use num_complex::Complex64;

use crate::cfg::ElemCfg;
use crate::error::{ElemError, Result};
use crate::frame::Triangle;

/// Height `h` and in-plane complex coordinate `z` of a point.
///
/// `h = -z_local`: positive on the side opposite the element normal `e3`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HZ {
    pub h: f64,
    pub z: Complex64,
}

#[inline]
fn to_local(r_tensor: &Matrix3<f64>, origin: &Vector3<f64>, x: &Vector3<f64>) -> Vector3<f64> {
    r_tensor * (x - origin)
}

/// τ-coordinates of the three vertices in the frame `r_tensor`.
pub fn make_el_tau_crd(tri: &Triangle, r_tensor: &Matrix3<f64>) -> [Complex64; 3] {
    let v0 = tri.v[0];
    tri.v.map(|v| {
        let xi = to_local(r_tensor, &v0, &v);
        Complex64::new(xi.x, xi.y)
    })
}

/// Tau → master-coordinates map `M` with `[x, y]ᵀ = M · [τ, τ̄]ᵀ`.
///
/// Closed-form inverse of the system `(τ1, τ̄1) ↦ (1, 0)`, `(τ2, τ̄2) ↦ (0, 1)`
/// with `D = τ1·τ̄2 − τ2·τ̄1` (purely imaginary, `|D| = 4·area`).
pub fn make_el_tau_2_mc(
    tri: &Triangle,
    r_tensor: &Matrix3<f64>,
    cfg: ElemCfg,
) -> Result<Matrix2<Complex64>> {
    let [_, z1, z2] = make_el_tau_crd(tri, r_tensor);
    tau_2_mc_from_tau(z1, z2, cfg)
}

pub(crate) fn tau_2_mc_from_tau(
    z1: Complex64,
    z2: Complex64,
    cfg: ElemCfg,
) -> Result<Matrix2<Complex64>> {
    let det = z1 * z2.conj() - z2 * z1.conj();
    let scale = z1.norm() * z2.norm();
    if !det.norm().is_finite() || det.norm() <= cfg.eps_det * scale || scale == 0.0 {
        return Err(ElemError::SingularTauMap { det: det.norm() });
    }
    Ok(Matrix2::new(
        z2.conj() / det,
        -z2 / det,
        -z1.conj() / det,
        z1 / det,
    ))
}

/// Height and τ of `point` relative to the element frame.
pub fn make_el_pt_hz(tri: &Triangle, point: &Vector3<f64>, r_tensor: &Matrix3<f64>) -> HZ {
    let xi = to_local(r_tensor, &tri.v[0], point);
    HZ {
        h: -xi.z,
        z: Complex64::new(xi.x, xi.y),
    }
}

/// Master-triangle coordinates `(x, y)` of an in-plane τ.
#[inline]
pub fn tau_to_master(t2m: &Matrix2<Complex64>, tau: Complex64) -> (f64, f64) {
    let x = t2m[(0, 0)] * tau + t2m[(0, 1)] * tau.conj();
    let y = t2m[(1, 0)] * tau + t2m[(1, 1)] * tau.conj();
    (x.re, y.re)
}
