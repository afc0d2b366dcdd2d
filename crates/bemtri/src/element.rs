//! Everything the kernel integrator and the assembler need about one element.

use nalgebra::{Matrix2, Matrix3, Matrix6, Vector3};
use num_complex::Complex64;

use crate::cfg::NumParams;
use crate::colloc::{el_cp_nonuniform, CollocPoints};
use crate::coords::{make_el_pt_hz, make_el_tau_crd, tau_2_mc_from_tau, HZ};
use crate::error::Result;
use crate::frame::{make_el_r_tensor, Triangle};
use crate::sfm::{sfm_from_tau_map, ElemSfm};

/// Frame, τ-coordinates, master map, SFM and collocation points of a triangle.
///
/// Built atomically: either every field is valid or `Element::new` fails.
#[derive(Clone, Copy, Debug)]
pub struct Element {
    pub tri: Triangle,
    pub r_tensor: Matrix3<f64>,
    pub tau: [Complex64; 3],
    pub tau_2_mc: Matrix2<Complex64>,
    pub sfm: Matrix6<Complex64>,
    pub colloc: CollocPoints,
}

impl Element {
    pub fn new(tri: Triangle, params: &NumParams) -> Result<Self> {
        let weights = params.partition.weights();
        let r_tensor = make_el_r_tensor(&tri, params.cfg)?;
        let tau = make_el_tau_crd(&tri, &r_tensor);
        let tau_2_mc = tau_2_mc_from_tau(tau[1], tau[2], params.cfg)?;
        let sfm = sfm_from_tau_map(&tau_2_mc, &weights);
        let colloc = el_cp_nonuniform(&tri, &weights, params.beta)?;
        Ok(Self {
            tri,
            r_tensor,
            tau,
            tau_2_mc,
            sfm,
            colloc,
        })
    }

    /// Height and in-plane τ of `point` in this element's frame.
    #[inline]
    pub fn hz(&self, point: &Vector3<f64>) -> HZ {
        make_el_pt_hz(&self.tri, point, &self.r_tensor)
    }

    #[inline]
    pub fn elem_sfm(&self) -> ElemSfm {
        ElemSfm {
            r_tensor: self.r_tensor,
            sfm: self.sfm,
        }
    }

    /// τ of collocation point `k` (in-plane projection).
    #[inline]
    pub fn colloc_tau(&self, k: usize) -> Complex64 {
        self.hz(&self.colloc[k]).z
    }

    /// Unit normal `e3`.
    #[inline]
    pub fn unit_normal(&self) -> Vector3<f64> {
        self.r_tensor.row(2).transpose()
    }
}
