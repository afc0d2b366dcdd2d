//! Flat surface for the solver's kernel-integration and assembly stages.
//!
//! Mirrors the element routines one-to-one under the names the solver uses;
//! prefer `prelude` for new code.

pub use crate::colloc::{el_cp_nonuniform, el_cp_uniform, CollocPoints};
pub use crate::coords::{make_el_pt_hz, make_el_tau_2_mc, make_el_tau_crd, tau_to_master, HZ};
pub use crate::frame::{is_rotation, make_el_r_tensor};
pub use crate::mesh::{colloc_index, Mesh, NODES_PER_ELEM};
pub use crate::sfm::{
    eval_basis, make_el_sfm_nonuniform, make_el_sfm_uniform, tau_monomials, tau_sq_2_mc, ElemSfm,
};
pub use crate::shift::shift_el_sfm;
pub use crate::vec3::{cross, norm, normalize};

use nalgebra::Matrix6;
use num_complex::Complex64;

/// SFM of `es` re-centred on vertex `m`'s τ, as the kernel integrator
/// expects it for the vertex-local expansion. `None` unless `m < 3`.
pub fn sfm_at_vertex(es: &ElemSfm, tau: &[Complex64; 3], m: usize) -> Option<Matrix6<Complex64>> {
    tau.get(m).map(|&z| es.shifted(z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::ElemCfg;
    use crate::frame::Triangle;
    use nalgebra::vector;

    #[test]
    fn vertex_recentred_basis_is_nodal_at_local_origin() {
        let t = Triangle::new(
            vector![0.0, 0.1, 0.0],
            vector![1.8, 0.0, 0.0],
            vector![1.2, 1.8, 0.0],
        );
        let es = make_el_sfm_uniform(&t, ElemCfg::default()).unwrap();
        let tau = make_el_tau_crd(&t, &es.r_tensor);
        for m in 0..3 {
            let s = sfm_at_vertex(&es, &tau, m).unwrap();
            // at τ' = 0 only N_m is non-zero: the constant column
            for i in 0..6 {
                let expect = if i == m { 1.0 } else { 0.0 };
                assert!((s[(i, 0)] - expect).norm() < 1e-12);
            }
        }
        assert!(sfm_at_vertex(&es, &tau, 3).is_none());
    }
}
