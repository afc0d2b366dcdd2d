//! Property tests over random well-shaped triangles and weights.

use bemtri::colloc::{el_cp_nonuniform, el_cp_uniform};
use bemtri::coords::{make_el_pt_hz, make_el_tau_crd};
use bemtri::frame::{is_rotation, make_el_r_tensor};
use bemtri::rand::{draw_triangle, draw_weights, ReplayToken, TriangleCfg};
use bemtri::sfm::{make_el_sfm_nonuniform, make_el_sfm_uniform};
use bemtri::shift::shift_el_sfm;
use bemtri::{Complex64, ElemCfg, ElemError, Triangle, VertexWeights};
use nalgebra::Vector3;
use proptest::prelude::*;

fn tri(seed: u64, index: u64) -> Triangle {
    draw_triangle(TriangleCfg::default(), ReplayToken { seed, index })
        .expect("sampler budget is ample for 10° minimum angle")
}

fn kronecker_error(t: &Triangle, w: &VertexWeights) -> f64 {
    let es = make_el_sfm_nonuniform(t, w, ElemCfg::default()).unwrap();
    let cp = el_cp_nonuniform(t, w, 0.0).unwrap();
    let mut err: f64 = 0.0;
    for (j, p) in cp.iter().enumerate() {
        let vals = es.eval(make_el_pt_hz(t, p, &es.r_tensor).z);
        for (i, v) in vals.iter().enumerate() {
            let expect = if i == j { 1.0 } else { 0.0 };
            err = err.max((*v - expect).norm());
        }
    }
    err
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn frame_is_proper_rotation(seed in any::<u64>(), index in 0u64..1000) {
        let t = tri(seed, index);
        let r = make_el_r_tensor(&t, ElemCfg::default()).unwrap();
        prop_assert!(is_rotation(&r, 1e-10));
        // vertices map into the local plane z = 0
        for v in &t.v {
            prop_assert!(make_el_pt_hz(&t, v, &r).h.abs() < 1e-12);
        }
    }

    #[test]
    fn vertex0_tau_exact_zero(seed in any::<u64>(), index in 0u64..1000) {
        let t = tri(seed, index);
        let r = make_el_r_tensor(&t, ElemCfg::default()).unwrap();
        prop_assert_eq!(make_el_tau_crd(&t, &r)[0], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn uniform_sfm_is_nodal(seed in any::<u64>(), index in 0u64..1000) {
        let t = tri(seed, index);
        prop_assert!(kronecker_error(&t, &VertexWeights::uniform()) < 1e-9);
    }

    #[test]
    fn weighted_sfm_is_nodal(seed in any::<u64>(), index in 0u64..1000) {
        let t = tri(seed, index);
        let w = draw_weights(0.5, 2.0, ReplayToken { seed, index })
            .expect("finite bounds always give valid weights");
        prop_assert!(kronecker_error(&t, &w) < 1e-9);
    }

    #[test]
    fn unit_weights_specialize_exactly(seed in any::<u64>(), index in 0u64..1000) {
        let t = tri(seed, index);
        let u = make_el_sfm_uniform(&t, ElemCfg::default()).unwrap();
        let n = make_el_sfm_nonuniform(&t, &VertexWeights::uniform(), ElemCfg::default()).unwrap();
        prop_assert_eq!(u, n);
    }

    #[test]
    fn shift_composes(
        a in -5.0f64..5.0, b in -5.0f64..5.0,
        c in -5.0f64..5.0, d in -5.0f64..5.0,
    ) {
        let z1 = Complex64::new(a, b);
        let z2 = Complex64::new(c, d);
        let lhs = shift_el_sfm(z1) * shift_el_sfm(z2);
        let rhs = shift_el_sfm(z1 + z2);
        prop_assert!((lhs - rhs).map(|x| x.norm()).amax() < 1e-10);
    }

    #[test]
    fn colloc_blend_is_affine_in_beta(
        seed in any::<u64>(), index in 0u64..1000, beta in 0.0f64..0.5,
    ) {
        let t = tri(seed, index);
        let c = t.centroid();
        let p0 = el_cp_uniform(&t, 0.0).unwrap();
        let p = el_cp_uniform(&t, beta).unwrap();
        for k in 0..6 {
            let expect: Vector3<f64> = c + (1.0 - beta) * (p0[k] - c);
            prop_assert!((p[k] - expect).norm() < 1e-12);
        }
    }
}

#[test]
fn coincident_vertices_always_rejected() {
    for index in 0..16 {
        let t = tri(9, index);
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            let mut v = t.v;
            v[j] = v[i];
            let bad = Triangle { v };
            let err = make_el_sfm_uniform(&bad, ElemCfg::default()).unwrap_err();
            assert!(matches!(err, ElemError::DegenerateTriangle { .. }), "{err}");
        }
    }
}

#[test]
fn scale_invariance_of_rejection() {
    // a tiny but well-shaped triangle is accepted
    let s = 1e-8;
    let t = Triangle::new(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(s, 0.0, 0.0),
        Vector3::new(0.0, s, 0.0),
    );
    assert!(make_el_sfm_uniform(&t, ElemCfg::default()).is_ok());
}
