//! Collocation (nodal) points of a quadratic element.
//!
//! Node layout, matching the SFM rows:
//! - `n = 0, 1, 2`: vertex nodes, `(1 - β) v_n + β c`.
//! - `n + 3`: node on the edge opposite vertex `n`, between `m = (n+1) mod 3`
//!   and `l = (m+1) mod 3`, at `(w_m v_m + w_l v_l) / (w_m + w_l)` and then
//!   pulled toward the centroid `c` by β.

use nalgebra::Vector3;

use crate::cfg::{check_beta, VertexWeights};
use crate::error::Result;
use crate::frame::Triangle;

/// The six nodal points of one element, global coordinates.
pub type CollocPoints = [Vector3<f64>; 6];

/// Collocation points with weight-proportional edge nodes.
///
/// β = 0 puts nodes exactly on vertices and edge-partition points; β → 1
/// collapses them onto the centroid. Only a non-finite β is rejected.
pub fn el_cp_nonuniform(tri: &Triangle, weights: &VertexWeights, beta: f64) -> Result<CollocPoints> {
    let beta = check_beta(beta)?;
    let c = tri.centroid();
    let mut cp = [Vector3::zeros(); 6];
    for n in 0..3 {
        let m = (n + 1) % 3;
        let l = (m + 1) % 3;
        cp[n] = (1.0 - beta) * tri.v[n] + beta * c;
        let edge_pt = (weights[m] * tri.v[m] + weights[l] * tri.v[l]) / (weights[m] + weights[l]);
        cp[n + 3] = (1.0 - beta) * edge_pt + beta * c;
    }
    Ok(cp)
}

/// Collocation points with edge nodes at midpoints.
pub fn el_cp_uniform(tri: &Triangle, beta: f64) -> Result<CollocPoints> {
    el_cp_nonuniform(tri, &VertexWeights::uniform(), beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ElemError;
    use nalgebra::vector;

    fn unit_tri() -> Triangle {
        Triangle::new(
            vector![0.0, 0.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![0.0, 1.0, 0.0],
        )
    }

    #[test]
    fn beta_zero_hits_vertices_and_midpoints() {
        let t = unit_tri();
        let cp = el_cp_uniform(&t, 0.0).unwrap();
        for n in 0..3 {
            assert_eq!(cp[n], t.v[n]);
        }
        assert_eq!(cp[3], vector![0.5, 0.5, 0.0]);
        assert_eq!(cp[4], vector![0.0, 0.5, 0.0]);
        assert_eq!(cp[5], vector![0.5, 0.0, 0.0]);
    }

    #[test]
    fn weighted_edge_nodes_split_by_weights() {
        let t = unit_tri();
        let w = VertexWeights::new([1.0, 3.0, 1.0]).unwrap();
        let cp = el_cp_nonuniform(&t, &w, 0.0).unwrap();
        // edge v1–v2: (3 v1 + v2) / 4
        assert!((cp[3] - vector![0.75, 0.25, 0.0]).norm() < 1e-15);
        // edge v2–v0 unaffected by w1
        assert!((cp[4] - vector![0.0, 0.5, 0.0]).norm() < 1e-15);
        // edge v0–v1: 3/4 of the way to v1
        assert!((cp[5] - vector![0.75, 0.0, 0.0]).norm() < 1e-15);
    }

    #[test]
    fn huge_equal_weights_give_midpoints() {
        let t = unit_tri();
        let w = VertexWeights::new([1e308; 3]).unwrap();
        let cp = el_cp_nonuniform(&t, &w, 0.0).unwrap();
        assert_eq!(cp, el_cp_uniform(&t, 0.0).unwrap());
        assert!(cp.iter().all(|p| p.iter().all(|x| x.is_finite())));
    }

    #[test]
    fn beta_pulls_toward_centroid() {
        let t = Triangle::new(
            vector![0.0, 0.1, 0.0],
            vector![1.8, 0.0, 0.0],
            vector![1.2, 1.8, 0.0],
        );
        let c = t.centroid();
        let p0 = el_cp_uniform(&t, 0.0).unwrap();
        let p = el_cp_uniform(&t, 0.25).unwrap();
        for k in 0..6 {
            assert!(((p[k] - c) - 0.75 * (p0[k] - c)).norm() < 1e-14);
        }
        let collapsed = el_cp_uniform(&t, 1.0).unwrap();
        for q in collapsed {
            assert!((q - c).norm() < 1e-14);
        }
    }

    #[test]
    fn non_finite_beta_rejected() {
        let err = el_cp_uniform(&unit_tri(), f64::NAN).unwrap_err();
        assert!(matches!(err, ElemError::InvalidBeta { .. }));
    }
}
