//! Quadratic nodal basis on the master triangle.
//!
//! Nodes: 0,1,2 at the corners (0,0), (1,0), (0,1); node 3+n on the edge
//! opposite corner n, splitting it by the weights of its two endpoints.
//! Rows hold coefficients in `[1, x, y, x², y², xy]`.

use nalgebra::{Matrix6, Vector6};

use crate::cfg::VertexWeights;

/// Monomials `[1, x, y, x², y², xy]`.
#[inline]
pub fn xy_monomials(x: f64, y: f64) -> Vector6<f64> {
    Vector6::new(1.0, x, y, x * x, y * y, x * y)
}

/// Master-element shape-function coefficients for edge partitioning `w`.
///
/// With uniform weights the rows reduce to the standard quadratic Lagrange
/// basis: `1 - 3x - 3y + 2x² + 2y² + 4xy`, `2x² - x`, `2y² - y`, `4xy`,
/// `4y - 4y² - 4xy`, `4x - 4x² - 4xy`.
pub fn master_coeffs(w: &VertexWeights) -> Matrix6<f64> {
    let (p12, p13, p23) = w.ratios();
    // c_ijk = (w_i + w_j) / w_k, c_ijq = c_iji + c_ijj
    let c122 = p12 + 1.0;
    let c121 = 1.0 / p12 + 1.0;
    let c12q = c121 + c122;
    let c233 = p23 + 1.0;
    let c232 = 1.0 / p23 + 1.0;
    let c23q = c232 + c233;
    let c133 = p13 + 1.0;
    let c131 = 1.0 / p13 + 1.0;
    let c13q = c131 + c133;

    let mut m = Matrix6::zeros();
    m[(0, 0)] = 1.0;
    m[(0, 1)] = -p12 - 2.0;
    m[(0, 2)] = -p13 - 2.0;
    m[(0, 3)] = c122;
    m[(0, 4)] = c133;
    m[(0, 5)] = p13 + p12 + 2.0;

    m[(1, 1)] = -1.0 / p12;
    m[(1, 3)] = c121;
    m[(1, 5)] = 1.0 / p12 - p23;

    m[(2, 2)] = -1.0 / p13;
    m[(2, 4)] = c131;
    m[(2, 5)] = 1.0 / p13 - 1.0 / p23;

    m[(3, 5)] = c23q;

    m[(4, 2)] = c13q;
    m[(4, 4)] = -c13q;
    m[(4, 5)] = -c13q;

    m[(5, 1)] = c12q;
    m[(5, 3)] = -c12q;
    m[(5, 5)] = -c12q;
    m
}

/// Master coordinates of the six nodes for partitioning `w`.
pub fn master_nodes(w: &VertexWeights) -> [(f64, f64); 6] {
    let [w0, w1, w2] = w.as_array();
    [
        (0.0, 0.0),
        (1.0, 0.0),
        (0.0, 1.0),
        (w1 / (w1 + w2), w2 / (w1 + w2)),
        (0.0, w2 / (w2 + w0)),
        (w1 / (w0 + w1), 0.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_nodal(w: &VertexWeights) {
        let m = master_coeffs(w);
        for (j, (x, y)) in master_nodes(w).into_iter().enumerate() {
            let vals = m * xy_monomials(x, y);
            for i in 0..6 {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (vals[i] - expect).abs() < 1e-12,
                    "N{i}(node {j}) = {} for {:?}",
                    vals[i],
                    w
                );
            }
        }
    }

    #[test]
    fn uniform_constants() {
        let m = master_coeffs(&VertexWeights::uniform());
        let expect = Matrix6::new(
            1.0, -3.0, -3.0, 2.0, 2.0, 4.0, //
            0.0, -1.0, 0.0, 2.0, 0.0, 0.0, //
            0.0, 0.0, -1.0, 0.0, 2.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, 0.0, 4.0, //
            0.0, 0.0, 4.0, 0.0, -4.0, -4.0, //
            0.0, 4.0, 0.0, -4.0, 0.0, -4.0,
        );
        assert_eq!(m, expect);
    }

    #[test]
    fn nodal_on_master_uniform_and_weighted() {
        assert_nodal(&VertexWeights::uniform());
        assert_nodal(&VertexWeights::new([1.0, 2.0, 3.0]).unwrap());
        assert_nodal(&VertexWeights::new([0.5, 1.7, 1.1]).unwrap());
    }

    #[test]
    fn partition_of_unity() {
        let w = VertexWeights::new([2.0, 0.7, 1.3]).unwrap();
        let m = master_coeffs(&w);
        for &(x, y) in &[(0.1, 0.2), (0.3, 0.6), (0.25, 0.25)] {
            let s: f64 = (m * xy_monomials(x, y)).sum();
            assert!((s - 1.0).abs() < 1e-12);
        }
    }
}
