//! JSON documents read and written by the CLI.

use bemtri::mesh::Mesh;
use bemtri::{Complex64, Element, NumParams, Partition};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Mesh input: one `[x, y, z]` per node, one `[i, j, k]` per element (0-based).
#[derive(Debug, Deserialize)]
pub struct MeshDoc {
    pub nodes: Vec<[f64; 3]>,
    pub conn: Vec<[usize; 3]>,
}

#[derive(Debug, Serialize)]
pub struct ParamsDoc {
    pub beta: f64,
    /// `null` for uniform partitioning.
    pub weights: Option<[f64; 3]>,
}

impl From<&NumParams> for ParamsDoc {
    fn from(p: &NumParams) -> Self {
        Self {
            beta: p.beta,
            weights: match p.partition {
                Partition::Uniform => None,
                Partition::Weighted(w) => Some(w.as_array()),
            },
        }
    }
}

#[inline]
fn re_im(c: &Complex64) -> [f64; 2] {
    [c.re, c.im]
}

#[inline]
fn xyz(v: &Vector3<f64>) -> [f64; 3] {
    [v.x, v.y, v.z]
}

#[derive(Debug, Serialize)]
pub struct ElementReport {
    pub params: ParamsDoc,
    pub vertices: [[f64; 3]; 3],
    /// Rows e1, e2, e3.
    pub r_tensor: [[f64; 3]; 3],
    /// `[re, im]` per vertex.
    pub tau: [[f64; 2]; 3],
    /// Row i = basis i over [1, τ, τ̄, τ², τ̄², ττ̄], entries `[re, im]`.
    pub sfm: Vec<Vec<[f64; 2]>>,
    pub collocation_points: Vec<[f64; 3]>,
}

impl ElementReport {
    pub fn from_element(el: &Element, params: &NumParams) -> Self {
        let r = &el.r_tensor;
        Self {
            params: params.into(),
            vertices: el.tri.v.map(|v| xyz(&v)),
            r_tensor: [0, 1, 2].map(|i| [r[(i, 0)], r[(i, 1)], r[(i, 2)]]),
            tau: el.tau.map(|t| re_im(&t)),
            sfm: el
                .sfm
                .row_iter()
                .map(|row| row.iter().map(re_im).collect())
                .collect(),
            collocation_points: el.colloc.iter().map(xyz).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MeshReport {
    pub params: ParamsDoc,
    pub n_nodes: usize,
    pub n_elements: usize,
    /// Element-major: point `6e + k` is node `k` of element `e`.
    pub points: Vec<[f64; 3]>,
}

impl MeshReport {
    pub fn new(mesh: &Mesh, params: &NumParams, points: &[Vector3<f64>]) -> Self {
        Self {
            params: params.into(),
            n_nodes: mesh.n_nodes(),
            n_elements: mesh.n_elements(),
            points: points.iter().map(xyz).collect(),
        }
    }
}
