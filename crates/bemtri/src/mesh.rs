//! Read-only view over mesh arrays: node coordinates and connectivity.
//!
//! Only per-element access lives here. Topology, adjacency and DoF handling
//! belong to the assembler.
//!
//! Layout
//! - `nodes`: 3×N, column `n` = coordinates of node `n`.
//! - `conn`: one `[i, j, k]` per element, 0-based node indices; the order
//!   fixes each element's vertex 0 and normal.
//! - Collocation points are numbered element-major: point `k` of element `e`
//!   has index `6e + k`.

use nalgebra::{Matrix3xX, Vector3};

use crate::cfg::NumParams;
use crate::colloc::el_cp_nonuniform;
use crate::element::Element;
use crate::error::{ElemError, Result};
use crate::frame::Triangle;

/// Nodes per element (quadratic triangle).
pub const NODES_PER_ELEM: usize = 6;

#[derive(Clone, Debug)]
pub struct Mesh {
    nodes: Matrix3xX<f64>,
    conn: Vec<[usize; 3]>,
}

impl Mesh {
    /// Wrap mesh arrays, checking every connectivity index.
    pub fn new(nodes: Matrix3xX<f64>, conn: Vec<[usize; 3]>) -> Result<Self> {
        let n_nodes = nodes.ncols();
        for (element, tri) in conn.iter().enumerate() {
            if let Some(&node) = tri.iter().find(|&&n| n >= n_nodes) {
                return Err(ElemError::NodeIndexOutOfRange {
                    element,
                    node,
                    n_nodes,
                });
            }
        }
        Ok(Self { nodes, conn })
    }

    /// Build from one `[x, y, z]` row per node.
    pub fn from_rows(nodes: &[[f64; 3]], conn: Vec<[usize; 3]>) -> Result<Self> {
        let cols: Vec<Vector3<f64>> = nodes.iter().map(|p| Vector3::from(*p)).collect();
        Self::new(Matrix3xX::from_columns(&cols), conn)
    }

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.nodes.ncols()
    }

    #[inline]
    pub fn n_elements(&self) -> usize {
        self.conn.len()
    }

    #[inline]
    pub fn nodes(&self) -> &Matrix3xX<f64> {
        &self.nodes
    }

    #[inline]
    pub fn conn(&self) -> &[[usize; 3]] {
        &self.conn
    }

    pub fn element_vertices(&self, e: usize) -> Result<Triangle> {
        let tri = self.conn.get(e).ok_or(ElemError::ElementOutOfRange {
            element: e,
            n_elements: self.conn.len(),
        })?;
        Ok(Triangle {
            v: tri.map(|n| self.nodes.column(n).into_owned()),
        })
    }

    pub fn element(&self, e: usize, params: &NumParams) -> Result<Element> {
        Element::new(self.element_vertices(e)?, params)
    }

    /// All elements, failing on the first one that cannot be built.
    pub fn elements(&self, params: &NumParams) -> Result<Vec<Element>> {
        (0..self.n_elements())
            .map(|e| {
                self.element(e, params).map_err(|err| {
                    tracing::debug!(element = e, %err, "element rejected");
                    err
                })
            })
            .collect()
    }

    /// `6·M` collocation points in element-major order.
    ///
    /// Needs no frame, so flat elements are not rejected here.
    pub fn collocation_points(&self, params: &NumParams) -> Result<Vec<Vector3<f64>>> {
        let weights = params.partition.weights();
        let mut out = Vec::with_capacity(NODES_PER_ELEM * self.n_elements());
        for e in 0..self.n_elements() {
            let tri = self.element_vertices(e)?;
            out.extend(el_cp_nonuniform(&tri, &weights, params.beta)?);
        }
        Ok(out)
    }
}

/// Global index of collocation point `k` of element `e`.
#[inline]
pub const fn colloc_index(e: usize, k: usize) -> usize {
    NODES_PER_ELEM * e + k
}
