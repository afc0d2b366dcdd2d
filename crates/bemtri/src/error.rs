//! Error type for element geometry.
//!
//! Every failure here is a geometric or numeric precondition violation on the
//! input (flat triangle, bad weight, broken connectivity). Nothing is retried;
//! an element either builds completely or reports one of these.

use thiserror::Error;

/// Reasons an element (or a mesh view over elements) cannot be built.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ElemError {
    /// First edge or normal has (numerically) zero length: zero-area triangle.
    #[error("degenerate triangle: |v1 - v0| = {edge_len:e}, |e1 x (v2 - v0)| = {normal_len:e}")]
    DegenerateTriangle { edge_len: f64, normal_len: f64 },

    /// Determinant of the tau → master inversion is (numerically) zero.
    #[error("singular tau-to-master map: |D| = {det:e}")]
    SingularTauMap { det: f64 },

    /// Edge-partition weight is not a finite positive number, or is too small
    /// next to the largest weight.
    #[error("invalid vertex weight w{index} = {value} (must be finite, > 0 and at least 1e-12 of the largest)")]
    InvalidWeight { index: usize, value: f64 },

    /// Collocation offset is NaN or infinite.
    #[error("invalid collocation offset beta = {beta} (must be finite)")]
    InvalidBeta { beta: f64 },

    /// Connectivity references a node that does not exist.
    #[error("element {element} references node {node}, but the mesh has {n_nodes} nodes")]
    NodeIndexOutOfRange {
        element: usize,
        node: usize,
        n_nodes: usize,
    },

    /// Element index past the end of the connectivity table.
    #[error("element {element} out of range (mesh has {n_elements} elements)")]
    ElementOutOfRange { element: usize, n_elements: usize },
}

impl ElemError {
    /// `true` for failures caused by the element's shape rather than by
    /// indexing or parameters.
    pub fn is_geometric(&self) -> bool {
        matches!(
            self,
            ElemError::DegenerateTriangle { .. } | ElemError::SingularTauMap { .. }
        )
    }
}

/// Result alias for element geometry.
pub type Result<T> = std::result::Result<T, ElemError>;
