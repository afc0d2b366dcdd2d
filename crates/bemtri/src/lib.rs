//! Geometry of flat triangular boundary elements for a 3D
//! displacement-discontinuity BEM.
//!
//! Per element: local orthonormal frame, complex τ-coordinates, the 6×6
//! quadratic shape-function matrix (SFM) over `[1, τ, τ̄, τ², τ̄², ττ̄]`, the
//! basis shift operator, and the six collocation points. Kernel integration,
//! matrix assembly and mesh I/O consume these and live elsewhere.
//!
//! Conventions
//! - f64 throughout; complex values are `num_complex::Complex64`.
//! - Vertex 0 is the local origin; node `k` of the SFM is collocation point `k`
//!   (vertex nodes 0–2, opposite-edge nodes 3–5).
//! - Entry points that build element data validate their input and return
//!   [`Result`]; degenerate geometry never leaks out as NaNs.

pub mod api;
pub mod cfg;
pub mod colloc;
pub mod coords;
pub mod element;
pub mod error;
pub mod frame;
pub mod mesh;
pub mod rand;
pub mod sfm;
pub mod shift;
pub mod vec3;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{ElemCfg, NumParams, Partition, VertexWeights};
pub use element::Element;
pub use error::{ElemError, Result};
pub use frame::Triangle;
pub use num_complex::Complex64;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{ElemCfg, NumParams, Partition, VertexWeights};
    pub use crate::colloc::{el_cp_nonuniform, el_cp_uniform, CollocPoints};
    pub use crate::coords::{make_el_pt_hz, make_el_tau_2_mc, make_el_tau_crd, HZ};
    pub use crate::element::Element;
    pub use crate::error::{ElemError, Result};
    pub use crate::frame::{make_el_r_tensor, Triangle};
    pub use crate::mesh::Mesh;
    pub use crate::sfm::{eval_basis, make_el_sfm_nonuniform, make_el_sfm_uniform, ElemSfm};
    pub use crate::shift::shift_el_sfm;
    pub use nalgebra::{Matrix3, Matrix6, Vector3};
    pub use num_complex::Complex64;
}
