//! Tolerances and numerical parameters.
//!
//! Policy
//! - Degeneracy thresholds are relative, so a triangle and its scaled copy are
//!   accepted or rejected together.
//! - `NumParams` holds what the solver chooses per run (collocation offset,
//!   edge partitioning); `ElemCfg` holds what it should rarely touch.

use crate::error::{ElemError, Result};

/// Orthonormality tolerance for debug checks on freshly built frames.
pub(crate) const ORTHO_EPS: f64 = 1e-10;

/// Collocation offset toward the centroid used by the fault solver.
pub const DEFAULT_BETA: f64 = 0.125;

/// Element geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct ElemCfg {
    /// Minimum `|v1 - v0|` and `|e1 × (v2 - v0)|`, relative to the longest of
    /// the two edges leaving vertex 0.
    pub eps_len: f64,
    /// Minimum `|D|` of the tau → master inversion, relative to `|τ1|·|τ2|`.
    pub eps_det: f64,
}

impl Default for ElemCfg {
    fn default() -> Self {
        Self {
            eps_len: 1e-12,
            eps_det: 1e-12,
        }
    }
}

/// Smallest accepted `w_i / max(w)`. Below it the edge node lies within
/// `eps_len` of a vertex and the master coefficients grow without bound.
pub const MIN_WEIGHT_RATIO: f64 = 1e-12;

/// Edge-partition weights, one strictly positive value per vertex.
///
/// Edge node between vertices `m` and `l` sits at
/// `(w_m v_m + w_l v_l) / (w_m + w_l)`; equal weights give the midpoint.
/// Only the ratios matter, so the stored weights are scaled to `max = 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexWeights([f64; 3]);

impl VertexWeights {
    /// Validate, then scale by the largest weight.
    ///
    /// Rejects zero, negative and non-finite entries, and entries smaller
    /// than `MIN_WEIGHT_RATIO` times the largest one.
    pub fn new(w: [f64; 3]) -> Result<Self> {
        for (index, &value) in w.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ElemError::InvalidWeight { index, value });
            }
        }
        let max = w.iter().fold(0.0_f64, |a, &b| a.max(b));
        let scaled = w.map(|x| x / max);
        for (index, &s) in scaled.iter().enumerate() {
            if s < MIN_WEIGHT_RATIO {
                return Err(ElemError::InvalidWeight {
                    index,
                    value: w[index],
                });
            }
        }
        Ok(Self(scaled))
    }

    #[inline]
    pub fn uniform() -> Self {
        Self([1.0; 3])
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 3] {
        self.0
    }

    /// Pairwise ratios `(p12, p13, p23) = (w0/w1, w0/w2, w1/w2)`.
    #[inline]
    pub fn ratios(&self) -> (f64, f64, f64) {
        let [w0, w1, w2] = self.0;
        (w0 / w1, w0 / w2, w1 / w2)
    }
}

impl Default for VertexWeights {
    fn default() -> Self {
        Self::uniform()
    }
}

impl std::ops::Index<usize> for VertexWeights {
    type Output = f64;
    #[inline]
    fn index(&self, k: usize) -> &f64 {
        &self.0[k]
    }
}

/// How element edges are split by the edge nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Partition {
    /// Edge nodes at midpoints.
    #[default]
    Uniform,
    /// Edge nodes at weight-proportional points.
    Weighted(VertexWeights),
}

impl Partition {
    #[inline]
    pub fn weights(&self) -> VertexWeights {
        match *self {
            Partition::Uniform => VertexWeights::uniform(),
            Partition::Weighted(w) => w,
        }
    }
}

/// Per-run numerical parameters that shape the element data.
#[derive(Clone, Copy, Debug)]
pub struct NumParams {
    /// Relative offset of collocation points toward the element centroid.
    pub beta: f64,
    pub partition: Partition,
    pub cfg: ElemCfg,
}

impl Default for NumParams {
    fn default() -> Self {
        Self {
            beta: DEFAULT_BETA,
            partition: Partition::Uniform,
            cfg: ElemCfg::default(),
        }
    }
}

impl NumParams {
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_weights(mut self, w: VertexWeights) -> Self {
        self.partition = Partition::Weighted(w);
        self
    }
}

pub(crate) fn check_beta(beta: f64) -> Result<f64> {
    if beta.is_finite() {
        Ok(beta)
    } else {
        Err(ElemError::InvalidBeta { beta })
    }
}
