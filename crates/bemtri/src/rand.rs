//! Random well-shaped triangles and edge weights (seeded, replayable).
//!
//! Used by property tests and benches. Each draw is addressed by a
//! `(seed, index)` token so a failing case can be replayed on its own.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::VertexWeights;
use crate::error::{ElemError, Result};
use crate::frame::Triangle;

/// Triangle sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TriangleCfg {
    /// Vertices are drawn from the cube `[-extent, extent]³`.
    pub extent: f64,
    /// Reject triangles with an interior angle below this (degrees).
    pub min_angle_deg: f64,
    /// Rejection-sampling budget per draw.
    pub max_tries: usize,
}

impl Default for TriangleCfg {
    fn default() -> Self {
        Self {
            extent: 2.0,
            min_angle_deg: 10.0,
            max_tries: 256,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Smallest interior angle, radians. Zero for a degenerate triangle.
pub fn min_angle(tri: &Triangle) -> f64 {
    let mut best = std::f64::consts::PI;
    for k in 0..3 {
        let a = tri.v[(k + 1) % 3] - tri.v[k];
        let b = tri.v[(k + 2) % 3] - tri.v[k];
        let denom = a.norm() * b.norm();
        if denom == 0.0 {
            return 0.0;
        }
        let cos = (a.dot(&b) / denom).clamp(-1.0, 1.0);
        best = best.min(cos.acos());
    }
    best
}

/// Draw a triangle whose smallest angle is at least `cfg.min_angle_deg`.
///
/// Returns `None` if the budget runs out (only for extreme angle bounds).
pub fn draw_triangle(cfg: TriangleCfg, tok: ReplayToken) -> Option<Triangle> {
    let mut rng = tok.to_std_rng();
    let ext = cfg.extent.abs().max(1e-9);
    let min_angle_rad = cfg.min_angle_deg.to_radians();
    for _ in 0..cfg.max_tries.max(1) {
        let mut pt = || {
            Vector3::new(
                rng.gen_range(-ext..ext),
                rng.gen_range(-ext..ext),
                rng.gen_range(-ext..ext),
            )
        };
        let tri = Triangle::new(pt(), pt(), pt());
        if min_angle(&tri) >= min_angle_rad {
            return Some(tri);
        }
    }
    None
}

/// Draw edge weights uniformly from `[lo, hi]` (both clamped to be positive).
///
/// A non-finite bound is reported as `InvalidWeight` carrying that bound.
pub fn draw_weights(lo: f64, hi: f64, tok: ReplayToken) -> Result<VertexWeights> {
    for (index, value) in [(0, lo), (1, hi)] {
        if !value.is_finite() {
            return Err(ElemError::InvalidWeight { index, value });
        }
    }
    let mut rng = tok.to_std_rng();
    let lo = lo.max(1e-6);
    let hi = hi.max(lo);
    let w = [
        rng.gen_range(lo..=hi),
        rng.gen_range(lo..=hi),
        rng.gen_range(lo..=hi),
    ];
    VertexWeights::new(w)
}
