// ─────────────────────────────────────────────────────────────────────
// Tri-Rail Dynamics — Global Coherence
// ─────────────────────────────────────────────────────────────────────
//! Global coherence order parameter per trajectory step:
//!
//!   R = |Σ_n w_n z_n| / Σ_n w_n |z_n|
//!
//! R = 1 for perfectly aligned phases, R → 0 for cancelling phases.
//! Bounded by the triangle inequality for non-negative weights.

use num_complex::Complex64;

use trirail_types::{TriRailError, TriRailResult};

use crate::integrator::Trajectory;

/// Floor substituted for an exactly-zero denominator.
const DENOM_FLOOR: f64 = 1e-12;

/// Order parameter of a single weighted sample.
///
/// Slices must have equal length.
pub fn weighted_order_parameter(z: &[Complex64], weights: &[f64]) -> f64 {
    debug_assert_eq!(z.len(), weights.len());
    let mut sum = Complex64::new(0.0, 0.0);
    let mut denom = 0.0;
    for (&zi, &w) in z.iter().zip(weights) {
        sum += zi * w;
        denom += w * zi.norm();
    }
    let denom = if denom == 0.0 { DENOM_FLOOR } else { denom };
    (sum.norm() / denom).clamp(0.0, 1.0)
}

/// Reduce a trajectory to its coherence series R(t).
///
/// `weights` defaults to all ones; its length must equal the node count.
pub fn global_coherence(
    traj: &Trajectory,
    weights: Option<&[f64]>,
) -> TriRailResult<Vec<f64>> {
    let n = traj.n();
    let uniform;
    let w = match weights {
        Some(w) => {
            if w.len() != n {
                return Err(TriRailError::DimensionMismatch {
                    context: "weight vector",
                    expected: n,
                    actual: w.len(),
                });
            }
            w
        }
        None => {
            uniform = vec![1.0; n];
            &uniform
        }
    };

    let steps = traj.steps();
    let mut series = Vec::with_capacity(steps);
    for idx in 0..steps {
        let mut sum = Complex64::new(0.0, 0.0);
        let mut denom = 0.0;
        for (i, &wi) in w.iter().enumerate() {
            let zi = traj.sample(i, idx);
            sum += zi * wi;
            denom += wi * zi.norm();
        }
        let denom = if denom == 0.0 { DENOM_FLOOR } else { denom };
        series.push((sum.norm() / denom).clamp(0.0, 1.0));
    }
    Ok(series)
}
