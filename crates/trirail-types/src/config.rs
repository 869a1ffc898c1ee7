// ─────────────────────────────────────────────────────────────────────
// Tri-Rail Dynamics — Run Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{TriRailError, TriRailResult};

/// Runtime configuration for one integration run.
///
/// Contains only the knobs the numerical core needs. Plot styling,
/// output paths, and figure layout stay with the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fixed RK4 step size (time units). Default: 0.02.
    pub dt: f64,

    /// Integration horizon; the run covers [0, t_max). Default: 400.0.
    pub t_max: f64,

    /// Amplitude scale of the random initial state. Default: 1e-3.
    pub init_scale: f64,

    /// RNG seed for the initial state. Default: 1.
    pub seed: u64,

    /// Optional per-node coherence weights. None means uniform weights.
    pub weights: Option<Vec<f64>>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: 0.02,
            t_max: 400.0,
            init_scale: 1e-3,
            seed: 1,
            weights: None,
        }
    }
}

impl SimulationConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> TriRailResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(TriRailError::Config(format!(
                "dt must be finite and > 0, got {}",
                self.dt
            )));
        }
        if !self.t_max.is_finite() || self.t_max < 0.0 {
            return Err(TriRailError::Config(format!(
                "t_max must be finite and >= 0, got {}",
                self.t_max
            )));
        }
        if !self.init_scale.is_finite() || self.init_scale < 0.0 {
            return Err(TriRailError::Config(format!(
                "init_scale must be finite and >= 0, got {}",
                self.init_scale
            )));
        }
        if let Some(weights) = &self.weights {
            if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(TriRailError::Config(
                    "weights must be finite and non-negative".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> TriRailResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| TriRailError::Config(format!("JSON parse error: {e}")))
    }
}
