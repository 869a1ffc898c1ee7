// ─────────────────────────────────────────────────────────────────────
// Tri-Rail Dynamics — Run Orchestrator
// ─────────────────────────────────────────────────────────────────────
//! Binds a validated configuration to a network and produces the full
//! {trajectory, coherence} result in one call. Rendering, directory
//! handling, and file output stay with the caller.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use trirail_types::{SimulationConfig, TriRailError, TriRailResult};

use crate::coherence::global_coherence;
use crate::init::random_initial_state;
use crate::integrator::{Rk4Stepper, Trajectory};
use crate::network::SLNetwork;

/// Output of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub trajectory: Trajectory,
    pub coherence: Vec<f64>,
}

/// One-shot orchestrator: config + network → trajectory + coherence.
#[derive(Debug)]
pub struct Simulation {
    net: SLNetwork,
    cfg: SimulationConfig,
}

impl Simulation {
    /// Bind a network to a run configuration.
    ///
    /// Validates the configuration and, when weights are present, their
    /// length against the network.
    pub fn new(net: SLNetwork, cfg: SimulationConfig) -> TriRailResult<Self> {
        cfg.validate()?;
        if let Some(w) = &cfg.weights {
            if w.len() != net.n() {
                return Err(TriRailError::DimensionMismatch {
                    context: "weight vector",
                    expected: net.n(),
                    actual: w.len(),
                });
            }
        }
        Ok(Self { net, cfg })
    }

    /// Canonical three-rail system with the given run configuration.
    pub fn canonical(cfg: SimulationConfig) -> TriRailResult<Self> {
        Self::new(SLNetwork::canonical(), cfg)
    }

    pub fn network(&self) -> &SLNetwork {
        &self.net
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.cfg
    }

    /// Run from a seeded random initial state.
    pub fn run(&self) -> TriRailResult<SimulationResult> {
        let z0 = random_initial_state(self.net.n(), self.cfg.init_scale, self.cfg.seed);
        self.run_from(&z0)
    }

    /// Run from a caller-supplied initial state.
    pub fn run_from(&self, z0: &[Complex64]) -> TriRailResult<SimulationResult> {
        let mut stepper = Rk4Stepper::new(self.net.clone(), self.cfg.dt)?;
        let trajectory = stepper.integrate(z0, self.cfg.t_max)?;
        let coherence = global_coherence(&trajectory, self.cfg.weights.as_deref())?;
        Ok(SimulationResult {
            trajectory,
            coherence,
        })
    }
}
