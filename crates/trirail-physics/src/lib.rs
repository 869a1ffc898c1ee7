// ─────────────────────────────────────────────────────────────────────
// Tri-Rail Dynamics — Stuart–Landau Network Physics
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Stuart–Landau network physics for the three-rail system:
//! dynamics evaluation, fixed-step RK4 integration, and the global
//! coherence order parameter.
//!
//! The core is a pure numerical API. Callers supply per-node parameters,
//! a coupling matrix, and an initial state; the kernel returns the full
//! trajectory and its derived coherence series. No I/O, no randomness
//! beyond the explicitly seeded initial-state helper.

pub mod coherence;
pub mod init;
pub mod integrator;
pub mod network;
pub mod params;
pub mod simulation;

pub use coherence::{global_coherence, weighted_order_parameter};
pub use init::{random_initial_state, SimpleRng};
pub use integrator::{integrate, Rk4Stepper, Trajectory};
pub use network::{evaluate_dynamics, SLNetwork};
pub use params::{build_coupling_matrix, LAMBDA_N, N_RAILS, OMEGA_N, RAIL_NAMES};
pub use simulation::{Simulation, SimulationResult};
