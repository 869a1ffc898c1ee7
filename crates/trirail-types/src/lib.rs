// ─────────────────────────────────────────────────────────────────────
// Tri-Rail Dynamics — Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Tri-Rail kernel — the Stuart–Landau network integration core.

pub mod config;
pub mod error;

pub use config::SimulationConfig;
pub use error::{TriRailError, TriRailResult};
