// ─────────────────────────────────────────────────────────────────────
// Tri-Rail Dynamics — RK4 Integrator
// ─────────────────────────────────────────────────────────────────────
//! Classical fixed-step fourth-order Runge–Kutta for the Stuart–Landau
//! network, with pre-allocated stage buffers for zero-alloc stepping.
//!
//!   k1 = f(z)
//!   k2 = f(z + dt/2·k1)
//!   k3 = f(z + dt/2·k2)
//!   k4 = f(z + dt·k3)
//!   z ← z + dt/6·(k1 + 2k2 + 2k3 + k4)
//!
//! Time-axis convention: S = ceil(t_max/dt) samples at t[idx] = idx·dt.
//! Every sample spacing equals dt; the final stamp is the last grid
//! point below t_max.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use trirail_types::{TriRailError, TriRailResult};

use crate::network::SLNetwork;

/// Complete output of one integration run.
///
/// Row-major n×steps complex matrix: row = node, column = time step.
/// Column `idx` holds the state *before* step `idx` is taken, so the
/// trajectory is exactly the S pre-step snapshots; the state after the
/// final update is not recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    n: usize,
    steps: usize,
    data: Vec<Complex64>,
    times: Vec<f64>,
}

impl Trajectory {
    /// Node count.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Recorded step count S.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Time stamps, t[idx] = idx·dt.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }

    /// Full time series of node `i`.
    pub fn node(&self, i: usize) -> &[Complex64] {
        &self.data[i * self.steps..(i + 1) * self.steps]
    }

    /// State of node `i` at step `idx`.
    pub fn sample(&self, i: usize, idx: usize) -> Complex64 {
        self.data[i * self.steps + idx]
    }

    /// Amplitude |z_i| at step `idx`.
    pub fn amplitude(&self, i: usize, idx: usize) -> f64 {
        self.sample(i, idx).norm()
    }

    /// Snapshot of all nodes at step `idx` (column copy).
    pub fn step_state(&self, idx: usize) -> Vec<Complex64> {
        (0..self.n).map(|i| self.sample(i, idx)).collect()
    }
}

/// RK4 stepper bound to one network and step size for the whole run.
pub struct Rk4Stepper {
    net: SLNetwork,
    dt: f64,
    // Pre-allocated stage scratch
    k1: Vec<Complex64>,
    k2: Vec<Complex64>,
    k3: Vec<Complex64>,
    k4: Vec<Complex64>,
    stage: Vec<Complex64>,
}

impl Rk4Stepper {
    pub fn new(net: SLNetwork, dt: f64) -> TriRailResult<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(TriRailError::InvalidParameter(format!(
                "dt must be finite and > 0, got {dt}"
            )));
        }
        let n = net.n();
        let zero = Complex64::new(0.0, 0.0);
        Ok(Self {
            net,
            dt,
            k1: vec![zero; n],
            k2: vec![zero; n],
            k3: vec![zero; n],
            k4: vec![zero; n],
            stage: vec![zero; n],
        })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn network(&self) -> &SLNetwork {
        &self.net
    }

    /// Advance `z` by one RK4 step of width dt, in place.
    pub fn step(&mut self, z: &mut [Complex64]) -> TriRailResult<()> {
        let n = self.net.n();
        if z.len() != n {
            return Err(TriRailError::DimensionMismatch {
                context: "state vector",
                expected: n,
                actual: z.len(),
            });
        }
        let dt = self.dt;

        self.net.derivative_into(z, &mut self.k1);
        for i in 0..n {
            self.stage[i] = z[i] + self.k1[i] * (0.5 * dt);
        }
        self.net.derivative_into(&self.stage, &mut self.k2);
        for i in 0..n {
            self.stage[i] = z[i] + self.k2[i] * (0.5 * dt);
        }
        self.net.derivative_into(&self.stage, &mut self.k3);
        for i in 0..n {
            self.stage[i] = z[i] + self.k3[i] * dt;
        }
        self.net.derivative_into(&self.stage, &mut self.k4);

        let w = dt / 6.0;
        for i in 0..n {
            z[i] += (self.k1[i] + (self.k2[i] + self.k3[i]) * 2.0 + self.k4[i]) * w;
        }
        Ok(())
    }

    /// Integrate from `z0` over [0, t_max), recording S = ceil(t_max/dt)
    /// pre-step snapshots at t[idx] = idx·dt.
    ///
    /// Unbounded growth under unstable parameters is a model outcome,
    /// not an error; the first non-finite state logs a single warning
    /// and integration continues.
    pub fn integrate(&mut self, z0: &[Complex64], t_max: f64) -> TriRailResult<Trajectory> {
        let n = self.net.n();
        if z0.len() != n {
            return Err(TriRailError::DimensionMismatch {
                context: "initial state",
                expected: n,
                actual: z0.len(),
            });
        }
        if !t_max.is_finite() || t_max < 0.0 {
            return Err(TriRailError::InvalidParameter(format!(
                "t_max must be finite and >= 0, got {t_max}"
            )));
        }

        let steps = (t_max / self.dt).ceil() as usize;
        let mut data = vec![Complex64::new(0.0, 0.0); n * steps];
        let mut times = vec![0.0; steps];
        let mut z = z0.to_vec();
        let mut warned_nonfinite = false;

        for idx in 0..steps {
            for i in 0..n {
                data[i * steps + idx] = z[i];
            }
            times[idx] = idx as f64 * self.dt;
            self.step(&mut z)?;
            if !warned_nonfinite && z.iter().any(|v| !v.is_finite()) {
                log::warn!(
                    "state went non-finite at t = {:.6}; integration continues",
                    times[idx] + self.dt
                );
                warned_nonfinite = true;
            }
        }

        Ok(Trajectory {
            n,
            steps,
            data,
            times,
        })
    }
}

/// Integrate a Stuart–Landau network in one call.
///
/// Convenience wrapper over [`SLNetwork::new`] and [`Rk4Stepper`];
/// `coupling` is row-major n×n.
pub fn integrate(
    z0: &[Complex64],
    lambda: Vec<f64>,
    omega: Vec<f64>,
    coupling: Vec<f64>,
    dt: f64,
    t_max: f64,
) -> TriRailResult<Trajectory> {
    let net = SLNetwork::new(lambda, omega, coupling)?;
    Rk4Stepper::new(net, dt)?.integrate(z0, t_max)
}
