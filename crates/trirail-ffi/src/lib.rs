// ─────────────────────────────────────────────────────────────────────
// Tri-Rail Dynamics — PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied — PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the Tri-Rail Stuart–Landau kernel.
//!
//! Exposes `SLNetwork`, `Trajectory`, `SimulationConfig`, and the free
//! functions `evaluate_dynamics`, `integrate`, `global_coherence`, and
//! `random_initial_state` to Python. Complex state crosses the boundary
//! as native Python complex numbers. Plotting and file output stay on
//! the Python side.
//!
//! Install: `pip install -e crates/trirail-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from trirail_kernel import SLNetwork, integrate, global_coherence
//!
//! net = SLNetwork.canonical()
//! traj = integrate(z0, lambdas, omegas, coupling, dt=0.02, t_max=400.0)
//! R = global_coherence(traj)
//! ```

use num_complex::Complex64;
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use trirail_physics::{SLNetwork, Simulation, Trajectory};
use trirail_types::{SimulationConfig, TriRailError};

fn to_py_err(e: TriRailError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ─── PySimulationConfig ─────────────────────────────────────────────

/// Python-visible run configuration.
#[pyclass(name = "SimulationConfig")]
#[derive(Clone)]
struct PySimulationConfig {
    inner: SimulationConfig,
}

#[pymethods]
impl PySimulationConfig {
    #[new]
    #[pyo3(signature = (dt = 0.02, t_max = 400.0, init_scale = 1e-3, seed = 1, weights = None))]
    fn new(
        dt: f64,
        t_max: f64,
        init_scale: f64,
        seed: u64,
        weights: Option<Vec<f64>>,
    ) -> PyResult<Self> {
        let cfg = SimulationConfig {
            dt,
            t_max,
            init_scale,
            seed,
            weights,
        };
        cfg.validate().map_err(to_py_err)?;
        Ok(Self { inner: cfg })
    }

    /// Construct from JSON string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let cfg = SimulationConfig::from_json(json).map_err(to_py_err)?;
        cfg.validate().map_err(to_py_err)?;
        Ok(Self { inner: cfg })
    }

    #[getter]
    fn dt(&self) -> f64 {
        self.inner.dt
    }

    #[getter]
    fn t_max(&self) -> f64 {
        self.inner.t_max
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.inner.seed
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationConfig(dt={}, t_max={}, init_scale={}, seed={})",
            self.inner.dt, self.inner.t_max, self.inner.init_scale, self.inner.seed
        )
    }
}

// ─── PyTrajectory ───────────────────────────────────────────────────

/// Python-visible integration output.
#[pyclass(name = "Trajectory")]
#[derive(Clone)]
struct PyTrajectory {
    inner: Trajectory,
}

#[pymethods]
impl PyTrajectory {
    #[getter]
    fn n(&self) -> usize {
        self.inner.n()
    }

    #[getter]
    fn steps(&self) -> usize {
        self.inner.steps()
    }

    /// Time stamps, t[idx] = idx·dt.
    fn times(&self) -> Vec<f64> {
        self.inner.times().to_vec()
    }

    /// Complex time series of node `i`.
    fn node(&self, i: usize) -> PyResult<Vec<Complex64>> {
        if i >= self.inner.n() {
            return Err(PyIndexError::new_err(format!(
                "node index {i} out of range for {} nodes",
                self.inner.n()
            )));
        }
        Ok(self.inner.node(i).to_vec())
    }

    /// Amplitude series |z_i(t)| of node `i`.
    fn amplitudes(&self, i: usize) -> PyResult<Vec<f64>> {
        if i >= self.inner.n() {
            return Err(PyIndexError::new_err(format!(
                "node index {i} out of range for {} nodes",
                self.inner.n()
            )));
        }
        Ok((0..self.inner.steps())
            .map(|idx| self.inner.amplitude(i, idx))
            .collect())
    }

    fn __repr__(&self) -> String {
        format!(
            "Trajectory(n={}, steps={})",
            self.inner.n(),
            self.inner.steps()
        )
    }
}

// ─── PySLNetwork ────────────────────────────────────────────────────

/// Python-visible Stuart–Landau network.
#[pyclass(name = "SLNetwork")]
#[derive(Clone)]
struct PySLNetwork {
    inner: SLNetwork,
}

#[pymethods]
impl PySLNetwork {
    #[new]
    fn new(lambdas: Vec<f64>, omegas: Vec<f64>, coupling: Vec<Vec<f64>>) -> PyResult<Self> {
        let flat: Vec<f64> = coupling.into_iter().flatten().collect();
        SLNetwork::new(lambdas, omegas, flat)
            .map(|inner| Self { inner })
            .map_err(to_py_err)
    }

    /// Canonical three-rail network (Light / Our / Dark).
    #[staticmethod]
    fn canonical() -> Self {
        Self {
            inner: SLNetwork::canonical(),
        }
    }

    #[getter]
    fn n(&self) -> usize {
        self.inner.n()
    }

    /// Evaluate dz/dt for the given complex state.
    fn derivative(&self, z: Vec<Complex64>) -> PyResult<Vec<Complex64>> {
        self.inner.derivative(&z).map_err(to_py_err)
    }

    /// Run a full simulation under the given configuration.
    ///
    /// Returns (trajectory, coherence_series).
    fn simulate(&self, config: PySimulationConfig) -> PyResult<(PyTrajectory, Vec<f64>)> {
        let sim = Simulation::new(self.inner.clone(), config.inner).map_err(to_py_err)?;
        let result = sim.run().map_err(to_py_err)?;
        Ok((
            PyTrajectory {
                inner: result.trajectory,
            },
            result.coherence,
        ))
    }

    fn __repr__(&self) -> String {
        format!("SLNetwork(n={})", self.inner.n())
    }
}

// ─── Free functions ─────────────────────────────────────────────────

/// Evaluate the network right-hand side for one state.
#[pyfunction]
fn evaluate_dynamics(
    z: Vec<Complex64>,
    lambdas: Vec<f64>,
    omegas: Vec<f64>,
    coupling: Vec<Vec<f64>>,
) -> PyResult<Vec<Complex64>> {
    let flat: Vec<f64> = coupling.into_iter().flatten().collect();
    trirail_physics::evaluate_dynamics(&z, lambdas, omegas, flat).map_err(to_py_err)
}

/// Integrate a Stuart–Landau network with fixed-step RK4.
#[pyfunction]
#[pyo3(signature = (z0, lambdas, omegas, coupling, dt = 0.02, t_max = 400.0))]
fn integrate(
    z0: Vec<Complex64>,
    lambdas: Vec<f64>,
    omegas: Vec<f64>,
    coupling: Vec<Vec<f64>>,
    dt: f64,
    t_max: f64,
) -> PyResult<PyTrajectory> {
    let flat: Vec<f64> = coupling.into_iter().flatten().collect();
    trirail_physics::integrate(&z0, lambdas, omegas, flat, dt, t_max)
        .map(|inner| PyTrajectory { inner })
        .map_err(to_py_err)
}

/// Global coherence series R(t) of a trajectory.
#[pyfunction]
#[pyo3(signature = (trajectory, weights = None))]
fn global_coherence(
    trajectory: PyRef<'_, PyTrajectory>,
    weights: Option<Vec<f64>>,
) -> PyResult<Vec<f64>> {
    trirail_physics::global_coherence(&trajectory.inner, weights.as_deref())
        .map_err(to_py_err)
}

/// Seeded random complex initial state `scale·(N + iN)` per node.
#[pyfunction]
#[pyo3(signature = (n, scale = 1e-3, seed = 1))]
fn random_initial_state(n: usize, scale: f64, seed: u64) -> Vec<Complex64> {
    trirail_physics::random_initial_state(n, scale, seed)
}

// ─── Module ─────────────────────────────────────────────────────────

#[pymodule]
fn trirail_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySimulationConfig>()?;
    m.add_class::<PySLNetwork>()?;
    m.add_class::<PyTrajectory>()?;
    m.add_function(wrap_pyfunction!(evaluate_dynamics, m)?)?;
    m.add_function(wrap_pyfunction!(integrate, m)?)?;
    m.add_function(wrap_pyfunction!(global_coherence, m)?)?;
    m.add_function(wrap_pyfunction!(random_initial_state, m)?)?;
    Ok(())
}
