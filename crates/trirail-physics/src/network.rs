// ─────────────────────────────────────────────────────────────────────
// Tri-Rail Dynamics — Stuart–Landau Network
// ─────────────────────────────────────────────────────────────────────
//! Right-hand side of the coupled Stuart–Landau network:
//!
//!   dz_n/dt = (λ_n + iω_n − |z_n|²)·z_n + Σ_m C_nm z_m
//!
//! The first term is the autonomous nonlinearity (linear growth or
//! damping λ_n, rotation at ω_n, cubic saturation); the second is linear
//! diffusive coupling from every source node m into target node n.

use num_complex::Complex64;

use trirail_types::{TriRailError, TriRailResult};

use crate::params::{coupling_matrix_flat, load_lambda_n, load_omega_n, N_RAILS};

/// Immutable per-run parameter set for a Stuart–Landau network.
///
/// Holds the per-node growth rates λ_n, natural frequencies ω_n, and the
/// n×n directed coupling matrix (row-major, rows = target). Dimension
/// checks happen once at construction; the hot-path derivative
/// evaluation assumes consistent lengths.
#[derive(Debug, Clone)]
pub struct SLNetwork {
    n: usize,
    lambda: Vec<f64>,
    omega: Vec<f64>,
    coupling: Vec<f64>,
}

impl SLNetwork {
    /// Build a network from per-node rates and a row-major coupling matrix.
    pub fn new(lambda: Vec<f64>, omega: Vec<f64>, coupling: Vec<f64>) -> TriRailResult<Self> {
        let n = lambda.len();
        if n == 0 {
            return Err(TriRailError::InvalidParameter(
                "network must have at least one node".to_string(),
            ));
        }
        if omega.len() != n {
            return Err(TriRailError::DimensionMismatch {
                context: "omega",
                expected: n,
                actual: omega.len(),
            });
        }
        if coupling.len() != n * n {
            return Err(TriRailError::DimensionMismatch {
                context: "coupling matrix",
                expected: n * n,
                actual: coupling.len(),
            });
        }
        for (name, values) in [
            ("lambda", &lambda),
            ("omega", &omega),
            ("coupling", &coupling),
        ] {
            if values.iter().any(|v| !v.is_finite()) {
                return Err(TriRailError::InvalidParameter(format!(
                    "{name} contains non-finite entries"
                )));
            }
        }
        Ok(Self {
            n,
            lambda,
            omega,
            coupling,
        })
    }

    /// Canonical three-rail network from the parameter tables.
    pub fn canonical() -> Self {
        Self {
            n: N_RAILS,
            lambda: load_lambda_n(),
            omega: load_omega_n(),
            coupling: coupling_matrix_flat(),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn lambda(&self) -> &[f64] {
        &self.lambda
    }

    pub fn omega(&self) -> &[f64] {
        &self.omega
    }

    /// Row-major n×n coupling matrix.
    pub fn coupling(&self) -> &[f64] {
        &self.coupling
    }

    /// Evaluate dz/dt into a caller-owned buffer. Pure; no allocation.
    ///
    /// Both slices must have length `n`.
    pub fn derivative_into(&self, z: &[Complex64], dz: &mut [Complex64]) {
        let n = self.n;
        debug_assert_eq!(z.len(), n);
        debug_assert_eq!(dz.len(), n);
        for i in 0..n {
            let zi = z[i];
            let autonomous = Complex64::new(self.lambda[i] - zi.norm_sqr(), self.omega[i]) * zi;
            let mut coupling = Complex64::new(0.0, 0.0);
            for (j, &c) in self.coupling[i * n..(i + 1) * n].iter().enumerate() {
                coupling += z[j] * c;
            }
            dz[i] = autonomous + coupling;
        }
    }

    /// Checked, allocating evaluation of the network right-hand side.
    pub fn derivative(&self, z: &[Complex64]) -> TriRailResult<Vec<Complex64>> {
        if z.len() != self.n {
            return Err(TriRailError::DimensionMismatch {
                context: "state vector",
                expected: self.n,
                actual: z.len(),
            });
        }
        let mut dz = vec![Complex64::new(0.0, 0.0); self.n];
        self.derivative_into(z, &mut dz);
        Ok(dz)
    }
}

/// Evaluate the network right-hand side in one call.
///
/// Convenience wrapper over [`SLNetwork::new`]; `coupling` is row-major
/// n×n. Callers evaluating repeatedly should build the network once.
pub fn evaluate_dynamics(
    z: &[Complex64],
    lambda: Vec<f64>,
    omega: Vec<f64>,
    coupling: Vec<f64>,
) -> TriRailResult<Vec<Complex64>> {
    SLNetwork::new(lambda, omega, coupling)?.derivative(z)
}
