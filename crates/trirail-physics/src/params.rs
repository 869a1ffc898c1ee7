// ─────────────────────────────────────────────────────────────────────
// Tri-Rail Dynamics — Canonical Rail Parameters
// ─────────────────────────────────────────────────────────────────────
//! Canonical per-rail growth rates, natural frequencies, and the
//! directed coupling matrix for the three-rail system.

pub const N_RAILS: usize = 3;

/// Rail display names, aligned by index with the parameter tables.
pub const RAIL_NAMES: [&str; N_RAILS] = ["Light", "Our", "Dark"];

/// Linear growth (> 0) or damping (< 0) rate per rail.
///
/// Only the Our rail is self-sustaining; Light and Dark are damped and
/// oscillate only as driven by the coupling.
pub const LAMBDA_N: [f64; N_RAILS] = [-0.10, 0.05, -0.20];

/// Natural angular frequencies (rad/s) per rail.
pub const OMEGA_N: [f64; N_RAILS] = [1.00, 1.10, 0.90];

/// Build the canonical 3×3 directed coupling matrix.
///
/// Rows are targets, columns are sources: `C[i][j]` feeds rail j's state
/// into rail i's derivative. Deliberately asymmetric (the Our rail drives
/// the Dark rail far harder than it is driven back), zero diagonal.
pub fn build_coupling_matrix() -> [[f64; N_RAILS]; N_RAILS] {
    [
        [0.00, 0.20, 0.01],
        [0.05, 0.00, 0.05],
        [0.01, 0.30, 0.00],
    ]
}

/// Canonical coupling matrix flattened row-major.
pub fn coupling_matrix_flat() -> Vec<f64> {
    build_coupling_matrix()
        .iter()
        .flat_map(|row| row.iter().copied())
        .collect()
}

/// Canonical lambda table as a Vec (convenience for runtime-N callers).
pub fn load_lambda_n() -> Vec<f64> {
    LAMBDA_N.to_vec()
}

/// Canonical omega table as a Vec (convenience for runtime-N callers).
pub fn load_omega_n() -> Vec<f64> {
    OMEGA_N.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lengths() {
        assert_eq!(LAMBDA_N.len(), N_RAILS);
        assert_eq!(OMEGA_N.len(), N_RAILS);
        assert_eq!(RAIL_NAMES.len(), N_RAILS);
    }

    #[test]
    fn test_omega_n_positive() {
        assert!(OMEGA_N.iter().all(|&w| w > 0.0));
    }

    #[test]
    fn test_only_our_rail_self_sustaining() {
        assert!(LAMBDA_N[1] > 0.0, "Our rail should have positive growth");
        assert!(LAMBDA_N[0] < 0.0 && LAMBDA_N[2] < 0.0);
    }

    #[test]
    fn test_coupling_zero_diagonal() {
        let c = build_coupling_matrix();
        for i in 0..N_RAILS {
            assert_eq!(c[i][i], 0.0, "C[{i},{i}] should be 0");
        }
    }

    #[test]
    fn test_coupling_asymmetric() {
        // The matrix is directed: Our → Dark is 0.30 but Dark → Our is 0.05.
        let c = build_coupling_matrix();
        assert!((c[2][1] - 0.30).abs() < 1e-12);
        assert!((c[1][2] - 0.05).abs() < 1e-12);
        assert!(c[2][1] != c[1][2]);
    }

    #[test]
    fn test_coupling_non_negative() {
        let c = build_coupling_matrix();
        for i in 0..N_RAILS {
            for j in 0..N_RAILS {
                assert!(c[i][j] >= 0.0, "C[{i},{j}] = {} < 0", c[i][j]);
            }
        }
    }

    #[test]
    fn test_flat_layout_row_major() {
        let flat = coupling_matrix_flat();
        let c = build_coupling_matrix();
        assert_eq!(flat.len(), N_RAILS * N_RAILS);
        assert_eq!(flat[2], c[0][2]);
        assert_eq!(flat[N_RAILS + 1], c[1][1]);
    }
}
