// ─────────────────────────────────────────────────────────────────────
// Tri-Rail Dynamics — Kernel Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all Tri-Rail kernel failures.
#[derive(Error, Debug)]
pub enum TriRailError {
    /// Mismatch among N-sized inputs (state, rates, coupling matrix,
    /// weight vector). Raised before any computation starts.
    #[error("dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid scalar input (non-positive dt, negative t_max,
    /// non-finite parameter entries).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

pub type TriRailResult<T> = Result<T, TriRailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let e = TriRailError::DimensionMismatch {
            context: "weight vector",
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            e.to_string(),
            "dimension mismatch in weight vector: expected 3, got 2"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let e = TriRailError::InvalidParameter("dt must be > 0, got 0".to_string());
        assert!(e.to_string().starts_with("invalid parameter:"));
    }
}
