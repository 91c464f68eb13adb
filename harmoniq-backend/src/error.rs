//! Error types for backend execution and result analysis

use thiserror::Error;

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;

/// Errors that can occur while running and analyzing an experiment
#[derive(Error, Debug)]
pub enum BackendError {
    /// Backend refused the run because it is not available
    #[error("Backend not available: {0}")]
    BackendUnavailable(String),

    /// Backend accepted the run but failed during execution
    #[error("Simulation failed: {0}")]
    SimulationFailed(String),

    /// Shot count must be positive
    #[error("Invalid shot count {0}: at least one shot is required")]
    InvalidShots(usize),

    /// Backend returned a different number of measurements than requested
    #[error("Backend returned {actual} measurements for {expected} requested shots")]
    ShotCountMismatch { expected: usize, actual: usize },

    /// Analysis requested on a distribution with no measurements
    #[error("Cannot analyze an empty outcome distribution")]
    EmptyDistribution,

    /// Outcome bitstring width does not match the measured register
    #[error("Outcome '{outcome}' is {actual} bits wide, circuit measures {expected} qubits")]
    OutcomeWidthMismatch {
        outcome: String,
        expected: usize,
        actual: usize,
    },

    /// Backend or experiment configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Building the circuit for the experiment failed
    #[error("Circuit construction failed: {0}")]
    CircuitConstruction(String),
}

impl From<harmoniq_core::CircuitError> for BackendError {
    fn from(err: harmoniq_core::CircuitError) -> Self {
        BackendError::CircuitConstruction(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BackendError::BackendUnavailable("aer".to_string());
        assert_eq!(format!("{}", err), "Backend not available: aer");

        let err = BackendError::ShotCountMismatch {
            expected: 1000,
            actual: 999,
        };
        assert!(format!("{}", err).contains("999"));

        let err = BackendError::InvalidShots(0);
        assert!(format!("{}", err).contains("at least one shot"));
    }

    #[test]
    fn test_core_error_conversion() {
        let core_err = harmoniq_core::CircuitError::NoSites;
        let err: BackendError = core_err.into();
        assert!(matches!(err, BackendError::CircuitConstruction(_)));
        assert!(format!("{}", err).contains("at least one site"));
    }
}
