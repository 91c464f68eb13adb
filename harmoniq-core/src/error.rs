//! Error types for circuit construction

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur while building string-vibration circuits
#[derive(Debug, Error)]
pub enum CircuitError {
    /// Qubit index outside the circuit register
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Gate applied to the wrong number of qubits
    #[error("Gate '{gate}' acts on {expected} qubit(s), but {actual} were provided")]
    WrongQubitCount {
        gate: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Same qubit used twice in one operation
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Parameterized gate constructed without its angle
    #[error("Gate '{0}' requires a rotation angle")]
    MissingParameter(&'static str),

    /// Angle supplied to a gate that takes none
    #[error("Gate '{0}' does not take a parameter")]
    UnexpectedParameter(&'static str),

    /// Site index outside the string
    #[error("Invalid site {site}: string has {num_sites} sites per dimension")]
    InvalidSite { site: usize, num_sites: usize },

    /// Dimension index outside the lattice
    #[error("Invalid dimension {dimension}: lattice has {num_dimensions} dimensions")]
    InvalidDimension {
        dimension: usize,
        num_dimensions: usize,
    },

    /// Lattice requested with no sites
    #[error("String lattice requires at least one site per dimension")]
    NoSites,

    /// Lattice requested with no dimensions
    #[error("String lattice requires at least one dimension")]
    NoDimensions,
}

impl CircuitError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// Create a wrong qubit count error
    pub fn wrong_qubit_count(gate: &'static str, expected: usize, actual: usize) -> Self {
        Self::WrongQubitCount {
            gate,
            expected,
            actual,
        }
    }
}
