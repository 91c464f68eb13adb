//! Core types for the Harmoniq string-vibration circuit model
//!
//! This crate builds the quantum circuit that models a discretized
//! vibrating string, one qubit per (dimension, site) point:
//! - [`StringLattice`]: maps (dimension, site) coordinates to qubit indices
//! - [`VibrationCircuitBuilder`]: the five-stage circuit construction
//! - [`Circuit`] / [`Operation`]: the resulting gate sequence
//!
//! # Example
//! ```
//! use harmoniq_core::VibrationCircuitBuilder;
//!
//! let circuit = VibrationCircuitBuilder::new(4, 2)?.build()?;
//! assert_eq!(circuit.num_qubits(), 8);
//! # Ok::<(), harmoniq_core::CircuitError>(())
//! ```

pub mod builder;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod lattice;
pub mod qubit;

// Re-exports for convenience
pub use builder::{VibrationCircuitBuilder, ENERGY_LEVEL_PHASE};
pub use circuit::Circuit;
pub use error::CircuitError;
pub use gate::{GateKind, Operation};
pub use lattice::StringLattice;
pub use qubit::QubitId;

/// Type alias for results in Harmoniq core
pub type Result<T> = std::result::Result<T, CircuitError>;
