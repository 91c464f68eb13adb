//! Execution boundary for Harmoniq string-vibration circuits
//!
//! This crate runs the circuits built by `harmoniq-core` and summarizes
//! what came back:
//! - [`Backend`]: the trait any execution target implements
//! - [`OutcomeDistribution`] / [`Analysis`]: measurement counts and their
//!   headline statistics
//! - [`run_experiment`]: the configuration-to-analysis pipeline
//! - [`SamplingBackend`] / [`FixedOutcomeBackend`]: deterministic stand-ins
//!   for a real simulator
//!
//! # Example
//! ```
//! use harmoniq_backend::{run_experiment, ExperimentConfig, FixedOutcomeBackend};
//!
//! let backend = FixedOutcomeBackend::new("00000000")?;
//! let result = run_experiment(&backend, &ExperimentConfig::default())?;
//! println!("{}", result.analysis);
//! # Ok::<(), harmoniq_backend::BackendError>(())
//! ```

pub mod analysis;
pub mod backend;
pub mod config;
pub mod error;
pub mod experiment;
pub mod result;
pub mod sampling;

pub use analysis::Analysis;
pub use backend::Backend;
pub use config::ExperimentConfig;
pub use error::{BackendError, Result};
pub use experiment::{run_experiment, ExperimentResult};
pub use result::OutcomeDistribution;
pub use sampling::{FixedOutcomeBackend, SamplingBackend};
