//! End-to-end experiment pipeline

use crate::{Analysis, Backend, BackendError, ExperimentConfig, OutcomeDistribution, Result};
use harmoniq_core::{Circuit, VibrationCircuitBuilder};
use std::fmt;

/// Everything one experiment produced
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentResult {
    /// The circuit that was executed
    pub circuit: Circuit,

    /// Raw measurement counts
    pub distribution: OutcomeDistribution,

    /// Headline statistics of the distribution
    pub analysis: Analysis,
}

impl fmt::Display for ExperimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Executed {} operations on {} qubits",
            self.circuit.len(),
            self.circuit.num_qubits()
        )?;
        write!(f, "{}", self.analysis)
    }
}

/// Build the configured circuit, run it and analyze the outcomes
///
/// The pipeline validates the configuration, checks backend availability,
/// builds the five-stage circuit, executes it for the configured shot count
/// and verifies the backend honored it, then summarizes the counts.
///
/// # Errors
/// - [`BackendError::InvalidShots`] / [`BackendError::CircuitConstruction`]
///   for a bad configuration
/// - [`BackendError::BackendUnavailable`] if the backend reports itself
///   unavailable
/// - [`BackendError::ShotCountMismatch`] if the backend returned a
///   different number of measurements than requested
/// - any error the backend itself raised
///
/// # Example
/// ```
/// use harmoniq_backend::{run_experiment, ExperimentConfig, FixedOutcomeBackend};
///
/// let backend = FixedOutcomeBackend::new("00000000").unwrap();
/// let result = run_experiment(&backend, &ExperimentConfig::default()).unwrap();
/// assert_eq!(result.analysis.total_measurements, 1000);
/// assert_eq!(result.analysis.most_common_state, "00000000");
/// ```
pub fn run_experiment(
    backend: &dyn Backend,
    config: &ExperimentConfig,
) -> Result<ExperimentResult> {
    config.validate()?;

    if !backend.is_available() {
        return Err(BackendError::BackendUnavailable(backend.name().to_string()));
    }

    let circuit = VibrationCircuitBuilder::new(config.num_sites, config.num_dimensions)?.build()?;

    let distribution = backend.run(&circuit, config.shots)?;
    if distribution.shots() != config.shots {
        return Err(BackendError::ShotCountMismatch {
            expected: config.shots,
            actual: distribution.shots(),
        });
    }

    let analysis = distribution.analyze()?;

    Ok(ExperimentResult {
        circuit,
        distribution,
        analysis,
    })
}
