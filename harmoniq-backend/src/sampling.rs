//! Deterministic stand-in backends
//!
//! These backends draw outcomes from declared distributions instead of
//! simulating the circuit, which makes the full experiment pipeline
//! testable without a statevector engine. A real simulator plugs in behind
//! the same [`Backend`] trait.

use crate::{Backend, BackendError, OutcomeDistribution, Result};
use harmoniq_core::Circuit;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

fn check_bitstring(outcome: &str) -> Result<()> {
    if outcome.is_empty() {
        return Err(BackendError::InvalidConfiguration(
            "outcome bitstring must not be empty".to_string(),
        ));
    }
    if let Some(bad) = outcome.chars().find(|c| *c != '0' && *c != '1') {
        return Err(BackendError::InvalidConfiguration(format!(
            "outcome '{}' contains non-binary character '{}'",
            outcome, bad
        )));
    }
    Ok(())
}

/// Backend that samples shots from a fixed weighted outcome table
///
/// # Example
/// ```
/// use harmoniq_backend::{Backend, SamplingBackend};
/// use harmoniq_core::VibrationCircuitBuilder;
///
/// let circuit = VibrationCircuitBuilder::new(1, 2).unwrap().build().unwrap();
/// let backend = SamplingBackend::new(&[("00", 0.5), ("11", 0.5)])
///     .unwrap()
///     .with_seed(7);
///
/// let distribution = backend.run(&circuit, 100).unwrap();
/// assert_eq!(distribution.shots(), 100);
/// ```
pub struct SamplingBackend {
    name: String,
    outcomes: Vec<(String, f64)>,
    seed: Option<u64>,
}

impl SamplingBackend {
    /// Create a backend drawing from `weights`
    ///
    /// Weights need not be normalized; they are used as relative odds.
    ///
    /// # Errors
    /// [`BackendError::InvalidConfiguration`] if the table is empty, a
    /// weight is not finite and positive, an outcome is not a bitstring, the
    /// outcomes differ in width, or an outcome repeats.
    pub fn new(weights: &[(&str, f64)]) -> Result<Self> {
        if weights.is_empty() {
            return Err(BackendError::InvalidConfiguration(
                "sampling backend needs at least one outcome".to_string(),
            ));
        }

        let width = weights[0].0.len();
        let mut outcomes = Vec::with_capacity(weights.len());
        for (outcome, weight) in weights {
            check_bitstring(outcome)?;
            if outcome.len() != width {
                return Err(BackendError::InvalidConfiguration(format!(
                    "outcome '{}' is {} bits wide, others are {}",
                    outcome,
                    outcome.len(),
                    width
                )));
            }
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(BackendError::InvalidConfiguration(format!(
                    "weight {} for outcome '{}' must be finite and positive",
                    weight, outcome
                )));
            }
            if outcomes.iter().any(|(seen, _)| seen == outcome) {
                return Err(BackendError::InvalidConfiguration(format!(
                    "outcome '{}' listed twice",
                    outcome
                )));
            }
            outcomes.push(((*outcome).to_string(), *weight));
        }

        Ok(Self {
            name: "sampling".to_string(),
            outcomes,
            seed: None,
        })
    }

    /// Fix the random seed for reproducible sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the backend name
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// Width in bits of every outcome in the table
    pub fn width(&self) -> usize {
        self.outcomes[0].0.len()
    }

    fn pick(&self, draw: f64) -> &str {
        let mut remaining = draw;
        for (outcome, weight) in &self.outcomes {
            if remaining < *weight {
                return outcome;
            }
            remaining -= *weight;
        }
        // float round-off can step past the last band
        &self.outcomes[self.outcomes.len() - 1].0
    }
}

impl Backend for SamplingBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, circuit: &Circuit, shots: usize) -> Result<OutcomeDistribution> {
        if shots == 0 {
            return Err(BackendError::InvalidShots(0));
        }
        if self.width() != circuit.num_qubits() {
            return Err(BackendError::OutcomeWidthMismatch {
                outcome: self.outcomes[0].0.clone(),
                expected: circuit.num_qubits(),
                actual: self.width(),
            });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let total: f64 = self.outcomes.iter().map(|(_, weight)| weight).sum();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..shots {
            let draw = rng.gen::<f64>() * total;
            *counts.entry(self.pick(draw).to_string()).or_insert(0) += 1;
        }

        OutcomeDistribution::new(counts, shots)
    }
}

/// Backend that reports the same outcome for every shot
///
/// Useful where a test needs a fully predictable distribution, and for
/// exercising the unavailable-backend path.
pub struct FixedOutcomeBackend {
    name: String,
    outcome: String,
    available: bool,
}

impl FixedOutcomeBackend {
    /// Create a backend that always measures `outcome`
    ///
    /// # Errors
    /// [`BackendError::InvalidConfiguration`] if `outcome` is empty or not
    /// a bitstring.
    pub fn new(outcome: &str) -> Result<Self> {
        check_bitstring(outcome)?;
        Ok(Self {
            name: "fixed".to_string(),
            outcome: outcome.to_string(),
            available: true,
        })
    }

    /// Set the backend name
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// Mark the backend available or not
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}

impl Backend for FixedOutcomeBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn run(&self, circuit: &Circuit, shots: usize) -> Result<OutcomeDistribution> {
        if !self.available {
            return Err(BackendError::BackendUnavailable(self.name.clone()));
        }
        if shots == 0 {
            return Err(BackendError::InvalidShots(0));
        }
        if self.outcome.len() != circuit.num_qubits() {
            return Err(BackendError::OutcomeWidthMismatch {
                outcome: self.outcome.clone(),
                expected: circuit.num_qubits(),
                actual: self.outcome.len(),
            });
        }

        let mut counts = HashMap::new();
        counts.insert(self.outcome.clone(), shots);
        OutcomeDistribution::new(counts, shots)
    }
}
