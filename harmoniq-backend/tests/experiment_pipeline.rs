//! Integration tests for the full experiment pipeline

use harmoniq_backend::{
    run_experiment, Analysis, Backend, BackendError, ExperimentConfig, FixedOutcomeBackend,
    OutcomeDistribution, Result, SamplingBackend,
};
use harmoniq_core::{Circuit, GateKind};
use std::collections::HashMap;

/// Backend that quietly drops one shot, to exercise the runner's check
struct ShortingBackend;

impl Backend for ShortingBackend {
    fn name(&self) -> &str {
        "shorting"
    }

    fn run(&self, circuit: &Circuit, shots: usize) -> Result<OutcomeDistribution> {
        let mut counts = HashMap::new();
        counts.insert("0".repeat(circuit.num_qubits()), shots - 1);
        OutcomeDistribution::new(counts, shots - 1)
    }
}

/// Backend that always fails mid-run
struct BrokenBackend;

impl Backend for BrokenBackend {
    fn name(&self) -> &str {
        "broken"
    }

    fn run(&self, _circuit: &Circuit, _shots: usize) -> Result<OutcomeDistribution> {
        Err(BackendError::SimulationFailed(
            "state vector exploded".to_string(),
        ))
    }
}

#[test]
fn test_reference_experiment_end_to_end() {
    let backend = SamplingBackend::new(&[("00000000", 0.7), ("11111111", 0.3)])
        .unwrap()
        .with_seed(2024);
    let result = run_experiment(&backend, &ExperimentConfig::default()).unwrap();

    // the default experiment is 4 sites in 2 dimensions, 1000 shots
    assert_eq!(result.circuit.num_qubits(), 8);
    assert_eq!(result.circuit.len(), 34);
    assert_eq!(result.circuit.count_of(GateKind::Measure), 8);

    assert_eq!(result.analysis.total_measurements, 1000);
    assert_eq!(result.analysis.unique_states, 2);
    assert_eq!(result.analysis.most_common_state, "00000000");
    assert!(
        result.analysis.highest_probability > 0.6 && result.analysis.highest_probability < 0.8,
        "probability {} drifted from 0.7 weighting",
        result.analysis.highest_probability
    );

    let total = result.distribution.probability("00000000")
        + result.distribution.probability("11111111");
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_single_outcome_experiment() {
    let backend = FixedOutcomeBackend::new("00000000").unwrap();
    let result = run_experiment(&backend, &ExperimentConfig::default()).unwrap();

    assert_eq!(result.analysis.total_measurements, 1000);
    assert_eq!(result.analysis.unique_states, 1);
    assert_eq!(result.analysis.most_common_state, "00000000");
    assert_eq!(result.analysis.highest_probability, 1.0);
}

#[test]
fn test_custom_lattice_flows_through() {
    // 3 sites in 1 dimension: 3 qubits, no interference stage
    let config = ExperimentConfig::new()
        .with_sites(3)
        .with_dimensions(1)
        .with_shots(200);
    let backend = FixedOutcomeBackend::new("101").unwrap();
    let result = run_experiment(&backend, &config).unwrap();

    assert_eq!(result.circuit.num_qubits(), 3);
    assert_eq!(result.circuit.count_of(GateKind::CZ), 0);
    assert_eq!(result.distribution.shots(), 200);
    assert_eq!(result.analysis.most_common_state, "101");
}

#[test]
fn test_seeded_runs_are_identical() {
    let config = ExperimentConfig::default().with_shots(400);
    let run = || {
        let backend = SamplingBackend::new(&[("00000000", 1.0), ("10000001", 1.0)])
            .unwrap()
            .with_seed(99);
        run_experiment(&backend, &config).unwrap()
    };
    let first = run();
    let second = run();
    assert_eq!(first.distribution, second.distribution);
    assert_eq!(first.analysis, second.analysis);
}

#[test]
fn test_shot_count_mismatch_detected() {
    let result = run_experiment(&ShortingBackend, &ExperimentConfig::default());
    assert!(matches!(
        result,
        Err(BackendError::ShotCountMismatch {
            expected: 1000,
            actual: 999,
        })
    ));
}

#[test]
fn test_backend_failure_propagates() {
    let result = run_experiment(&BrokenBackend, &ExperimentConfig::default());
    assert!(matches!(result, Err(BackendError::SimulationFailed(_))));
}

#[test]
fn test_outcome_width_must_match_register() {
    // 3-bit outcomes against the default 8-qubit circuit
    let backend = FixedOutcomeBackend::new("000").unwrap();
    let result = run_experiment(&backend, &ExperimentConfig::default());
    assert!(matches!(
        result,
        Err(BackendError::OutcomeWidthMismatch {
            expected: 8,
            actual: 3,
            ..
        })
    ));
}

#[test]
fn test_empty_lattice_rejected_up_front() {
    let backend = FixedOutcomeBackend::new("0").unwrap();
    let config = ExperimentConfig::new().with_sites(0);
    assert!(matches!(
        run_experiment(&backend, &config),
        Err(BackendError::CircuitConstruction(_))
    ));
}

#[test]
fn test_analysis_serializes_round_trip() {
    let mut counts = HashMap::new();
    counts.insert("01".to_string(), 600);
    counts.insert("10".to_string(), 400);

    let analysis = Analysis::from_counts(&counts).unwrap();
    let json = serde_json::to_string(&analysis).unwrap();
    let back: Analysis = serde_json::from_str(&json).unwrap();
    assert_eq!(analysis, back);

    let distribution = OutcomeDistribution::new(counts, 1000).unwrap();
    let json = serde_json::to_string(&distribution).unwrap();
    let back: OutcomeDistribution = serde_json::from_str(&json).unwrap();
    assert_eq!(distribution, back);
}
