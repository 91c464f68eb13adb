//! Example running the reference string-vibration experiment
//!
//! Builds the default 4-site, 2-dimension circuit, executes it on the
//! weighted sampling stand-in backend and prints the outcome analysis.
//!
//! Run with: cargo run --example string_vibration

use harmoniq_backend::{run_experiment, ExperimentConfig, SamplingBackend};
use harmoniq_core::GateKind;

fn main() {
    run_reference_experiment();
    run_one_dimensional_string();
}

fn run_reference_experiment() {
    println!("=== String Vibration: 4 sites x 2 dimensions ===\n");

    let config = ExperimentConfig::default();
    println!(
        "Lattice: {} sites, {} dimensions, {} shots",
        config.num_sites, config.num_dimensions, config.shots
    );

    // Weighted toward low-excitation patterns, the way a cold string leans
    let backend = SamplingBackend::new(&[
        ("00000000", 0.30),
        ("00010001", 0.20),
        ("10001000", 0.20),
        ("00100100", 0.15),
        ("11111111", 0.15),
    ])
    .unwrap()
    .with_seed(1234);

    let result = run_experiment(&backend, &config).unwrap();

    println!("\n{}", result.circuit);
    println!("Top outcomes:");
    for (outcome, count) in result.distribution.sorted().into_iter().take(5) {
        println!("  {}  x{}", outcome, count);
    }
    println!("\n{}\n", result.analysis);
}

fn run_one_dimensional_string() {
    println!("=== String Vibration: 3 sites x 1 dimension ===\n");

    let config = ExperimentConfig::new()
        .with_sites(3)
        .with_dimensions(1)
        .with_shots(500);
    let backend = SamplingBackend::new(&[("000", 0.5), ("010", 0.3), ("111", 0.2)])
        .unwrap()
        .with_seed(1234);

    let result = run_experiment(&backend, &config).unwrap();

    // one dimension means no cross-dimension interference stage
    println!(
        "Gates: {} H, {} CNOT, {} RZ, {} CZ, {} MEASURE",
        result.circuit.count_of(GateKind::Hadamard),
        result.circuit.count_of(GateKind::CNot),
        result.circuit.count_of(GateKind::RotationZ),
        result.circuit.count_of(GateKind::CZ),
        result.circuit.count_of(GateKind::Measure),
    );
    println!("\n{}", result.analysis);
}
