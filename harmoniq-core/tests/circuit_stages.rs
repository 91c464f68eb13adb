//! Integration tests for the staged circuit construction

use harmoniq_core::{
    Circuit, GateKind, Operation, QubitId, StringLattice, VibrationCircuitBuilder,
    ENERGY_LEVEL_PHASE,
};

fn q(index: usize) -> QubitId {
    QubitId::new(index)
}

/// The 4-site, 2-dimension circuit, operation by operation
#[test]
fn test_default_lattice_exact_sequence() {
    let circuit = VibrationCircuitBuilder::new(4, 2).unwrap().build().unwrap();

    let mut expected: Vec<Operation> = Vec::new();
    // superposition over the whole register
    for i in 0..8 {
        expected.push(Operation::hadamard(q(i)));
    }
    // nearest-neighbor coupling, dimension 0 then dimension 1
    for (c, t) in [(0, 1), (1, 2), (2, 3), (4, 5), (5, 6), (6, 7)] {
        expected.push(Operation::cnot(q(c), q(t)).unwrap());
    }
    // energy phase on every qubit
    for i in 0..8 {
        expected.push(Operation::rotation_z(q(i), ENERGY_LEVEL_PHASE));
    }
    // cross-dimension interference, one CZ per site
    for site in 0..4 {
        expected.push(Operation::cz(q(site), q(site + 4)).unwrap());
    }
    // readout
    for i in 0..8 {
        expected.push(Operation::measure(q(i)));
    }

    assert_eq!(circuit.len(), expected.len());
    for (i, (got, want)) in circuit.operations().iter().zip(&expected).enumerate() {
        assert_eq!(got, want, "operation {} differs", i);
    }
}

#[test]
fn test_three_dimensional_lattice_shape() {
    let builder = VibrationCircuitBuilder::new(3, 3).unwrap();
    let circuit = builder.build().unwrap();

    assert_eq!(circuit.num_qubits(), 9);
    assert_eq!(circuit.count_of(GateKind::Hadamard), 9);
    assert_eq!(circuit.count_of(GateKind::CNot), 6);
    assert_eq!(circuit.count_of(GateKind::RotationZ), 9);
    // 3 dimension pairs at each of 3 sites
    assert_eq!(circuit.count_of(GateKind::CZ), 9);
    assert_eq!(circuit.count_of(GateKind::Measure), 9);
    assert_eq!(circuit.len(), builder.num_operations());
}

#[test]
fn test_coupling_respects_dimension_blocks() {
    // 5 sites in 3 dimensions: dimension d occupies indices 5d..5d+5
    let lattice = StringLattice::new(5, 3).unwrap();
    let circuit = VibrationCircuitBuilder::from_lattice(lattice).build().unwrap();

    for op in circuit
        .operations()
        .iter()
        .filter(|op| op.kind() == GateKind::CNot)
    {
        let control = op.qubits()[0];
        let target = op.qubits()[1];
        assert_eq!(target.index(), control.index() + 1);

        let (control_dim, control_site) = lattice.coordinates(control).unwrap();
        let (target_dim, target_site) = lattice.coordinates(target).unwrap();
        assert_eq!(control_dim, target_dim, "coupling must stay in-dimension");
        assert_eq!(target_site, control_site + 1);
    }
}

#[test]
fn test_interference_pairs_same_site_across_dimensions() {
    let lattice = StringLattice::new(4, 3).unwrap();
    let circuit = VibrationCircuitBuilder::from_lattice(lattice).build().unwrap();

    let mut last_site = 0;
    for op in circuit
        .operations()
        .iter()
        .filter(|op| op.kind() == GateKind::CZ)
    {
        let (lower_dim, site_a) = lattice.coordinates(op.qubits()[0]).unwrap();
        let (upper_dim, site_b) = lattice.coordinates(op.qubits()[1]).unwrap();
        assert_eq!(site_a, site_b, "interference must stay on one site");
        assert!(lower_dim < upper_dim, "lower dimension is the control");
        assert!(site_a >= last_site, "sites form the outer loop");
        last_site = site_a;
    }
}

#[test]
fn test_every_qubit_measured_exactly_once() {
    for (ns, nd) in [(1, 1), (4, 2), (2, 5)] {
        let circuit = VibrationCircuitBuilder::new(ns, nd).unwrap().build().unwrap();
        let mut seen = vec![0usize; circuit.num_qubits()];
        for op in circuit
            .operations()
            .iter()
            .filter(|op| op.kind() == GateKind::Measure)
        {
            seen[op.qubits()[0].index()] += 1;
        }
        assert!(seen.iter().all(|&n| n == 1), "lattice {}x{}: {:?}", ns, nd, seen);
    }
}

#[test]
fn test_measurements_come_last() {
    let circuit: Circuit = VibrationCircuitBuilder::new(3, 2).unwrap().build().unwrap();
    let first_measure = circuit
        .operations()
        .iter()
        .position(|op| op.kind() == GateKind::Measure)
        .unwrap();
    assert!(circuit.operations()[first_measure..]
        .iter()
        .all(|op| op.kind() == GateKind::Measure));
    assert_eq!(circuit.len() - first_measure, circuit.num_qubits());
}
