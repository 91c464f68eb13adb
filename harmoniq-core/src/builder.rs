//! Five-stage construction of the string-vibration circuit
//!
//! The circuit models a discretized vibrating string. Each point of the
//! string, in each spatial dimension it can move in, is one qubit whose
//! excitation stands for local displacement. Construction always applies
//! the same five stages in the same order:
//!
//! 1. superposition: H on every qubit, so every vibration pattern starts
//!    equally likely
//! 2. coupling: CNOT between neighboring sites within each dimension,
//!    correlating each point with the next along the string
//! 3. energy phase: RZ by [`ENERGY_LEVEL_PHASE`] on every qubit
//! 4. interference: CZ between dimensions at the same site, so movement in
//!    one dimension can reinforce or cancel movement in another
//! 5. measurement: every qubit read out into its like-indexed classical slot
//!
//! The procedure is deterministic: the same lattice always yields the same
//! operation sequence.

use crate::{Circuit, Operation, Result, StringLattice};
use std::f64::consts::FRAC_PI_4;

/// Rotation angle of the energy-phase stage, in radians
///
/// Every qubit receives an RZ by this fixed angle (pi/4), a coarse stand-in
/// for the phase accumulated by occupying an energy level.
pub const ENERGY_LEVEL_PHASE: f64 = FRAC_PI_4;

/// Builds the string-vibration circuit for a given lattice
///
/// # Example
/// ```
/// use harmoniq_core::VibrationCircuitBuilder;
///
/// let builder = VibrationCircuitBuilder::new(4, 2).unwrap();
/// let circuit = builder.build().unwrap();
/// assert_eq!(circuit.num_qubits(), 8);
/// assert_eq!(circuit.len(), 34);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct VibrationCircuitBuilder {
    lattice: StringLattice,
}

impl VibrationCircuitBuilder {
    /// Create a builder for a string of `num_sites` points vibrating in
    /// `num_dimensions` dimensions
    ///
    /// # Errors
    /// [`CircuitError::NoSites`](crate::CircuitError::NoSites) /
    /// [`CircuitError::NoDimensions`](crate::CircuitError::NoDimensions) if
    /// either count is zero.
    pub fn new(num_sites: usize, num_dimensions: usize) -> Result<Self> {
        Ok(Self {
            lattice: StringLattice::new(num_sites, num_dimensions)?,
        })
    }

    /// Create a builder over an existing lattice
    pub const fn from_lattice(lattice: StringLattice) -> Self {
        Self { lattice }
    }

    /// The lattice the circuit is built over
    #[inline]
    pub const fn lattice(&self) -> StringLattice {
        self.lattice
    }

    /// Exact number of operations [`build`](Self::build) will emit
    ///
    /// Superposition, phase and measurement each touch every qubit; coupling
    /// adds one CNOT per neighboring site pair per dimension; interference
    /// adds one CZ per dimension pair per site.
    pub const fn num_operations(&self) -> usize {
        let q = self.lattice.num_qubits();
        let ns = self.lattice.num_sites();
        let nd = self.lattice.num_dimensions();
        3 * q + nd * (ns - 1) + ns * (nd * (nd - 1) / 2)
    }

    /// Build the circuit, applying the five stages in order
    ///
    /// Building is read-only on the builder; repeated calls yield equal
    /// circuits.
    pub fn build(&self) -> Result<Circuit> {
        let mut circuit = Circuit::with_capacity(self.lattice.num_qubits(), self.num_operations());
        self.apply_superposition(&mut circuit)?;
        self.apply_coupling(&mut circuit)?;
        self.apply_energy_phase(&mut circuit)?;
        self.apply_interference(&mut circuit)?;
        self.apply_measurement(&mut circuit)?;
        Ok(circuit)
    }

    /// Stage 1: H on every qubit in ascending index order
    fn apply_superposition(&self, circuit: &mut Circuit) -> Result<()> {
        for qubit in self.lattice.qubits() {
            circuit.add_operation(Operation::hadamard(qubit))?;
        }
        Ok(())
    }

    /// Stage 2: CNOT from each site to its right neighbor, dimension by
    /// dimension
    ///
    /// A single-site string has no neighbors and gets no coupling gates.
    fn apply_coupling(&self, circuit: &mut Circuit) -> Result<()> {
        for dimension in self.lattice.dimensions() {
            for site in 0..self.lattice.num_sites() - 1 {
                let control = self.lattice.qubit(dimension, site)?;
                let target = self.lattice.qubit(dimension, site + 1)?;
                circuit.add_operation(Operation::cnot(control, target)?)?;
            }
        }
        Ok(())
    }

    /// Stage 3: RZ([`ENERGY_LEVEL_PHASE`]) on every qubit in ascending
    /// index order
    fn apply_energy_phase(&self, circuit: &mut Circuit) -> Result<()> {
        for qubit in self.lattice.qubits() {
            circuit.add_operation(Operation::rotation_z(qubit, ENERGY_LEVEL_PHASE))?;
        }
        Ok(())
    }

    /// Stage 4: CZ between each dimension pair at each site
    ///
    /// Sites form the outer loop; within a site, dimension pairs run in
    /// ascending lexicographic order with the lower dimension as control.
    /// A one-dimensional string has no pairs and gets no interference gates.
    fn apply_interference(&self, circuit: &mut Circuit) -> Result<()> {
        for site in self.lattice.sites() {
            for (lower, upper) in self.lattice.dimension_pairs() {
                let control = self.lattice.qubit(lower, site)?;
                let target = self.lattice.qubit(upper, site)?;
                circuit.add_operation(Operation::cz(control, target)?)?;
            }
        }
        Ok(())
    }

    /// Stage 5: measure every qubit in ascending index order
    fn apply_measurement(&self, circuit: &mut Circuit) -> Result<()> {
        for qubit in self.lattice.qubits() {
            circuit.add_operation(Operation::measure(qubit))?;
        }
        Ok(())
    }
}
