//! Ordered gate sequence over a fixed qubit register

use crate::{CircuitError, GateKind, Operation, Result};
use std::fmt;

/// A quantum circuit: a fixed-width qubit register and an ordered list of
/// operations applied to it
///
/// The register width is set at construction and never changes. Operations
/// are appended in program order and kept exactly as appended, so two
/// circuits built by the same deterministic procedure compare equal.
///
/// # Example
/// ```
/// use harmoniq_core::{Circuit, Operation, QubitId};
///
/// let mut circuit = Circuit::new(2);
/// circuit.add_operation(Operation::hadamard(QubitId::new(0))).unwrap();
/// circuit.add_operation(Operation::cnot(QubitId::new(0), QubitId::new(1)).unwrap()).unwrap();
/// assert_eq!(circuit.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<Operation>,
}

impl Circuit {
    /// Create an empty circuit over `num_qubits` qubits
    ///
    /// # Panics
    /// Panics if `num_qubits` is zero.
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::new(),
        }
    }

    /// Create an empty circuit with room for `capacity` operations
    ///
    /// # Panics
    /// Panics if `num_qubits` is zero.
    pub fn with_capacity(num_qubits: usize, capacity: usize) -> Self {
        assert!(num_qubits > 0, "circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::with_capacity(capacity),
        }
    }

    /// Append an operation
    ///
    /// # Errors
    /// [`CircuitError::InvalidQubit`] if any operand lies outside the
    /// register.
    pub fn add_operation(&mut self, operation: Operation) -> Result<()> {
        for qubit in operation.qubits() {
            if qubit.index() >= self.num_qubits {
                return Err(CircuitError::invalid_qubit(qubit.index(), self.num_qubits));
            }
        }
        self.operations.push(operation);
        Ok(())
    }

    /// Width of the qubit register
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of operations in program order
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the circuit contains no operations
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// The operations in program order
    #[inline]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The operation at `index`, if present
    pub fn get_operation(&self, index: usize) -> Option<&Operation> {
        self.operations.get(index)
    }

    /// Number of operations of the given kind
    pub fn count_of(&self, kind: GateKind) -> usize {
        self.operations.iter().filter(|op| op.kind() == kind).count()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit with {} qubits, {} operations:",
            self.num_qubits,
            self.operations.len()
        )?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}
