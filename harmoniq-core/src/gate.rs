//! Gate kinds and operations of the string-vibration circuit model

use crate::{CircuitError, QubitId, Result};
use smallvec::SmallVec;
use std::fmt;

/// The gate vocabulary the vibration model is built from
///
/// Each stage of the circuit draws on exactly one kind: Hadamard for the
/// superposition stage, CNOT for nearest-neighbor coupling, RZ for the
/// per-site energy phase, CZ for cross-dimension interference, and MEASURE
/// for the readout. The kind fixes the operand count and whether a rotation
/// angle is carried.
///
/// # Example
/// ```
/// use harmoniq_core::GateKind;
///
/// assert_eq!(GateKind::CNot.arity(), 2);
/// assert!(GateKind::RotationZ.takes_parameter());
/// assert!(!GateKind::Hadamard.takes_parameter());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Hadamard: equal-amplitude superposition on one qubit
    Hadamard,
    /// Controlled-NOT: entangles a control qubit with a target qubit
    CNot,
    /// Z-axis rotation by a fixed angle
    RotationZ,
    /// Controlled-Z: phase entanglement between two qubits
    CZ,
    /// Readout of one qubit into its like-indexed classical slot
    Measure,
}

impl GateKind {
    /// The gate's conventional short name
    pub const fn name(&self) -> &'static str {
        match self {
            GateKind::Hadamard => "H",
            GateKind::CNot => "CNOT",
            GateKind::RotationZ => "RZ",
            GateKind::CZ => "CZ",
            GateKind::Measure => "MEASURE",
        }
    }

    /// Number of qubits the gate acts on
    pub const fn arity(&self) -> usize {
        match self {
            GateKind::Hadamard | GateKind::RotationZ | GateKind::Measure => 1,
            GateKind::CNot | GateKind::CZ => 2,
        }
    }

    /// Whether the gate carries a rotation angle
    pub const fn takes_parameter(&self) -> bool {
        matches!(self, GateKind::RotationZ)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One gate applied to specific qubits, with its angle when the kind has one
///
/// Operations are immutable once constructed and compare structurally:
/// two operations are equal exactly when kind, operand order and parameter
/// all match. That equality is what makes circuit construction verifiable
/// as deterministic.
///
/// # Example
/// ```
/// use harmoniq_core::{Operation, QubitId};
///
/// let cx = Operation::cnot(QubitId::new(0), QubitId::new(1)).unwrap();
/// assert_eq!(cx.kind().name(), "CNOT");
/// assert_eq!(cx.qubits().len(), 2);
/// assert_eq!(cx.parameter(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    kind: GateKind,
    qubits: SmallVec<[QubitId; 2]>, // the model's gates are 1-2 qubits
    parameter: Option<f64>,
}

impl Operation {
    /// Create an operation, validating it against the gate kind
    ///
    /// # Errors
    /// - [`CircuitError::WrongQubitCount`] if the operand count does not
    ///   match the kind's arity
    /// - [`CircuitError::DuplicateQubit`] if an operand appears twice
    /// - [`CircuitError::MissingParameter`] /
    ///   [`CircuitError::UnexpectedParameter`] if the angle's presence does
    ///   not match the kind
    pub fn new(kind: GateKind, qubits: &[QubitId], parameter: Option<f64>) -> Result<Self> {
        if qubits.len() != kind.arity() {
            return Err(CircuitError::wrong_qubit_count(
                kind.name(),
                kind.arity(),
                qubits.len(),
            ));
        }

        for i in 0..qubits.len() {
            for j in (i + 1)..qubits.len() {
                if qubits[i] == qubits[j] {
                    return Err(CircuitError::DuplicateQubit(qubits[i]));
                }
            }
        }

        if kind.takes_parameter() && parameter.is_none() {
            return Err(CircuitError::MissingParameter(kind.name()));
        }
        if !kind.takes_parameter() && parameter.is_some() {
            return Err(CircuitError::UnexpectedParameter(kind.name()));
        }

        Ok(Self {
            kind,
            qubits: SmallVec::from_slice(qubits),
            parameter,
        })
    }

    /// Hadamard on one qubit
    pub fn hadamard(target: QubitId) -> Self {
        Self {
            kind: GateKind::Hadamard,
            qubits: SmallVec::from_slice(&[target]),
            parameter: None,
        }
    }

    /// Z-rotation by `theta` radians on one qubit
    pub fn rotation_z(target: QubitId, theta: f64) -> Self {
        Self {
            kind: GateKind::RotationZ,
            qubits: SmallVec::from_slice(&[target]),
            parameter: Some(theta),
        }
    }

    /// Readout of one qubit
    ///
    /// The result lands in the classical slot with the same linear index as
    /// the qubit; the slot is fixed by that rule rather than stored here.
    pub fn measure(target: QubitId) -> Self {
        Self {
            kind: GateKind::Measure,
            qubits: SmallVec::from_slice(&[target]),
            parameter: None,
        }
    }

    /// Controlled-NOT with explicit control and target
    ///
    /// # Errors
    /// [`CircuitError::DuplicateQubit`] if control and target coincide
    pub fn cnot(control: QubitId, target: QubitId) -> Result<Self> {
        Self::new(GateKind::CNot, &[control, target], None)
    }

    /// Controlled-Z with explicit control and target
    ///
    /// # Errors
    /// [`CircuitError::DuplicateQubit`] if control and target coincide
    pub fn cz(control: QubitId, target: QubitId) -> Result<Self> {
        Self::new(GateKind::CZ, &[control, target], None)
    }

    /// The gate kind
    #[inline]
    pub const fn kind(&self) -> GateKind {
        self.kind
    }

    /// Operands in application order (control before target for 2-qubit gates)
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// The rotation angle, for kinds that carry one
    #[inline]
    pub const fn parameter(&self) -> Option<f64> {
        self.parameter
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.name())?;
        if let Some(theta) = self.parameter {
            write!(f, "({:.4})", theta)?;
        }
        for (i, q) in self.qubits.iter().enumerate() {
            if i == 0 {
                write!(f, " {}", q)?;
            } else {
                write!(f, ", {}", q)?;
            }
        }
        Ok(())
    }
}
