//! Qubit addressing

use std::fmt;

/// Linear index of a qubit in the string register
///
/// The register lays all lattice qubits out in one line; a `QubitId` is a
/// position in that line. [`StringLattice`](crate::StringLattice) is the only
/// producer of meaningful ids: it maps a (dimension, site) pair to the index
/// `site + dimension * num_sites` and back.
///
/// # Example
/// ```
/// use harmoniq_core::QubitId;
///
/// let q0 = QubitId::new(0);
/// let q1 = QubitId::new(1);
/// assert!(q0 < q1);
/// assert_eq!(format!("{}", q1), "q1");
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QubitId(usize);

impl QubitId {
    /// Create a qubit identifier from a linear register index
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the underlying register index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}
