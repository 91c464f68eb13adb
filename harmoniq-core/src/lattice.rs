//! Site/dimension geometry of the vibrating string and its qubit layout

use crate::{CircuitError, QubitId, Result};
use std::fmt;

/// Maps the string's (dimension, site) grid onto a flat qubit register
///
/// A string of `num_sites` points vibrating in `num_dimensions` spatial
/// dimensions uses one qubit per (dimension, site) pair. Qubits are laid
/// out dimension-major:
///
/// ```text
/// index = site + dimension * num_sites
/// ```
///
/// so dimension 0 occupies indices `0..num_sites`, dimension 1 the next
/// block, and so on.
///
/// # Example
/// ```
/// use harmoniq_core::StringLattice;
///
/// let lattice = StringLattice::new(4, 2).unwrap();
/// assert_eq!(lattice.num_qubits(), 8);
/// assert_eq!(lattice.qubit(0, 0).unwrap().index(), 0);
/// assert_eq!(lattice.qubit(0, 3).unwrap().index(), 3);
/// assert_eq!(lattice.qubit(1, 0).unwrap().index(), 4);
/// assert_eq!(lattice.qubit(1, 3).unwrap().index(), 7);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StringLattice {
    num_sites: usize,
    num_dimensions: usize,
}

impl StringLattice {
    /// Create a lattice of `num_sites` points per dimension across
    /// `num_dimensions` dimensions
    ///
    /// # Errors
    /// [`CircuitError::NoSites`] / [`CircuitError::NoDimensions`] if either
    /// count is zero.
    pub fn new(num_sites: usize, num_dimensions: usize) -> Result<Self> {
        if num_sites == 0 {
            return Err(CircuitError::NoSites);
        }
        if num_dimensions == 0 {
            return Err(CircuitError::NoDimensions);
        }
        Ok(Self {
            num_sites,
            num_dimensions,
        })
    }

    /// Points per dimension
    #[inline]
    pub const fn num_sites(&self) -> usize {
        self.num_sites
    }

    /// Spatial dimensions
    #[inline]
    pub const fn num_dimensions(&self) -> usize {
        self.num_dimensions
    }

    /// Total register width: `num_sites * num_dimensions`
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_sites * self.num_dimensions
    }

    /// The qubit holding `site` of `dimension`
    ///
    /// # Errors
    /// [`CircuitError::InvalidDimension`] / [`CircuitError::InvalidSite`] if
    /// either coordinate lies outside the lattice.
    pub fn qubit(&self, dimension: usize, site: usize) -> Result<QubitId> {
        if dimension >= self.num_dimensions {
            return Err(CircuitError::InvalidDimension {
                dimension,
                num_dimensions: self.num_dimensions,
            });
        }
        if site >= self.num_sites {
            return Err(CircuitError::InvalidSite {
                site,
                num_sites: self.num_sites,
            });
        }
        Ok(QubitId::new(site + dimension * self.num_sites))
    }

    /// The (dimension, site) pair a qubit encodes
    ///
    /// Inverse of [`qubit`](Self::qubit).
    ///
    /// # Errors
    /// [`CircuitError::InvalidQubit`] if the qubit lies outside the register.
    pub fn coordinates(&self, qubit: QubitId) -> Result<(usize, usize)> {
        let index = qubit.index();
        if index >= self.num_qubits() {
            return Err(CircuitError::invalid_qubit(index, self.num_qubits()));
        }
        Ok((index / self.num_sites, index % self.num_sites))
    }

    /// Site indices in ascending order
    pub fn sites(&self) -> std::ops::Range<usize> {
        0..self.num_sites
    }

    /// Dimension indices in ascending order
    pub fn dimensions(&self) -> std::ops::Range<usize> {
        0..self.num_dimensions
    }

    /// All qubits in ascending index order
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> {
        (0..self.num_qubits()).map(QubitId::new)
    }

    /// Unordered dimension pairs `(a, b)` with `a < b`, in ascending
    /// lexicographic order
    ///
    /// Empty for a one-dimensional lattice.
    pub fn dimension_pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.num_dimensions;
        (0..n).flat_map(move |a| ((a + 1)..n).map(move |b| (a, b)))
    }
}

impl fmt::Display for StringLattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sites x {} dimensions ({} qubits)",
            self.num_sites,
            self.num_dimensions,
            self.num_qubits()
        )
    }
}
