//! Experiment configuration

use crate::{BackendError, Result};
use harmoniq_core::StringLattice;

/// Parameters of one string-vibration experiment
///
/// The defaults describe the reference experiment: a 4-point string
/// vibrating in 2 dimensions, measured 1000 times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Points along the string, per dimension
    ///
    /// Default: 4
    pub num_sites: usize,

    /// Spatial dimensions the string vibrates in
    ///
    /// Default: 2
    pub num_dimensions: usize,

    /// Number of measurement shots
    ///
    /// Default: 1000
    pub shots: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            num_sites: 4,
            num_dimensions: 2,
            shots: 1000,
        }
    }
}

impl ExperimentConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sites per dimension
    pub fn with_sites(mut self, num_sites: usize) -> Self {
        self.num_sites = num_sites;
        self
    }

    /// Set the number of dimensions
    pub fn with_dimensions(mut self, num_dimensions: usize) -> Self {
        self.num_dimensions = num_dimensions;
        self
    }

    /// Set the shot count
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// The lattice this configuration describes
    ///
    /// # Errors
    /// [`BackendError::CircuitConstruction`] if either lattice count is zero.
    pub fn lattice(&self) -> Result<StringLattice> {
        Ok(StringLattice::new(self.num_sites, self.num_dimensions)?)
    }

    /// Check the configuration before running
    ///
    /// # Errors
    /// - [`BackendError::InvalidShots`] if the shot count is zero
    /// - [`BackendError::CircuitConstruction`] if the lattice is empty in
    ///   either direction
    pub fn validate(&self) -> Result<()> {
        if self.shots == 0 {
            return Err(BackendError::InvalidShots(0));
        }
        self.lattice()?;
        Ok(())
    }
}
