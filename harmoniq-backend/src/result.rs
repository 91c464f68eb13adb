//! Measurement outcome distributions

use crate::{analysis, Analysis, BackendError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Counts of measured bitstrings for a fixed number of shots
///
/// Each key is one observed readout of the full register, written with the
/// classical bit of qubit `i` at position `i` from the right. The counts
/// always sum to the shot count; construction enforces it.
///
/// # Example
/// ```
/// use harmoniq_backend::OutcomeDistribution;
/// use std::collections::HashMap;
///
/// let mut counts = HashMap::new();
/// counts.insert("00".to_string(), 25);
/// counts.insert("11".to_string(), 75);
///
/// let distribution = OutcomeDistribution::new(counts, 100).unwrap();
/// assert_eq!(distribution.probability("11"), 0.75);
/// assert_eq!(distribution.most_common(), Some(("11", 75)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    counts: HashMap<String, usize>,
    shots: usize,
}

impl OutcomeDistribution {
    /// Create a distribution, checking the counts against the shot count
    ///
    /// # Errors
    /// - [`BackendError::InvalidShots`] if `shots` is zero
    /// - [`BackendError::ShotCountMismatch`] if the counts do not sum to
    ///   `shots`
    pub fn new(counts: HashMap<String, usize>, shots: usize) -> Result<Self> {
        if shots == 0 {
            return Err(BackendError::InvalidShots(0));
        }
        let total: usize = counts.values().sum();
        if total != shots {
            return Err(BackendError::ShotCountMismatch {
                expected: shots,
                actual: total,
            });
        }
        Ok(Self { counts, shots })
    }

    /// Create a distribution whose shot count is the sum of the counts
    ///
    /// # Errors
    /// [`BackendError::EmptyDistribution`] if the counts sum to zero.
    pub fn from_counts(counts: HashMap<String, usize>) -> Result<Self> {
        let shots: usize = counts.values().sum();
        if shots == 0 {
            return Err(BackendError::EmptyDistribution);
        }
        Ok(Self { counts, shots })
    }

    /// Number of shots the distribution was measured over
    #[inline]
    pub const fn shots(&self) -> usize {
        self.shots
    }

    /// The raw counts table
    #[inline]
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Number of distinct bitstrings observed
    pub fn num_outcomes(&self) -> usize {
        self.counts.len()
    }

    /// Count for one bitstring, zero if never observed
    pub fn count(&self, outcome: &str) -> usize {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Fraction of shots that produced `outcome`
    pub fn probability(&self, outcome: &str) -> f64 {
        self.count(outcome) as f64 / self.shots as f64
    }

    /// The most frequent outcome and its count
    ///
    /// Ties go to the lexicographically smallest bitstring, so the answer
    /// never depends on hash ordering.
    pub fn most_common(&self) -> Option<(&str, usize)> {
        analysis::most_common_entry(&self.counts)
    }

    /// Outcomes sorted by descending count, ties in ascending bitstring
    /// order
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(outcome, &count)| (outcome.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Compute the headline statistics of this distribution
    ///
    /// # Errors
    /// [`BackendError::EmptyDistribution`] if no outcomes were recorded.
    pub fn analyze(&self) -> Result<Analysis> {
        Analysis::from_counts(&self.counts)
    }
}

impl fmt::Display for OutcomeDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} outcomes over {} shots:",
            self.num_outcomes(),
            self.shots
        )?;
        for (outcome, count) in self.sorted() {
            writeln!(
                f,
                "  {}: {} ({:.1}%)",
                outcome,
                count,
                100.0 * count as f64 / self.shots as f64
            )?;
        }
        Ok(())
    }
}
