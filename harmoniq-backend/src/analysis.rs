//! Summary statistics over measurement outcomes

use crate::{BackendError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The entry with the highest count; ties go to the lexicographically
/// smallest bitstring
pub(crate) fn most_common_entry(counts: &HashMap<String, usize>) -> Option<(&str, usize)> {
    counts
        .iter()
        .map(|(outcome, &count)| (outcome.as_str(), count))
        .reduce(|best, candidate| {
            if candidate.1 > best.1 || (candidate.1 == best.1 && candidate.0 < best.0) {
                candidate
            } else {
                best
            }
        })
}

/// Headline statistics of one experiment's measurement outcomes
///
/// # Example
/// ```
/// use harmoniq_backend::Analysis;
/// use std::collections::HashMap;
///
/// let mut counts = HashMap::new();
/// counts.insert("00".to_string(), 700);
/// counts.insert("11".to_string(), 300);
///
/// let analysis = Analysis::from_counts(&counts).unwrap();
/// assert_eq!(analysis.total_measurements, 1000);
/// assert_eq!(analysis.unique_states, 2);
/// assert_eq!(analysis.most_common_state, "00");
/// assert!((analysis.highest_probability - 0.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Sum of all counts
    pub total_measurements: usize,

    /// Number of distinct bitstrings observed
    pub unique_states: usize,

    /// The bitstring with the highest count; on equal counts the
    /// lexicographically smallest wins
    pub most_common_state: String,

    /// Count of the most common state divided by total measurements
    pub highest_probability: f64,
}

impl Analysis {
    /// Compute the statistics for a counts table
    ///
    /// # Errors
    /// [`BackendError::EmptyDistribution`] if the table is empty or every
    /// count is zero.
    pub fn from_counts(counts: &HashMap<String, usize>) -> Result<Self> {
        let total_measurements: usize = counts.values().sum();
        if total_measurements == 0 {
            return Err(BackendError::EmptyDistribution);
        }

        // non-empty since the total is positive
        let (state, count) = match most_common_entry(counts) {
            Some(entry) => entry,
            None => return Err(BackendError::EmptyDistribution),
        };

        Ok(Self {
            total_measurements,
            unique_states: counts.len(),
            most_common_state: state.to_string(),
            highest_probability: count as f64 / total_measurements as f64,
        })
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total measurements: {}", self.total_measurements)?;
        writeln!(f, "Unique states observed: {}", self.unique_states)?;
        writeln!(f, "Most common state: {}", self.most_common_state)?;
        write!(f, "Highest probability: {:.4}", self.highest_probability)
    }
}
