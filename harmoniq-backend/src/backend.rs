//! Execution backend trait

use crate::{OutcomeDistribution, Result};
use harmoniq_core::Circuit;

/// A target that can execute a measured circuit for a number of shots
///
/// The trait is the seam between circuit construction and execution: the
/// experiment runner hands a finished circuit to any implementation and gets
/// back a counts table. Implementations must return exactly as many
/// measurements as shots were requested; the runner checks.
///
/// # Example
/// ```no_run
/// use harmoniq_backend::{Backend, OutcomeDistribution, Result};
/// use harmoniq_core::Circuit;
///
/// fn run_on<B: Backend>(backend: &B, circuit: &Circuit, shots: usize) -> Result<OutcomeDistribution> {
///     backend.run(circuit, shots)
/// }
/// ```
pub trait Backend: Send + Sync {
    /// The backend name, used in availability errors and reports
    fn name(&self) -> &str;

    /// Whether the backend can currently accept runs
    fn is_available(&self) -> bool {
        true
    }

    /// Execute `circuit` for `shots` measurements
    ///
    /// # Errors
    /// - [`BackendError::InvalidShots`](crate::BackendError::InvalidShots)
    ///   if `shots` is zero
    /// - [`BackendError::SimulationFailed`](crate::BackendError::SimulationFailed)
    ///   if execution breaks down partway
    fn run(&self, circuit: &Circuit, shots: usize) -> Result<OutcomeDistribution>;
}
