/*!
 * Process Module
 * Allocation requests, their queue, and descriptor intake
 */

pub mod intake;
pub mod queue;
pub mod types;
mod validation;

// Re-export for convenience
pub use intake::{load_file, load_str, parse_record, validate_source, IntakeReport};
pub use queue::{BatchOutcome, BatchReport, ProcessQueue};
pub use types::{AllocationStatus, Process, ProcessCode, ProcessError, ProcessResult};
