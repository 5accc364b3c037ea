/*!
 * memsim
 * Contiguous memory allocation simulator with First-Fit and Best-Fit placement
 */

pub mod core;
pub mod display;
pub mod errors;
pub mod memory;
pub mod monitoring;
pub mod paging;
pub mod process;
pub mod simulation;

// Re-exports
pub use crate::core::{ConfigError, SimulationConfig};
pub use errors::{SimError, SimResult};
pub use memory::{
    AllocationPolicy, BestFit, BlockStatus, BlockView, FirstFit, MemoryError, MemoryList,
    PlacementPolicy,
};
pub use monitoring::init_tracing;
pub use paging::PageTable;
pub use process::{AllocationStatus, Process, ProcessCode, ProcessError, ProcessQueue};
pub use simulation::{Session, SharedSession};
