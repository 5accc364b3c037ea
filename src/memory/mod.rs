/*!
 * Memory Module
 * Contiguous memory model, placement policies and allocation tracking
 */

pub mod ledger;
pub mod list;
pub mod policy;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use ledger::{AllocationLedger, LedgerEntry, LedgerError, LedgerHandle, LedgerResult};
pub use list::{Blocks, MemoryList};
pub use policy::{AllocationPolicy, BestFit, FirstFit};
pub use traits::*;
pub use types::*;
