/*!
 * Memory Traits
 * Placement policy abstraction
 */

use super::list::MemoryList;
use super::types::*;
use crate::core::types::{Address, Size};
use crate::process::Process;

/// Strategy choosing which free block receives a request
///
/// Implementations only read the list in [`select`](Self::select); the
/// provided [`place`](Self::place) performs the single mutation.
pub trait PlacementPolicy {
    /// Human-readable policy name
    fn name(&self) -> &'static str;

    /// Choose a free block of at least `required` units, if any
    fn select(&self, memory: &MemoryList, required: Size) -> Option<BlockId>;

    /// Select a block for `process` and allocate it
    ///
    /// On success the process is marked allocated. On failure neither the
    /// list nor the process changes.
    fn place(&self, memory: &mut MemoryList, process: &mut Process) -> MemoryResult<Address> {
        if process.is_allocated() {
            return Err(MemoryError::AlreadyAllocated(process.code().clone()));
        }

        let required = process.memory_required();
        let Some(id) = self.select(memory, required) else {
            return Err(MemoryError::NoSuitableBlock {
                code: process.code().clone(),
                required,
                largest_free: memory.largest_free_block(),
            });
        };

        let address = memory.allocate(id, process)?;
        process.mark_allocated();
        Ok(address)
    }
}
