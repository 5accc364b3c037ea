/*!
 * Block Release
 * Return a process's block to the free pool, coalescing free neighbours
 */

use super::super::types::{BlockId, BlockStatus, MemoryError, MemoryResult};
use super::MemoryList;
use crate::core::types::Size;
use crate::process::ProcessCode;
use log::{info, warn};

impl MemoryList {
    /// Find the block owned by `code`
    pub fn find_owner(&self, code: &ProcessCode) -> Option<BlockId> {
        self.iter()
            .find(|(_, block)| block.owner() == Some(code))
            .map(|(id, _)| id)
    }

    /// Free the block owned by `code` and merge it with free neighbours
    ///
    /// Returns the number of units released. The allocation policies never
    /// call this; it exists for sessions that unload processes.
    pub fn release(&mut self, code: &ProcessCode) -> MemoryResult<Size> {
        let Some(id) = self.find_owner(code) else {
            warn!("Attempted to release memory of unknown process {}", code);
            return Err(MemoryError::UnknownOwner(code.clone()));
        };

        let (start_address, size) = match self.slot_mut(id) {
            Some(slot) => {
                slot.block.status = BlockStatus::Free;
                slot.block.owner = None;
                (slot.block.start_address, slot.block.size)
            }
            None => return Err(MemoryError::InvalidBlock(id)),
        };
        self.allocated_blocks -= 1;
        self.used_memory -= size;

        let mut merged = 0;
        if let Some(next) = self.next(id) {
            if self.block(next).map_or(false, |b| b.is_free()) {
                self.absorb_next(id);
                merged += 1;
            }
        }
        if let Some(prev) = self.previous(id) {
            if self.block(prev).map_or(false, |b| b.is_free()) {
                self.absorb_next(prev);
                merged += 1;
            }
        }

        info!(
            "Released {} units at {} from process {} (coalesced {} neighbour(s), {} units free)",
            size,
            start_address,
            code,
            merged,
            self.free_capacity()
        );
        Ok(size)
    }

    /// Merge the successor of `id` into `id`, unlinking and vacating it
    fn absorb_next(&mut self, id: BlockId) {
        let Some(next_id) = self.next(id) else {
            return;
        };
        let Some(next) = self.remove_slot(next_id) else {
            return;
        };
        if let Some(after) = next.next {
            if let Some(slot) = self.slot_mut(after) {
                slot.prev = Some(id);
            }
        }
        if let Some(slot) = self.slot_mut(id) {
            slot.block.size += next.block.size;
            slot.next = next.next;
        }
    }
}
