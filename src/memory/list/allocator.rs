/*!
 * Block Allocation
 * Assign a process to a chosen free block, splitting off any excess
 */

use super::super::types::{BlockId, MemoryError, MemoryPressure, MemoryResult};
use super::{MemoryList, Slot};
use crate::core::types::Address;
use crate::memory::types::{BlockStatus, MemoryBlock};
use crate::process::Process;
use log::{error, info, warn};

impl MemoryList {
    /// Assign `process` to the free block `id`
    ///
    /// An exact fit is marked allocated in place. A larger block is split:
    /// the allocated prefix keeps `id`, and a new free remainder starting at
    /// `start + memory_required` is spliced in immediately after it.
    ///
    /// Returns the start address of the allocated block. Calling this on an
    /// allocated or undersized block is a caller bug and yields
    /// [`MemoryError::AllocationPreconditionViolated`] without touching the list.
    /// A code that already owns a block yields [`MemoryError::AlreadyAllocated`].
    pub fn allocate(&mut self, id: BlockId, process: &Process) -> MemoryResult<Address> {
        let required = process.memory_required();
        let slot = self.slot(id).ok_or(MemoryError::InvalidBlock(id))?;

        if let Some(owned) = self.find_owner(process.code()) {
            error!(
                "Refusing to place {}: it already owns the block at {}",
                process.code(),
                self.block(owned).map_or(0, |b| b.start_address())
            );
            return Err(MemoryError::AlreadyAllocated(process.code().clone()));
        }

        if !slot.block.fits(required) {
            error!(
                "Refusing to place {} ({} units) in block at {} ({} units, {})",
                process.code(),
                required,
                slot.block.start_address,
                slot.block.size,
                slot.block.status
            );
            return Err(MemoryError::AllocationPreconditionViolated {
                start_address: slot.block.start_address,
                size: slot.block.size,
                required,
                status: slot.block.status,
            });
        }

        let start_address = slot.block.start_address;
        let block_size = slot.block.size;
        let old_next = slot.next;

        if block_size > required {
            let remainder = Slot {
                block: MemoryBlock::free(start_address + required, block_size - required),
                prev: Some(id),
                next: old_next,
            };
            let remainder_id = self.insert_slot(remainder);
            if let Some(next_id) = old_next {
                if let Some(next) = self.slot_mut(next_id) {
                    next.prev = Some(remainder_id);
                }
            }
            if let Some(slot) = self.slot_mut(id) {
                slot.next = Some(remainder_id);
                slot.block.size = required;
            }
            info!(
                "Split block at {}: keeping {} units, {} units free at {}",
                start_address,
                required,
                block_size - required,
                start_address + required
            );
        }

        if let Some(slot) = self.slot_mut(id) {
            slot.block.status = BlockStatus::Allocated;
            slot.block.owner = Some(process.code().clone());
        }
        self.allocated_blocks += 1;
        self.used_memory += required;

        if let Some(level) = self.check_memory_pressure() {
            warn!(
                "Memory pressure {}: process {} allocated {} units at {} ({} / {} used)",
                level,
                process.code(),
                required,
                start_address,
                self.used_memory,
                self.total_size
            );
        } else {
            info!(
                "Process {} allocated {} units at {}",
                process.code(),
                required,
                start_address
            );
        }

        Ok(start_address)
    }

    /// Pressure level worth reporting after an allocation
    fn check_memory_pressure(&self) -> Option<MemoryPressure> {
        match self.stats().memory_pressure() {
            MemoryPressure::Low => None,
            level => Some(level),
        }
    }
}
