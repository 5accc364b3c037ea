/*!
 * Memory List
 *
 * Ordered sequence of blocks exactly partitioning `[0, total_size)`.
 *
 * ## Layout
 *
 * Blocks live in an arena (`Vec` of slots) and are chained in address order
 * through `prev`/`next` slot indices. Slots vacated by a merge are recycled
 * for later splits, so a [`BlockId`] never moves while its block exists.
 *
 * ## Mutations
 *
 * - **Split** (`allocate`): an oversized free block becomes an allocated
 *   prefix plus a new free remainder spliced right after it
 * - **Merge** (`release`): a released block absorbs free neighbours
 *
 * Nothing else creates or destroys blocks.
 */

mod allocator;
mod layout;
mod release;
mod render;
mod stats;

use super::types::{BlockId, MemoryBlock};
use crate::core::types::Size;
use log::{info, warn};

#[derive(Debug, Clone)]
struct Slot {
    block: MemoryBlock,
    prev: Option<BlockId>,
    next: Option<BlockId>,
}

/// Contiguous memory model
#[derive(Debug, Clone)]
pub struct MemoryList {
    slots: Vec<Option<Slot>>,
    vacant: Vec<usize>,
    head: BlockId,
    total_size: Size,
    used_memory: Size,
    allocated_blocks: usize,
}

impl MemoryList {
    /// Create a list holding one free block covering the whole address space
    ///
    /// `total_size` must be positive; configuration rejects zero before a
    /// list is built. Release builds that still pass zero get a one-unit
    /// list and a warning.
    pub fn new(total_size: Size) -> Self {
        debug_assert!(total_size > 0, "memory list needs a non-empty address space");
        if total_size == 0 {
            warn!("Memory list requested with 0 units; using 1");
        }
        let total_size = total_size.max(1);
        info!(
            "Memory list initialized with {} units as a single free block",
            total_size
        );
        Self {
            slots: vec![Some(Slot {
                block: MemoryBlock::free(0, total_size),
                prev: None,
                next: None,
            })],
            vacant: Vec::new(),
            head: BlockId(0),
            total_size,
            used_memory: 0,
            allocated_blocks: 0,
        }
    }

    pub fn total_size(&self) -> Size {
        self.total_size
    }

    /// Units currently held by allocated blocks
    pub fn used_memory(&self) -> Size {
        self.used_memory
    }

    /// Units not held by any process
    pub fn free_capacity(&self) -> Size {
        self.total_size - self.used_memory
    }

    /// Number of blocks currently allocated to a process
    pub fn allocated_count(&self) -> usize {
        self.allocated_blocks
    }

    /// Number of blocks in the partition
    pub fn block_count(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    /// Look up a block by handle
    pub fn block(&self, id: BlockId) -> Option<&MemoryBlock> {
        self.slot(id).map(|slot| &slot.block)
    }

    /// First block (always starts at address 0)
    pub fn first(&self) -> BlockId {
        self.head
    }

    pub fn next(&self, id: BlockId) -> Option<BlockId> {
        self.slot(id).and_then(|slot| slot.next)
    }

    pub fn previous(&self, id: BlockId) -> Option<BlockId> {
        self.slot(id).and_then(|slot| slot.prev)
    }

    /// Iterate blocks in address order
    pub fn iter(&self) -> Blocks<'_> {
        Blocks {
            list: self,
            cursor: Some(self.head),
        }
    }

    fn slot(&self, id: BlockId) -> Option<&Slot> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: BlockId) -> Option<&mut Slot> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Store a slot, reusing a vacated index when one exists
    fn insert_slot(&mut self, slot: Slot) -> BlockId {
        match self.vacant.pop() {
            Some(index) => {
                self.slots[index] = Some(slot);
                BlockId(index)
            }
            None => {
                self.slots.push(Some(slot));
                BlockId(self.slots.len() - 1)
            }
        }
    }

    fn remove_slot(&mut self, id: BlockId) -> Option<Slot> {
        let slot = self.slots.get_mut(id.0)?.take()?;
        self.vacant.push(id.0);
        Some(slot)
    }
}

/// Address-ordered iterator over `(BlockId, &MemoryBlock)`
pub struct Blocks<'a> {
    list: &'a MemoryList,
    cursor: Option<BlockId>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = (BlockId, &'a MemoryBlock);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let slot = self.list.slot(id)?;
        self.cursor = slot.next;
        Some((id, &slot.block))
    }
}

impl<'a> IntoIterator for &'a MemoryList {
    type Item = (BlockId, &'a MemoryBlock);
    type IntoIter = Blocks<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
