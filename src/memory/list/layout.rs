/*!
 * Explicit Layouts
 * Build a memory list from a rendered block sequence
 */

use super::super::types::{BlockId, BlockStatus, BlockView, MemoryBlock, MemoryError, MemoryResult};
use super::{MemoryList, Slot};
use crate::core::types::Address;
use ahash::AHashSet;

impl MemoryList {
    /// Rebuild a list from address-ordered block views
    ///
    /// The views must partition `[0, end)` exactly, every size must be
    /// positive and allocated blocks must name an owner that no other block
    /// names. Adjacent free blocks are kept as given, not merged. The result
    /// has `total_size == end`.
    pub fn from_blocks<I>(blocks: I) -> MemoryResult<Self>
    where
        I: IntoIterator<Item = BlockView>,
    {
        let mut slots: Vec<Option<Slot>> = Vec::new();
        let mut owners = AHashSet::new();
        let mut expected_start: Address = 0;
        let mut used_memory = 0;
        let mut allocated_blocks = 0;

        for view in blocks {
            if view.start_address != expected_start || view.size == 0 {
                return Err(MemoryError::InvariantViolated {
                    address: view.start_address,
                    reason: format!(
                        "expected a non-empty block at {}, got {} units at {}",
                        expected_start, view.size, view.start_address
                    ),
                });
            }
            if (view.status == BlockStatus::Allocated) != view.owner.is_some() {
                return Err(MemoryError::InvariantViolated {
                    address: view.start_address,
                    reason: format!("status {} disagrees with owner {:?}", view.status, view.owner),
                });
            }
            if let Some(owner) = &view.owner {
                if !owners.insert(owner.clone()) {
                    return Err(MemoryError::InvariantViolated {
                        address: view.start_address,
                        reason: format!("process {} owns more than one block", owner),
                    });
                }
            }
            let end = expected_start.checked_add(view.size).ok_or_else(|| {
                MemoryError::InvariantViolated {
                    address: view.start_address,
                    reason: format!("block of {} units overflows the address space", view.size),
                }
            })?;
            if view.status == BlockStatus::Allocated {
                used_memory += view.size;
                allocated_blocks += 1;
            }

            let index = slots.len();
            if let Some(Some(prev)) = slots.last_mut() {
                prev.next = Some(BlockId(index));
            }
            expected_start = end;
            slots.push(Some(Slot {
                block: MemoryBlock {
                    start_address: view.start_address,
                    size: view.size,
                    status: view.status,
                    owner: view.owner,
                },
                prev: index.checked_sub(1).map(BlockId),
                next: None,
            }));
        }

        if slots.is_empty() {
            return Err(MemoryError::InvariantViolated {
                address: 0,
                reason: "layout has no blocks".to_string(),
            });
        }

        Ok(Self {
            slots,
            vacant: Vec::new(),
            head: BlockId(0),
            total_size: expected_start,
            used_memory,
            allocated_blocks,
        })
    }
}
