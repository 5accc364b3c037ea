/*!
 * Memory List Statistics
 * Usage, fragmentation and partition checks
 */

use super::super::types::{MemoryError, MemoryResult, MemoryStats};
use super::MemoryList;
use crate::core::types::{Address, Size};
use ahash::AHashSet;

impl MemoryList {
    /// Size of the largest free block (0 when memory is full)
    pub fn largest_free_block(&self) -> Size {
        self.iter()
            .filter(|(_, block)| block.is_free())
            .map(|(_, block)| block.size())
            .max()
            .unwrap_or(0)
    }

    pub fn stats(&self) -> MemoryStats {
        let free_memory = self.free_capacity();
        let largest_free_block = self.largest_free_block();
        let free_blocks = self.iter().filter(|(_, block)| block.is_free()).count();
        let fragmentation = if free_memory == 0 {
            0.0
        } else {
            1.0 - largest_free_block as f64 / free_memory as f64
        };

        MemoryStats {
            total_memory: self.total_size,
            used_memory: self.used_memory,
            free_memory,
            usage_percentage: (self.used_memory as f64 / self.total_size as f64) * 100.0,
            allocated_blocks: self.allocated_blocks,
            free_blocks,
            largest_free_block,
            fragmentation,
        }
    }

    /// Verify the blocks exactly partition `[0, total_size)`
    ///
    /// Also checks back links, owner/status agreement, that no code owns
    /// more than one block and the cached counters.
    pub fn check_invariants(&self) -> MemoryResult<()> {
        let mut owners = AHashSet::new();
        let mut expected_start: Address = 0;
        let mut prev = None;
        let mut allocated = 0;
        let mut used: Size = 0;
        let mut seen = 0;

        for (id, block) in self.iter() {
            let broken = |reason: String| MemoryError::InvariantViolated {
                address: block.start_address(),
                reason,
            };

            if self.previous(id) != prev {
                return Err(broken("back link does not name the preceding block".into()));
            }
            if block.start_address() != expected_start {
                return Err(broken(format!(
                    "block starts at {} but previous block ends at {}",
                    block.start_address(),
                    expected_start
                )));
            }
            if block.size() == 0 {
                return Err(broken("zero-sized block".into()));
            }
            if block.is_free() == block.owner().is_some() {
                return Err(broken(format!(
                    "status {} disagrees with owner {:?}",
                    block.status(),
                    block.owner()
                )));
            }
            if let Some(owner) = block.owner() {
                if !owners.insert(owner) {
                    return Err(broken(format!("process {} owns more than one block", owner)));
                }
            }
            if !block.is_free() {
                allocated += 1;
                used += block.size();
            }

            expected_start = block.end_address();
            prev = Some(id);
            seen += 1;
        }

        if expected_start != self.total_size {
            return Err(MemoryError::InvariantViolated {
                address: expected_start,
                reason: format!("partition ends at {} not {}", expected_start, self.total_size),
            });
        }
        if seen != self.block_count() {
            return Err(MemoryError::InvariantViolated {
                address: expected_start,
                reason: format!("{} linked blocks but {} stored", seen, self.block_count()),
            });
        }
        if allocated != self.allocated_blocks || used != self.used_memory {
            return Err(MemoryError::InvariantViolated {
                address: 0,
                reason: format!(
                    "counters say {} blocks / {} units allocated, list holds {} / {}",
                    self.allocated_blocks, self.used_memory, allocated, used
                ),
            });
        }
        Ok(())
    }
}
