/*!
 * Best-Fit Placement
 */

use super::super::list::MemoryList;
use super::super::traits::PlacementPolicy;
use super::super::types::BlockId;
use crate::core::types::Size;

/// Smallest free block large enough for the request
///
/// Ties go to the lowest address: the scan runs in address order and only
/// replaces its candidate on a strictly smaller block.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFit;

impl PlacementPolicy for BestFit {
    fn name(&self) -> &'static str {
        "Best-Fit"
    }

    fn select(&self, memory: &MemoryList, required: Size) -> Option<BlockId> {
        let mut best: Option<(BlockId, Size)> = None;
        for (id, block) in memory.iter() {
            if !block.fits(required) {
                continue;
            }
            match best {
                Some((_, best_size)) if block.size() >= best_size => {}
                _ => best = Some((id, block.size())),
            }
        }
        best.map(|(id, _)| id)
    }
}
