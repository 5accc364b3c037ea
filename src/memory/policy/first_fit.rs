/*!
 * First-Fit Placement
 */

use super::super::list::MemoryList;
use super::super::traits::PlacementPolicy;
use super::super::types::BlockId;
use crate::core::types::Size;

/// Lowest-addressed free block large enough for the request
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl PlacementPolicy for FirstFit {
    fn name(&self) -> &'static str {
        "First-Fit"
    }

    fn select(&self, memory: &MemoryList, required: Size) -> Option<BlockId> {
        memory
            .iter()
            .find(|(_, block)| block.fits(required))
            .map(|(id, _)| id)
    }
}
