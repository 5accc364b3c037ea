/*!
 * Memory Map Rendering
 * Read-only snapshot of the partition in address order
 */

use super::super::types::BlockView;
use super::MemoryList;

impl MemoryList {
    /// Address-ordered `(start_address, size, status, owner)` views of every block
    pub fn render(&self) -> Vec<BlockView> {
        self.iter().map(|(_, block)| block.view()).collect()
    }
}
