/*!
 * Paging Module
 * Whole-program loading into a fixed pool of 100 KB page frames
 *
 * Unrelated to the contiguous memory list: programs receive any free
 * frames, so there is no external fragmentation to manage.
 */

pub mod table;
pub mod types;

pub use table::{pages_needed, PageTable};
pub use types::{PagingError, PagingResult, Program};
