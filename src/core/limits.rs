/*!
 * Simulation Limits and Constants
 *
 * Centralized location for every fixed value the simulator depends on.
 * Organized by domain.
 */

// =============================================================================
// MEMORY LIMITS
// =============================================================================

/// Default size of the simulated contiguous address space
pub const DEFAULT_TOTAL_MEMORY: usize = 1024;

// =============================================================================
// PROCESS LIMITS
// =============================================================================

/// Maximum number of visible characters in a process code
pub const PROCESS_CODE_MAX_LEN: usize = 9;

/// Number of `;`-separated fields in a process descriptor record
pub const DESCRIPTOR_FIELDS: usize = 4;

/// Field delimiter in process descriptor sources
pub const DESCRIPTOR_DELIMITER: char = ';';

// =============================================================================
// PAGING LIMITS
// =============================================================================

/// Number of frames in the paging table
pub const TOTAL_PAGES: usize = 25;

/// Capacity of one page, in KB
pub const PAGE_SIZE_KB: usize = 100;

/// Maximum length of a program name in the paging table
pub const PROGRAM_NAME_MAX_LEN: usize = 14;
