/*!
 * Core Types
 * Common types used across the simulator
 */

/// Address type for memory operations (offset from the base of the address space)
pub type Address = usize;

/// Size type for memory operations, in the same units as the total memory size
pub type Size = usize;

/// Simulation clock value (arrival and execution times)
pub type Tick = u32;

/// Page frame number in the paging table (1-based, like the frame labels shown to users)
pub type FrameNumber = u32;
