/*!
 * Memory Types
 * Common types for contiguous memory allocation
 */

use crate::core::types::{Address, Size};
use crate::process::ProcessCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MemoryError {
    #[error("Allocation precondition violated: block at {start_address} ({size} units, {status}) cannot hold {required} units")]
    AllocationPreconditionViolated {
        start_address: Address,
        size: Size,
        required: Size,
        status: BlockStatus,
    },

    #[error("No suitable block for process {code}: requested {required} units, largest free block {largest_free} units")]
    NoSuitableBlock {
        code: ProcessCode,
        required: Size,
        largest_free: Size,
    },

    #[error("Process {0} already has a block assigned")]
    AlreadyAllocated(ProcessCode),

    #[error("No block is owned by process {0}")]
    UnknownOwner(ProcessCode),

    #[error("Stale or unknown block handle: {0:?}")]
    InvalidBlock(BlockId),

    #[error("Address partition broken at {address}: {reason}")]
    InvariantViolated { address: Address, reason: String },
}

/// Handle to a block inside a [`MemoryList`](super::MemoryList)
///
/// Handles stay valid until the block they name is merged away by a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(pub(crate) usize);

/// Block occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockStatus {
    Free,
    Allocated,
}

impl BlockStatus {
    /// Single-letter tag shown in memory maps
    pub fn tag(self) -> char {
        match self {
            BlockStatus::Free => 'f',
            BlockStatus::Allocated => 'a',
        }
    }
}

impl std::fmt::Display for BlockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BlockStatus::Free => write!(f, "free"),
            BlockStatus::Allocated => write!(f, "allocated"),
        }
    }
}

/// One contiguous region of the address space
///
/// `owner` is `Some` exactly when `status` is [`BlockStatus::Allocated`]; only
/// the memory list mutates blocks, which keeps the two fields in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlock {
    pub(crate) start_address: Address,
    pub(crate) size: Size,
    pub(crate) status: BlockStatus,
    pub(crate) owner: Option<ProcessCode>,
}

impl MemoryBlock {
    pub(crate) fn free(start_address: Address, size: Size) -> Self {
        Self {
            start_address,
            size,
            status: BlockStatus::Free,
            owner: None,
        }
    }

    pub fn start_address(&self) -> Address {
        self.start_address
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// One past the last address covered by this block
    pub fn end_address(&self) -> Address {
        self.start_address + self.size
    }

    pub fn status(&self) -> BlockStatus {
        self.status
    }

    pub fn owner(&self) -> Option<&ProcessCode> {
        self.owner.as_ref()
    }

    pub fn is_free(&self) -> bool {
        self.status == BlockStatus::Free
    }

    /// Whether this block can satisfy a request of `required` units
    pub fn fits(&self, required: Size) -> bool {
        self.is_free() && self.size >= required
    }

    pub fn view(&self) -> BlockView {
        BlockView {
            start_address: self.start_address,
            size: self.size,
            status: self.status,
            owner: self.owner.clone(),
        }
    }
}

/// Rendered block: `(start_address, size, status, owner)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockView {
    pub start_address: Address,
    pub size: Size,
    pub status: BlockStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<ProcessCode>,
}

impl BlockView {
    pub fn free(start_address: Address, size: Size) -> Self {
        Self {
            start_address,
            size,
            status: BlockStatus::Free,
            owner: None,
        }
    }

    pub fn allocated(start_address: Address, size: Size, owner: ProcessCode) -> Self {
        Self {
            start_address,
            size,
            status: BlockStatus::Allocated,
            owner: Some(owner),
        }
    }
}

/// Memory statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: usize,
    pub used_memory: usize,
    pub free_memory: usize,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: usize,
    /// External fragmentation: share of free memory outside the largest free block
    pub fragmentation: f64,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        if self.usage_percentage >= 95.0 {
            MemoryPressure::Critical
        } else if self.usage_percentage >= 80.0 {
            MemoryPressure::High
        } else if self.usage_percentage >= 60.0 {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
