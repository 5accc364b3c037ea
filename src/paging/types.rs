/*!
 * Paging Types
 */

use crate::core::types::{FrameNumber, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Paging operation result
pub type PagingResult<T> = Result<T, PagingError>;

/// Paging errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagingError {
    #[error("Insufficient free pages for program {name}: needs {needed}, {available} free")]
    InsufficientPages {
        name: String,
        needed: usize,
        available: usize,
    },

    #[error("Program not found: {0}")]
    ProgramNotFound(String),

    #[error("Program {0} is already loaded")]
    DuplicateProgram(String),

    #[error("Invalid program size: {0} KB")]
    InvalidSize(Size),

    #[error("Invalid program name: {0:?}")]
    InvalidName(String),
}

/// Program resident in the page table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub size_kb: Size,
    /// Frames in load order
    pub pages: Vec<FrameNumber>,
}
