/*!
 * Error Types
 * Top-level simulator error with miette diagnostics
 */

use miette::Diagnostic;
use thiserror::Error;

pub use crate::core::config::ConfigError;
pub use crate::memory::{LedgerError, MemoryError};
pub use crate::paging::PagingError;
pub use crate::process::ProcessError;

/// Simulator operation result
pub type SimResult<T> = Result<T, SimError>;

/// Any error a simulation session can surface
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error(transparent)]
    #[diagnostic(
        code(memsim::memory),
        help("Free capacity may be fragmented; check the memory map for the largest free block.")
    )]
    Memory(#[from] MemoryError),

    #[error(transparent)]
    #[diagnostic(
        code(memsim::process),
        help("Descriptor lines look like `code;arrival;memory;execution;` with codes of at most 9 characters.")
    )]
    Process(#[from] ProcessError),

    #[error(transparent)]
    #[diagnostic(
        code(memsim::paging),
        help("Each page holds 100 KB; unload a program to return its pages.")
    )]
    Paging(#[from] PagingError),

    #[error(transparent)]
    #[diagnostic(code(memsim::ledger))]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    #[diagnostic(
        code(memsim::config),
        help("Use --memory N (N > 0) and --policy first-fit|best-fit.")
    )]
    Config(#[from] ConfigError),
}
