/*!
 * Allocation Ledger
 * Scoped tracking of outstanding allocations
 *
 * The ledger is an ordinary value owned by whoever performs allocations;
 * every tracked allocation gets a handle and stays outstanding until that
 * handle is released. Whatever is still tracked when the owner finishes
 * is a leak.
 */

use crate::core::types::Size;
use ahash::AHashMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ledger operation result
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Unknown or already released ledger handle: {0}")]
    UnknownHandle(LedgerHandle),
}

/// Handle identifying one tracked allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LedgerHandle(u64);

impl std::fmt::Display for LedgerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One tracked allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub handle: LedgerHandle,
    pub label: String,
    pub size: Size,
}

/// Allocation ledger
#[derive(Debug, Default)]
pub struct AllocationLedger {
    entries: AHashMap<LedgerHandle, LedgerEntry>,
    next_handle: u64,
}

impl AllocationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an allocation and return its handle
    pub fn track(&mut self, label: impl Into<String>, size: Size) -> LedgerHandle {
        self.next_handle += 1;
        let handle = LedgerHandle(self.next_handle);
        let entry = LedgerEntry {
            handle,
            label: label.into(),
            size,
        };
        info!("Ledger tracking {} ({} units) as {}", entry.label, size, handle);
        self.entries.insert(handle, entry);
        handle
    }

    /// Stop tracking an allocation
    pub fn release(&mut self, handle: LedgerHandle) -> LedgerResult<LedgerEntry> {
        self.entries.remove(&handle).ok_or_else(|| {
            warn!("Ledger release of unknown handle {}", handle);
            LedgerError::UnknownHandle(handle)
        })
    }

    /// Release everything, returning what was still outstanding
    pub fn release_all(&mut self) -> Vec<LedgerEntry> {
        let mut drained: Vec<_> = self.entries.drain().map(|(_, entry)| entry).collect();
        drained.sort_by_key(|entry| entry.handle);
        if !drained.is_empty() {
            info!("Ledger released {} outstanding allocation(s)", drained.len());
        }
        drained
    }

    /// Outstanding allocations, oldest first
    pub fn outstanding(&self) -> Vec<&LedgerEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.handle);
        entries
    }

    pub fn outstanding_bytes(&self) -> Size {
        self.entries.values().map(|entry| entry.size).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
