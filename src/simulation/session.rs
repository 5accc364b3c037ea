/*!
 * Simulation Session
 *
 * A session owns exactly one memory list, one process queue, the
 * allocation ledger tracking placed processes, and the paging table.
 * Sessions share nothing; hosts running several of them wrap each in a
 * [`SharedSession`], whose mutex serializes every mutation of that
 * session's memory list.
 */

use crate::core::config::SimulationConfig;
use crate::core::types::Size;
use crate::errors::SimResult;
use crate::memory::{
    AllocationLedger, AllocationPolicy, BlockView, LedgerEntry, LedgerHandle, MemoryList,
    MemoryStats,
};
use crate::paging::PageTable;
use crate::process::{
    self, BatchReport, IntakeReport, Process, ProcessCode, ProcessQueue, ProcessResult,
};
use ahash::AHashMap;
use log::info;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use tracing::instrument;

/// Single-threaded simulation state
#[derive(Debug)]
pub struct Session {
    memory: MemoryList,
    queue: ProcessQueue,
    ledger: AllocationLedger,
    handles: AHashMap<ProcessCode, LedgerHandle>,
    paging: PageTable,
    default_policy: AllocationPolicy,
}

impl Session {
    pub fn new(config: &SimulationConfig) -> Self {
        info!(
            "Session created: {} units, default policy {}",
            config.total_memory, config.policy
        );
        Self {
            memory: MemoryList::new(config.total_memory),
            queue: ProcessQueue::new(),
            ledger: AllocationLedger::new(),
            handles: AHashMap::new(),
            paging: PageTable::new(),
            default_policy: config.policy,
        }
    }

    /// Session with a given address-space size and default settings otherwise
    pub fn with_memory(total_memory: Size) -> Self {
        Self::new(&SimulationConfig {
            total_memory,
            ..SimulationConfig::default()
        })
    }

    pub fn memory(&self) -> &MemoryList {
        &self.memory
    }

    pub fn queue(&self) -> &ProcessQueue {
        &self.queue
    }

    pub fn ledger(&self) -> &AllocationLedger {
        &self.ledger
    }

    pub fn paging(&self) -> &PageTable {
        &self.paging
    }

    pub fn paging_mut(&mut self) -> &mut PageTable {
        &mut self.paging
    }

    pub fn default_policy(&self) -> AllocationPolicy {
        self.default_policy
    }

    pub fn render(&self) -> Vec<BlockView> {
        self.memory.render()
    }

    pub fn stats(&self) -> MemoryStats {
        self.memory.stats()
    }

    /// Queue a process for the next batch
    pub fn add_process(&mut self, process: Process) -> ProcessResult<()> {
        self.queue.push(process)
    }

    /// Queue every valid record of a descriptor file
    pub fn load_descriptors(&mut self, path: impl AsRef<Path>) -> ProcessResult<IntakeReport> {
        process::load_file(path, &mut self.queue)
    }

    /// Queue every valid record of an in-memory descriptor source
    pub fn load_descriptor_str(&mut self, text: &str) -> ProcessResult<IntakeReport> {
        process::load_str(text, &mut self.queue)
    }

    /// Apply `policy` to all pending processes, tracking each placement
    #[instrument(skip(self))]
    pub fn run(&mut self, policy: AllocationPolicy) -> BatchReport {
        let report = self.queue.apply(&policy, &mut self.memory);
        for outcome in report.placed() {
            if let Some(process) = self.queue.get(&outcome.code) {
                let handle = self
                    .ledger
                    .track(outcome.code.as_str(), process.memory_required());
                self.handles.insert(outcome.code.clone(), handle);
            }
        }
        report
    }

    /// Apply the configured default policy
    pub fn run_default(&mut self) -> BatchReport {
        self.run(self.default_policy)
    }

    /// Unload a placed process: free its block and drop it from the queue
    ///
    /// Returns the number of units released.
    pub fn release(&mut self, code: &ProcessCode) -> SimResult<Size> {
        let released = self.memory.release(code)?;
        self.queue.remove(code)?;
        if let Some(handle) = self.handles.remove(code) {
            self.ledger.release(handle)?;
        }
        Ok(released)
    }

    /// Outstanding allocations, as reported when the session ends
    pub fn outstanding(&self) -> Vec<&LedgerEntry> {
        self.ledger.outstanding()
    }

    /// End the session, returning allocations that were never released
    pub fn finish(mut self) -> Vec<LedgerEntry> {
        self.handles.clear();
        self.ledger.release_all()
    }
}

/// Session behind an exclusive-access lock
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session
    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}
