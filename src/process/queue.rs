/*!
 * Process Queue
 * Arrival-ordered requests and batch application of a placement policy
 */

use super::types::{Process, ProcessCode, ProcessError, ProcessResult};
use crate::core::types::Address;
use crate::memory::{MemoryError, MemoryList, PlacementPolicy};
use log::{info, warn};

/// Result of applying a policy to one pending process
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub code: ProcessCode,
    pub result: Result<Address, MemoryError>,
}

impl BatchOutcome {
    pub fn is_placed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-process outcomes of one batch run, in queue order
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub policy: &'static str,
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    pub fn placed(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.outcomes.iter().filter(|o| o.is_placed())
    }

    pub fn failed(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.outcomes.iter().filter(|o| !o.is_placed())
    }

    /// Whether every attempted process was placed
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(BatchOutcome::is_placed)
    }
}

/// Queue of processes in arrival (insertion) order
#[derive(Debug, Clone, Default)]
pub struct ProcessQueue {
    processes: Vec<Process>,
}

impl ProcessQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a process; codes must be unique within the queue
    pub fn push(&mut self, process: Process) -> ProcessResult<()> {
        if self.contains(process.code()) {
            warn!("Rejected duplicate process {}", process.code());
            return Err(ProcessError::DuplicateProcess(process.code().clone()));
        }
        info!(
            "Queued process {} ({} units, arrival {}, execution {})",
            process.code(),
            process.memory_required(),
            process.arrival_time(),
            process.execution_time()
        );
        self.processes.push(process);
        Ok(())
    }

    /// Remove a process from the queue
    pub fn remove(&mut self, code: &ProcessCode) -> ProcessResult<Process> {
        let index = self
            .processes
            .iter()
            .position(|p| p.code() == code)
            .ok_or_else(|| ProcessError::ProcessNotFound(code.clone()))?;
        Ok(self.processes.remove(index))
    }

    pub fn contains(&self, code: &ProcessCode) -> bool {
        self.processes.iter().any(|p| p.code() == code)
    }

    pub fn get(&self, code: &ProcessCode) -> Option<&Process> {
        self.processes.iter().find(|p| p.code() == code)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    pub fn as_slice(&self) -> &[Process] {
        &self.processes
    }

    pub fn pending(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter().filter(|p| !p.is_allocated())
    }

    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Apply `policy` to every pending process in queue order
    ///
    /// A process that cannot be placed stays pending and its failure is
    /// recorded; the batch always continues with the next process.
    pub fn apply<P>(&mut self, policy: &P, memory: &mut MemoryList) -> BatchReport
    where
        P: PlacementPolicy + ?Sized,
    {
        let mut outcomes = Vec::new();

        for process in self.processes.iter_mut().filter(|p| !p.is_allocated()) {
            let result = policy.place(memory, process);
            if let Err(ref e) = result {
                warn!("{}: {}", policy.name(), e);
            }
            outcomes.push(BatchOutcome {
                code: process.code().clone(),
                result,
            });
        }

        let report = BatchReport {
            policy: policy.name(),
            outcomes,
        };
        info!(
            "{} batch complete: {} placed, {} still pending",
            report.policy,
            report.placed().count(),
            report.failed().count()
        );
        report
    }
}

impl<'a> IntoIterator for &'a ProcessQueue {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
