/*!
 * Process Types
 * Common types for allocation requests
 */

use super::validation::validate_code;
use crate::core::types::{Size, Tick};
use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Process operation result
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Process errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("Invalid process descriptor: {0}")]
    InvalidProcessDescriptor(String),

    #[error("Process {0} is already queued")]
    DuplicateProcess(ProcessCode),

    #[error("Process not found: {0}")]
    ProcessNotFound(ProcessCode),

    #[error("Malformed descriptor source: {0}")]
    MalformedSource(String),

    #[error("Failed to read descriptor source {path}: {reason}")]
    SourceUnreadable { path: PathBuf, reason: String },
}

/// Bounded process identifier (1 to 9 visible characters)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProcessCode(SmartString);

impl ProcessCode {
    pub fn new(code: &str) -> ProcessResult<Self> {
        validate_code(code)?;
        Ok(Self(SmartString::from(code)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ProcessCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ProcessCode {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProcessCode {
    type Error = ProcessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ProcessCode> for String {
    fn from(code: ProcessCode) -> Self {
        code.0.into()
    }
}

impl AsRef<str> for ProcessCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Allocation state of a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStatus {
    /// Waiting for a block
    Pending,
    /// Holds a block
    Allocated,
}

impl std::fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self {
            AllocationStatus::Pending => "pending",
            AllocationStatus::Allocated => "allocated",
        };
        f.pad(label)
    }
}

/// A request for contiguous memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    code: ProcessCode,
    arrival_time: Tick,
    memory_required: Size,
    execution_time: Tick,
    allocation_status: AllocationStatus,
}

impl Process {
    /// Create a pending process, validating its code and memory requirement
    pub fn new(
        code: &str,
        arrival_time: Tick,
        memory_required: Size,
        execution_time: Tick,
    ) -> ProcessResult<Self> {
        let code = ProcessCode::new(code)?;
        if memory_required == 0 {
            return Err(ProcessError::InvalidProcessDescriptor(format!(
                "process {} must require at least one unit of memory",
                code
            )));
        }
        Ok(Self {
            code,
            arrival_time,
            memory_required,
            execution_time,
            allocation_status: AllocationStatus::Pending,
        })
    }

    pub fn code(&self) -> &ProcessCode {
        &self.code
    }

    pub fn arrival_time(&self) -> Tick {
        self.arrival_time
    }

    pub fn memory_required(&self) -> Size {
        self.memory_required
    }

    pub fn execution_time(&self) -> Tick {
        self.execution_time
    }

    pub fn allocation_status(&self) -> AllocationStatus {
        self.allocation_status
    }

    pub fn is_allocated(&self) -> bool {
        self.allocation_status == AllocationStatus::Allocated
    }

    pub(crate) fn mark_allocated(&mut self) {
        self.allocation_status = AllocationStatus::Allocated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_process_starts_pending() {
        let process = Process::new("P1", 3, 120, 7).unwrap();
        assert_eq!(process.code().as_str(), "P1");
        assert_eq!(process.arrival_time(), 3);
        assert_eq!(process.memory_required(), 120);
        assert_eq!(process.execution_time(), 7);
        assert_eq!(process.allocation_status(), AllocationStatus::Pending);
    }

    #[test]
    fn test_zero_memory_rejected() {
        assert!(matches!(
            Process::new("P1", 0, 0, 1),
            Err(ProcessError::InvalidProcessDescriptor(_))
        ));
    }

    #[test]
    fn test_code_length_ceiling() {
        assert!(ProcessCode::new("ABCDEFGHI").is_ok());
        assert!(matches!(
            ProcessCode::new("ABCDEFGHIJ"),
            Err(ProcessError::InvalidProcessDescriptor(_))
        ));
        assert!(ProcessCode::new("").is_err());
    }

    #[test]
    fn test_process_serialization() {
        let process = Process::new("JOB7", 1, 64, 2).unwrap();
        let json = serde_json::to_string(&process).unwrap();
        assert!(json.contains("\"code\":\"JOB7\""));
        let deserialized: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(process, deserialized);

        let bad = json.replace("JOB7", "TOO-LONG-CODE");
        assert!(serde_json::from_str::<Process>(&bad).is_err());
    }
}
