/*!
 * Process Descriptor Validation
 * Field-level checks for process codes and numeric fields
 */

use super::types::{ProcessError, ProcessResult};
use crate::core::limits::{DESCRIPTOR_DELIMITER, PROCESS_CODE_MAX_LEN};

/// Validate a process code
pub(super) fn validate_code(code: &str) -> ProcessResult<()> {
    if code.is_empty() {
        return Err(ProcessError::InvalidProcessDescriptor(
            "process code cannot be empty".to_string(),
        ));
    }

    let length = code.chars().count();
    if length > PROCESS_CODE_MAX_LEN {
        return Err(ProcessError::InvalidProcessDescriptor(format!(
            "process code {:?} has {} characters, limit is {}",
            code, length, PROCESS_CODE_MAX_LEN
        )));
    }

    if code
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || c == DESCRIPTOR_DELIMITER)
    {
        return Err(ProcessError::InvalidProcessDescriptor(format!(
            "process code {:?} contains whitespace, control or delimiter characters",
            code
        )));
    }

    Ok(())
}

/// Parse a non-negative integer field
pub(super) fn parse_field<T>(field: &str, name: &str) -> ProcessResult<T>
where
    T: std::str::FromStr,
{
    field.trim().parse::<T>().map_err(|_| {
        ProcessError::InvalidProcessDescriptor(format!(
            "{} must be a non-negative integer, got {:?}",
            name,
            field.trim()
        ))
    })
}
