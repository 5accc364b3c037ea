/*!
 * Process Intake
 * Load process descriptors from line-oriented text sources
 *
 * Each line is `code;arrival_time;memory_required;execution_time;` with the
 * trailing delimiter, so a well-formed source carries exactly four
 * delimiters per line and no blank lines. Sources failing that check are
 * rejected whole; individual bad records are skipped and reported.
 */

use super::queue::ProcessQueue;
use super::types::{Process, ProcessCode, ProcessError, ProcessResult};
use super::validation::parse_field;
use crate::core::limits::{DESCRIPTOR_DELIMITER, DESCRIPTOR_FIELDS};
use log::{info, warn};
use std::path::Path;

/// Outcome of loading a descriptor source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeReport {
    pub loaded: Vec<ProcessCode>,
    pub rejected: Vec<ProcessError>,
}

/// Check source-level shape: no blank lines, four delimiters per line
///
/// Returns the number of records.
pub fn validate_source(text: &str) -> ProcessResult<usize> {
    let mut lines = 0;
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            return Err(ProcessError::MalformedSource(format!(
                "line {} is blank",
                index + 1
            )));
        }
        lines += 1;
    }

    if lines == 0 {
        return Err(ProcessError::MalformedSource(
            "source contains no records".to_string(),
        ));
    }

    let delimiters = text.chars().filter(|&c| c == DESCRIPTOR_DELIMITER).count();
    let expected = DESCRIPTOR_FIELDS * lines;
    if delimiters != expected {
        return Err(ProcessError::MalformedSource(format!(
            "found {} delimiters, expected {} for {} line(s)",
            delimiters, expected, lines
        )));
    }

    Ok(lines)
}

/// Parse one descriptor record
///
/// The trailing delimiter is optional at this level.
pub fn parse_record(line: &str) -> ProcessResult<Process> {
    let line = line.trim();
    let line = line.strip_suffix(DESCRIPTOR_DELIMITER).unwrap_or(line);
    let fields: Vec<&str> = line.split(DESCRIPTOR_DELIMITER).collect();

    if fields.len() != DESCRIPTOR_FIELDS {
        return Err(ProcessError::InvalidProcessDescriptor(format!(
            "expected {} fields, found {}",
            DESCRIPTOR_FIELDS,
            fields.len()
        )));
    }

    let arrival_time = parse_field(fields[1], "arrival_time")?;
    let memory_required = parse_field(fields[2], "memory_required")?;
    let execution_time = parse_field(fields[3], "execution_time")?;
    Process::new(fields[0].trim(), arrival_time, memory_required, execution_time)
}

/// Validate `text` and queue every well-formed record
pub fn load_str(text: &str, queue: &mut ProcessQueue) -> ProcessResult<IntakeReport> {
    validate_source(text)?;

    let mut report = IntakeReport::default();
    for (index, line) in text.lines().enumerate() {
        let result = parse_record(line).and_then(|process| {
            let code = process.code().clone();
            queue.push(process).map(|_| code)
        });

        match result {
            Ok(code) => report.loaded.push(code),
            Err(e) => {
                let e = match e {
                    ProcessError::InvalidProcessDescriptor(reason) => {
                        ProcessError::InvalidProcessDescriptor(format!(
                            "line {}: {}",
                            index + 1,
                            reason
                        ))
                    }
                    other => other,
                };
                warn!("Skipping descriptor record: {}", e);
                report.rejected.push(e);
            }
        }
    }

    info!(
        "Process intake complete: {} loaded, {} rejected",
        report.loaded.len(),
        report.rejected.len()
    );
    Ok(report)
}

/// Read a descriptor file and queue its records
pub fn load_file(path: impl AsRef<Path>, queue: &mut ProcessQueue) -> ProcessResult<IntakeReport> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ProcessError::SourceUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!("Loading process descriptors from {}", path.display());
    load_str(&text, queue)
}
