/*!
 * Descriptor Intake Tests
 */

use memsim::process::{load_file, load_str, ProcessError, ProcessQueue};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn descriptor_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_file_queues_in_order() {
    let file = descriptor_file("P1;0;100;5;\nP2;1;250;3;\nP3;4;60;2;\n");
    let mut queue = ProcessQueue::new();

    let report = load_file(file.path(), &mut queue).unwrap();

    let loaded: Vec<_> = report.loaded.iter().map(|c| c.as_str()).collect();
    assert_eq!(loaded, vec!["P1", "P2", "P3"]);
    assert!(report.rejected.is_empty());

    let sizes: Vec<_> = queue.iter().map(|p| p.memory_required()).collect();
    assert_eq!(sizes, vec![100, 250, 60]);
    assert_eq!(queue.pending_count(), 3);
}

#[test]
fn test_missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let mut queue = ProcessQueue::new();

    let result = load_file(dir.path().join("absent.txt"), &mut queue);

    assert!(matches!(result, Err(ProcessError::SourceUnreadable { .. })));
    assert!(queue.is_empty());
}

#[test]
fn test_malformed_source_rejected_whole() {
    let mut queue = ProcessQueue::new();

    // One record lacks its trailing delimiter
    let result = load_str("P1;0;100;5;\nP2;1;250;3\n", &mut queue);

    assert!(matches!(result, Err(ProcessError::MalformedSource(_))));
    assert!(queue.is_empty());
}

#[test]
fn test_duplicate_record_skipped() {
    let mut queue = ProcessQueue::new();

    let report = load_str("P1;0;100;5;\nP1;2;30;1;\n", &mut queue).unwrap();

    assert_eq!(report.loaded.len(), 1);
    assert_eq!(
        report.rejected,
        vec![ProcessError::DuplicateProcess("P1".parse().unwrap())]
    );
    assert_eq!(queue.get(&"P1".parse().unwrap()).unwrap().memory_required(), 100);
}

#[test]
fn test_second_load_appends() {
    let mut queue = ProcessQueue::new();
    load_str("A;0;10;1;\n", &mut queue).unwrap();
    load_str("B;1;20;1;\n", &mut queue).unwrap();

    let codes: Vec<_> = queue.iter().map(|p| p.code().to_string()).collect();
    assert_eq!(codes, vec!["A", "B"]);
}
