/*!
 * Paging Tests
 * Fixed-size frame pool behaviour
 */

use memsim::paging::{pages_needed, PageTable, PagingError};
use pretty_assertions::assert_eq;

#[test]
fn test_pages_needed_rounds_up() {
    assert_eq!(pages_needed(1), 1);
    assert_eq!(pages_needed(100), 1);
    assert_eq!(pages_needed(101), 2);
    assert_eq!(pages_needed(2500), 25);
}

#[test]
fn test_load_takes_front_frames() {
    let mut table = PageTable::new();

    let pages = table.load("editor", 250).unwrap().pages.clone();

    assert_eq!(pages, vec![1, 2, 3]);
    assert_eq!(table.free_count(), 22);
    assert_eq!(table.free_frames().next(), Some(4));
}

#[test]
fn test_unload_returns_frames_to_front() {
    let mut table = PageTable::new();
    table.load("a", 200).unwrap();
    table.load("b", 100).unwrap();

    let program = table.unload("a").unwrap();
    assert_eq!(program.pages, vec![1, 2]);

    let front: Vec<_> = table.free_frames().take(3).collect();
    assert_eq!(front, vec![2, 1, 4]);

    // The next load reuses the returned frames first
    assert_eq!(table.load("c", 150).unwrap().pages, vec![2, 1]);
}

#[test]
fn test_insufficient_pages_leaves_table_unchanged() {
    let mut table = PageTable::with_pages(4);
    table.load("small", 100).unwrap();

    let err = table.load("large", 400).unwrap_err();

    assert_eq!(
        err,
        PagingError::InsufficientPages {
            name: "large".to_string(),
            needed: 4,
            available: 3,
        }
    );
    assert_eq!(table.programs().len(), 1);
    assert_eq!(table.free_count(), 3);
}

#[test]
fn test_frame_map_and_listing_order() {
    let mut table = PageTable::with_pages(5);
    table.load("first", 100).unwrap();
    table.load("second", 200).unwrap();

    assert_eq!(table.frame_map(), vec![true, true, true, false, false]);
    let names: Vec<_> = table.programs().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["second", "first"]);

    assert!(matches!(
        table.unload("missing"),
        Err(PagingError::ProgramNotFound(_))
    ));
}
