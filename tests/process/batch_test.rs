/*!
 * Batch Application Tests
 */

use memsim::memory::{BestFit, FirstFit, MemoryError, MemoryList};
use memsim::process::{load_str, ProcessQueue};
use memsim::{AllocationStatus, BlockView};
use pretty_assertions::assert_eq;

#[test]
fn test_first_fit_batch_layout() {
    let mut memory = MemoryList::new(1000);
    let mut queue = ProcessQueue::new();
    load_str("A;0;300;1;\nB;1;200;1;\nC;2;100;1;\n", &mut queue).unwrap();

    let report = queue.apply(&FirstFit, &mut memory);

    assert!(report.is_complete());
    let addresses: Vec<_> = report.outcomes.iter().map(|o| o.result.clone()).collect();
    assert_eq!(addresses, vec![Ok(0), Ok(300), Ok(500)]);
    assert_eq!(memory.render().last(), Some(&BlockView::free(600, 400)));
    assert!(queue
        .iter()
        .all(|p| p.allocation_status() == AllocationStatus::Allocated));
}

#[test]
fn test_best_fit_fills_released_hole() {
    let mut memory = MemoryList::new(1000);
    let mut queue = ProcessQueue::new();
    load_str("A;0;100;1;\nB;1;300;1;\nC;2;50;1;\n", &mut queue).unwrap();
    queue.apply(&FirstFit, &mut memory);

    // Free block of 100 at 0 and tail of 550 at 450
    memory.release(&"A".parse().unwrap()).unwrap();
    load_str("D;3;90;1;\n", &mut queue).unwrap();

    let report = queue.apply(&BestFit, &mut memory);
    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.outcomes[0].result, Ok(0));
    assert_eq!(memory.render()[1], BlockView::free(90, 10));
}

#[test]
fn test_failed_process_stays_pending() {
    let mut memory = MemoryList::new(200);
    let mut queue = ProcessQueue::new();
    load_str("HUGE;0;500;1;\nFITS;1;150;1;\nLATE;2;80;1;\n", &mut queue).unwrap();

    let report = queue.apply(&FirstFit, &mut memory);

    let failed: Vec<_> = report.failed().map(|o| o.code.as_str()).collect();
    assert_eq!(failed, vec!["HUGE", "LATE"]);
    assert!(matches!(
        report.outcomes[2].result,
        Err(MemoryError::NoSuitableBlock {
            required: 80,
            largest_free: 50,
            ..
        })
    ));
    assert_eq!(queue.pending_count(), 2);
    memory.check_invariants().unwrap();
}
