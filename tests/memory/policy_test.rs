/*!
 * Placement Policy Tests
 * First-Fit and Best-Fit behaviour over explicit block layouts
 */

use memsim::memory::{
    AllocationPolicy, BestFit, BlockView, FirstFit, MemoryError, MemoryList, PlacementPolicy,
};
use memsim::{Process, ProcessCode};
use pretty_assertions::assert_eq;

fn code(code: &str) -> ProcessCode {
    ProcessCode::new(code).unwrap()
}

fn request(size: usize) -> Process {
    Process::new("P", 0, size, 1).unwrap()
}

#[test]
fn test_first_fit_splits_lowest_block() {
    let mut memory =
        MemoryList::from_blocks(vec![BlockView::free(0, 100), BlockView::free(100, 50)]).unwrap();

    let addr = FirstFit.place(&mut memory, &mut request(30)).unwrap();

    assert_eq!(addr, 0);
    assert_eq!(
        memory.render(),
        vec![
            BlockView::allocated(0, 30, code("P")),
            BlockView::free(30, 70),
            BlockView::free(100, 50),
        ]
    );
}

#[test]
fn test_best_fit_prefers_tightest_block() {
    let layout = vec![BlockView::free(0, 200), BlockView::free(200, 40)];

    let mut best = MemoryList::from_blocks(layout.clone()).unwrap();
    let addr = BestFit.place(&mut best, &mut request(30)).unwrap();
    assert_eq!(addr, 200);
    assert_eq!(
        best.render(),
        vec![
            BlockView::free(0, 200),
            BlockView::allocated(200, 30, code("P")),
            BlockView::free(230, 10),
        ]
    );

    let mut first = MemoryList::from_blocks(layout).unwrap();
    assert_eq!(FirstFit.place(&mut first, &mut request(30)).unwrap(), 0);
}

#[test]
fn test_fragmented_request_fails_without_change() {
    // 300 free units in three holes, none of them 500 wide
    let layout = vec![
        BlockView::free(0, 100),
        BlockView::allocated(100, 10, code("A")),
        BlockView::free(110, 100),
        BlockView::allocated(210, 10, code("B")),
        BlockView::free(220, 100),
    ];

    for policy in AllocationPolicy::ALL {
        let mut memory = MemoryList::from_blocks(layout.clone()).unwrap();
        let mut process = request(500);

        let err = policy.place(&mut memory, &mut process).unwrap_err();

        assert_eq!(
            err,
            MemoryError::NoSuitableBlock {
                code: code("P"),
                required: 500,
                largest_free: 100,
            }
        );
        assert_eq!(memory.render(), layout);
        assert!(!process.is_allocated());
    }
}

#[test]
fn test_exact_fit_allocates_in_place() {
    let mut memory =
        MemoryList::from_blocks(vec![BlockView::free(0, 64), BlockView::free(64, 30)]).unwrap();

    BestFit.place(&mut memory, &mut request(30)).unwrap();

    assert_eq!(memory.block_count(), 2);
    assert_eq!(memory.render()[1], BlockView::allocated(64, 30, code("P")));
}

#[test]
fn test_first_fit_is_deterministic() {
    let layout = vec![
        BlockView::free(0, 20),
        BlockView::free(20, 80),
        BlockView::free(100, 80),
    ];
    let choices: Vec<_> = (0..3)
        .map(|_| {
            let memory = MemoryList::from_blocks(layout.clone()).unwrap();
            let id = FirstFit.select(&memory, 50).unwrap();
            memory.block(id).unwrap().start_address()
        })
        .collect();
    assert_eq!(choices, vec![20, 20, 20]);
}

#[test]
fn test_render_is_idempotent() {
    let mut memory = MemoryList::new(1024);
    FirstFit.place(&mut memory, &mut request(100)).unwrap();

    let first = memory.render();
    let second = memory.render();
    assert_eq!(first, second);
}

#[test]
fn test_policies_as_trait_objects() {
    let policies: Vec<Box<dyn PlacementPolicy>> = vec![Box::new(FirstFit), Box::new(BestFit)];
    let names: Vec<_> = policies.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["First-Fit", "Best-Fit"]);
}
