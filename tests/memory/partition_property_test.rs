/*!
 * Partition Property Tests
 * Random request sequences must keep the address space exactly partitioned
 */

use memsim::memory::{AllocationPolicy, MemoryList, PlacementPolicy};
use memsim::Process;
use proptest::prelude::*;

const TOTAL: usize = 1024;

fn policy_strategy() -> impl Strategy<Value = AllocationPolicy> {
    prop_oneof![Just(AllocationPolicy::FirstFit), Just(AllocationPolicy::BestFit)]
}

proptest! {
    #[test]
    fn prop_allocations_keep_partition(
        policy in policy_strategy(),
        sizes in prop::collection::vec(1usize..300, 1..40),
    ) {
        let mut memory = MemoryList::new(TOTAL);

        for (i, size) in sizes.iter().enumerate() {
            let mut process = Process::new(&format!("P{}", i), 0, *size, 1).unwrap();
            let before = memory.render();
            let result = policy.place(&mut memory, &mut process);

            if result.is_err() {
                prop_assert_eq!(memory.render(), before);
                prop_assert!(!process.is_allocated());
            }

            prop_assert!(memory.check_invariants().is_ok());
            let owned = memory
                .render()
                .iter()
                .filter(|b| b.owner.as_ref() == Some(process.code()))
                .count();
            prop_assert!(owned <= 1);

            // Re-placing the same code never claims a second block
            if process.is_allocated() {
                let mut twin = Process::new(process.code().as_str(), 0, 1, 1).unwrap();
                prop_assert!(policy.place(&mut memory, &mut twin).is_err());
            }

            let total: usize = memory.render().iter().map(|b| b.size).sum();
            prop_assert_eq!(total, TOTAL);
        }
    }

    #[test]
    fn prop_release_restores_partition(
        sizes in prop::collection::vec(1usize..200, 1..20),
        releases in prop::collection::vec(any::<prop::sample::Index>(), 0..20),
    ) {
        let mut memory = MemoryList::new(TOTAL);
        let mut placed = Vec::new();

        for (i, size) in sizes.iter().enumerate() {
            let mut process = Process::new(&format!("P{}", i), 0, *size, 1).unwrap();
            if AllocationPolicy::FirstFit.place(&mut memory, &mut process).is_ok() {
                placed.push(process.code().clone());
            }
        }

        for index in releases {
            if placed.is_empty() {
                break;
            }
            let code = placed.remove(index.index(placed.len()));
            prop_assert!(memory.release(&code).is_ok());
            prop_assert!(memory.check_invariants().is_ok());
        }

        // No two free blocks are ever adjacent after releases coalesce
        let blocks = memory.render();
        for pair in blocks.windows(2) {
            prop_assert!(!(pair[0].owner.is_none() && pair[1].owner.is_none()));
        }
    }
}
