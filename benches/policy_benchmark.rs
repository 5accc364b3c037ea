/*!
 * Placement Policy Benchmarks
 *
 * Compare First-Fit and Best-Fit over fragmented address spaces
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use memsim::memory::{AllocationPolicy, MemoryList, PlacementPolicy};
use memsim::process::ProcessQueue;
use memsim::Process;

/// Fill `total` with 10-unit processes, then release every other one
fn fragmented(total: usize) -> MemoryList {
    let mut memory = MemoryList::new(total);
    let mut codes = Vec::new();
    for i in 0..total / 10 {
        let mut process = Process::new(&format!("F{}", i), 0, 10, 1).unwrap();
        if AllocationPolicy::FirstFit.place(&mut memory, &mut process).is_ok() {
            codes.push(process.code().clone());
        }
    }
    for code in codes.iter().step_by(2) {
        memory.release(code).unwrap();
    }
    memory
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    let memory = fragmented(10_000);

    for policy in AllocationPolicy::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(policy.name()),
            &policy,
            |b, policy| b.iter(|| policy.select(black_box(&memory), black_box(8))),
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_apply");

    for policy in AllocationPolicy::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(policy.name()),
            &policy,
            |b, policy| {
                b.iter(|| {
                    let mut memory = fragmented(4_000);
                    let mut queue = ProcessQueue::new();
                    for i in 0..100 {
                        let size = 1 + (i * 7) % 10;
                        queue
                            .push(Process::new(&format!("P{}", i), i as u32, size, 1).unwrap())
                            .unwrap();
                    }
                    black_box(queue.apply(policy, &mut memory))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_select, bench_batch);
criterion_main!(benches);
