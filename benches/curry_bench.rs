//! Benchmark for placeholder-aware currying.
//!
//! Compares curried application against direct calls, and measures the cost
//! of placeholder resolution as the number of open positions grows.

use cadenza::compose::{Slot, curry, curry_variadic};
use cadenza::slots;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn sum3(first: i64, second: i64, third: i64) -> i64 {
    first + second + third
}

// =============================================================================
// Application Benchmarks
// =============================================================================

fn benchmark_curry_application(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry_application");

    // Baseline
    group.bench_function("direct_call", |bencher| {
        bencher.iter(|| black_box(sum3(black_box(1), black_box(2), black_box(3))));
    });

    group.bench_function("all_at_once", |bencher| {
        let curried = curry(sum3);
        bencher.iter(|| black_box(curried.apply(slots![black_box(1), 2, 3]).complete()));
    });

    group.bench_function("one_per_step", |bencher| {
        let curried = curry(sum3);
        bencher.iter(|| {
            let result = curried
                .apply(slots![black_box(1)])
                .apply(slots![2])
                .and_then(|step| step.apply(slots![3]))
                .ok()
                .and_then(|application| application.complete());
            black_box(result)
        });
    });

    // Reusing a stored partial application
    group.bench_function("reuse_partial", |bencher| {
        let base = curry(sum3).apply(slots![10]).partial();
        bencher.iter(|| {
            let result = base
                .as_ref()
                .and_then(|partial| partial.apply(slots![black_box(1), 2]).complete());
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Placeholder Benchmarks
// =============================================================================

fn benchmark_placeholder_resolution(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("placeholder_resolution");

    // Arity n, all positions left open in the first step, filled in the second
    for arity in [2usize, 8, 32] {
        group.bench_with_input(
            BenchmarkId::new("open_then_fill", arity),
            &arity,
            |bencher, &arity| {
                let Ok(curried) =
                    curry_variadic(arity, |values: Vec<i64>| values.iter().sum::<i64>())
                else {
                    return;
                };
                let open: Vec<Slot<i64>> = (0..arity).map(|_| Slot::Placeholder).collect();
                let partial = curried.apply(open).partial();
                let values: Vec<i64> = (0..arity as i64).collect();

                bencher.iter(|| {
                    let result = partial.as_ref().and_then(|partial| {
                        partial
                            .apply(values.iter().copied().map(Slot::Value))
                            .complete()
                    });
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_curry_application,
    benchmark_placeholder_resolution
);
criterion_main!(benches);
