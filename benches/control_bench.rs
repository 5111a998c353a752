//! Benchmark for rate controllers: debounce and throttle dispatch.
//!
//! Measures the per-call overhead of cadenza's rate controllers on virtual
//! time, so no real sleeping takes place.

use cadenza::control::{RateController, RateOptions, SystemClock, VirtualTime};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

fn summing(
    options: RateOptions,
    time: &VirtualTime,
) -> (Arc<AtomicU64>, RateController<u64, VirtualTime, VirtualTime>) {
    let total = Arc::new(AtomicU64::new(0));
    let sink = Arc::clone(&total);
    let controller = RateController::new(
        move |value: u64| {
            sink.fetch_add(value, Ordering::Relaxed);
        },
        options,
        time.clone(),
        time.clone(),
    )
    .unwrap();
    (total, controller)
}

// =============================================================================
// Debounce Benchmarks
// =============================================================================

fn benchmark_debounce(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("debounce");

    // Every call cancels and reschedules the trailing timer
    for burst in [10u64, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("burst_then_fire", burst),
            &burst,
            |bencher, &burst| {
                let time = VirtualTime::new();
                let (total, controller) = summing(RateOptions::debounce(100), &time);
                bencher.iter(|| {
                    for value in 0..burst {
                        controller.call(black_box(value));
                    }
                    time.advance(Duration::from_millis(100));
                    black_box(total.load(Ordering::Relaxed))
                });
            },
        );
    }

    // Leading edge fires inline, so this is the cheapest path
    group.bench_function("leading_only", |bencher| {
        let time = VirtualTime::new();
        let (total, controller) =
            summing(RateOptions::debounce(100).leading(true).trailing(false), &time);
        bencher.iter(|| {
            controller.call(black_box(1));
            time.advance(Duration::from_millis(100));
            black_box(total.load(Ordering::Relaxed))
        });
    });

    group.finish();
}

// =============================================================================
// Throttle Benchmarks
// =============================================================================

fn benchmark_throttle(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("throttle");

    // Calls inside an open window only record their arguments
    group.bench_function("deferred_call", |bencher| {
        let time = VirtualTime::new();
        let (_, controller) = summing(RateOptions::throttle(1_000_000), &time);
        controller.call(0);
        controller.call(0);
        bencher.iter(|| black_box(controller.call(black_box(1))));
    });

    // A steady stream with one call per millisecond
    for interval in [10i64, 100] {
        group.bench_with_input(
            BenchmarkId::new("steady_stream", interval),
            &interval,
            |bencher, &interval| {
                let time = VirtualTime::new();
                let (total, controller) = summing(RateOptions::throttle(interval), &time);
                bencher.iter(|| {
                    for value in 0..1000 {
                        controller.call(black_box(value));
                        time.advance(Duration::from_millis(1));
                    }
                    black_box(total.load(Ordering::Relaxed))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Baseline
// =============================================================================

fn benchmark_passthrough(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("passthrough");

    // Zero interval against a direct call of the same closure
    group.bench_function("zero_interval", |bencher| {
        let time = VirtualTime::new();
        let (total, controller) = summing(RateOptions::throttle(0), &time);
        bencher.iter(|| {
            controller.call(black_box(1));
            black_box(total.load(Ordering::Relaxed))
        });
    });

    group.bench_function("direct_call", |bencher| {
        let total = AtomicU64::new(0);
        let operation = |value: u64| {
            total.fetch_add(value, Ordering::Relaxed);
        };
        bencher.iter(|| {
            operation(black_box(1));
            black_box(total.load(Ordering::Relaxed))
        });
    });

    // Reading the clock is on the throttle path
    group.bench_function("system_clock_now", |bencher| {
        use cadenza::control::Clock;
        let clock = SystemClock::new();
        bencher.iter(|| black_box(clock.now()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_debounce,
    benchmark_throttle,
    benchmark_passthrough
);
criterion_main!(benches);
