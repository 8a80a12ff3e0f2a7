//! Benchmark for the synchronous container operators.
//!
//! Compares operator chains on `Optional` and `Outcome` with the equivalent
//! `Option` and `Result` chains, so any overhead of the algebra shows up as a
//! gap between the two lines of each group.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use railway::Error;
use railway::container::{Optional, Outcome};
use std::hint::black_box;

fn halve(n: i64) -> Optional<i64> {
    if n % 2 == 0 { Optional::Some(n / 2) } else { Optional::None }
}

fn checked_halve(n: i64) -> Outcome<i64> {
    if n % 2 == 0 { Outcome::Success(n / 2) } else { Outcome::fail("odd") }
}

// =============================================================================
// Optional Benchmarks
// =============================================================================

fn benchmark_optional_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_chain");

    for depth in [1, 8, 32] {
        group.bench_with_input(BenchmarkId::new("optional", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut optional = Optional::Some(black_box(1_i64 << 40));
                for _ in 0..depth {
                    optional = optional.then(halve).map(|x| x * 2).then(halve);
                }
                black_box(optional.value_or(0))
            });
        });

        group.bench_with_input(BenchmarkId::new("std_option", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut option = Some(black_box(1_i64 << 40));
                for _ in 0..depth {
                    option = option
                        .and_then(|n| halve(n).into_option())
                        .map(|x| x * 2)
                        .and_then(|n| halve(n).into_option());
                }
                black_box(option.unwrap_or(0))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Outcome Benchmarks
// =============================================================================

fn benchmark_outcome_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_chain");

    group.bench_function("success_path", |bencher| {
        bencher.iter(|| {
            let outcome = Outcome::<i64>::Success(black_box(1 << 20))
                .then(checked_halve)
                .and(Outcome::Success(black_box(3)), |a, b| a + b)
                .filter(|x| *x > 0, Error::new("negative"))
                .map(|x| x * 10);
            black_box(outcome.value_or(0))
        });
    });

    group.bench_function("failure_path", |bencher| {
        bencher.iter(|| {
            let outcome = Outcome::<i64>::Success(black_box(1))
                .then(checked_halve)
                .and(Outcome::Success(black_box(3)), |a, b| a + b)
                .filter(|x| *x > 0, Error::new("negative"))
                .map(|x| x * 10);
            black_box(outcome.value_or(0))
        });
    });

    group.bench_function("std_result_success_path", |bencher| {
        bencher.iter(|| {
            let result = Ok::<i64, Error>(black_box(1 << 20))
                .and_then(|n| checked_halve(n).into_result())
                .map(|x| x + black_box(3))
                .and_then(|x| if x > 0 { Ok(x) } else { Err(Error::new("negative")) })
                .map(|x| x * 10);
            black_box(result.unwrap_or(0))
        });
    });

    group.finish();
}

fn benchmark_outcome_narrowing(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_narrowing");

    group.bench_function("into_text", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<i64> = Outcome::fail(black_box("connection reset"));
            black_box(outcome.into_text())
        });
    });

    group.bench_function("then_into", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<i64, String> = Outcome::Failure(black_box("connection reset").to_string());
            let converted: Outcome<i64> = outcome.then_into(Outcome::Success);
            black_box(converted)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_optional_chain,
    benchmark_outcome_chain,
    benchmark_outcome_narrowing
);

criterion_main!(benches);
