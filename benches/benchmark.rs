//! Benchmarks for cc_brand performance testing.
//!
//! Run with: cargo bench

use cc_brand::{
    batch::{classify_batch, count_identified},
    classify, identify_brand, luhn, sanitize,
    stream::ClassifyExt,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Test card numbers
const VISA_16: &str = "4532123456788909";
const VISA_16_FORMATTED: &str = "4532-1234-5678-8909";
const MASTERCARD: &str = "5412345678901232";
const AMEX: &str = "371234567890120";
const ELO_LONG: &str = "4011000000000000003";
const INVALID: &str = "4532123456788902";

const VISA_DIGITS: [u8; 16] = [4, 5, 3, 2, 1, 2, 3, 4, 5, 6, 7, 8, 8, 9, 0, 9];

/// Benchmark single card classification
fn bench_single_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_classification");

    group.bench_function("visa_16_raw", |b| b.iter(|| classify(black_box(VISA_16))));

    group.bench_function("visa_16_formatted", |b| {
        b.iter(|| classify(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("mastercard", |b| b.iter(|| classify(black_box(MASTERCARD))));

    group.bench_function("amex_15", |b| b.iter(|| classify(black_box(AMEX))));

    // Last rule in the table
    group.bench_function("elo_19", |b| b.iter(|| classify(black_box(ELO_LONG))));

    group.bench_function("checksum_failure", |b| {
        b.iter(|| classify(black_box(INVALID)))
    });

    group.finish();
}

/// Benchmark the pipeline stages separately
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");

    group.bench_function("sanitize", |b| {
        b.iter(|| sanitize(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("luhn_digits", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("luhn_str", |b| {
        b.iter(|| luhn::is_luhn_valid(black_box(VISA_16)))
    });

    group.bench_function("identify_brand", |b| {
        b.iter(|| identify_brand(black_box(VISA_16)))
    });

    group.finish();
}

/// Benchmark batch classification with various sizes
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_classification");

    for size in [10, 100, 1000, 10000].iter() {
        let cards: Vec<&str> = (0..*size)
            .map(|i| match i % 4 {
                0 => VISA_16,
                1 => MASTERCARD,
                2 => AMEX,
                _ => INVALID,
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("classify_batch", size), &cards, |b, cards| {
            b.iter(|| classify_batch(black_box(cards)))
        });

        group.bench_with_input(
            BenchmarkId::new("count_identified", size),
            &cards,
            |b, cards| b.iter(|| count_identified(black_box(cards))),
        );

        group.bench_with_input(BenchmarkId::new("stream", size), &cards, |b, cards| {
            b.iter(|| {
                cards
                    .iter()
                    .copied()
                    .classify_cards()
                    .filter(|c| c.is_identified())
                    .count()
            })
        });
    }

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_parallel(c: &mut Criterion) {
    use cc_brand::batch::{classify_batch_parallel, count_identified_parallel};

    let mut group = c.benchmark_group("parallel");

    for size in [1000, 10000, 100000].iter() {
        let cards: Vec<String> = (0..*size).map(|_| VISA_16.to_string()).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::new("classify_parallel", size),
            &cards,
            |b, cards| b.iter(|| classify_batch_parallel(black_box(cards))),
        );

        group.bench_with_input(
            BenchmarkId::new("count_parallel", size),
            &cards,
            |b, cards| b.iter(|| count_identified_parallel(black_box(cards))),
        );
    }

    group.finish();
}

#[cfg(not(feature = "parallel"))]
fn bench_parallel(_c: &mut Criterion) {
    // Parallel benchmarks disabled - enable 'parallel' feature
}

criterion_group!(
    benches,
    bench_single_classification,
    bench_stages,
    bench_batch,
    bench_parallel,
);

criterion_main!(benches);
