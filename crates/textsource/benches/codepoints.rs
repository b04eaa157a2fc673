//! Benchmark – `textsource::TextSource` iteration per backing
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use textsource::{Segment, TextSource, Utf16Buffer};

/// Produce a deterministic UTF-16 payload of exactly `target_len` code units,
/// mixing ASCII, BMP and astral characters the way rendered UI text does.
fn make_payload(target_len: usize) -> Vec<u16> {
    const PATTERN: &str = "Hello, wörld! 漢字 😀 ";
    let mut units = Vec::with_capacity(target_len + 2);
    while units.len() < target_len {
        units.extend(PATTERN.encode_utf16());
    }
    units.truncate(target_len);
    units
}

/// Drain `source` and return a checksum so Criterion cannot optimise the
/// work away.
fn drain(mut source: TextSource<'_>) -> u64 {
    let mut sum = 0u64;
    while let Some(cp) = source.next_codepoint() {
        sum = sum.wrapping_add(u64::from(cp));
    }
    sum
}

fn bench_backings(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_source_backings");

    for &len in &[64usize, 4_096, 65_536] {
        let units = make_payload(len);
        let buffer = Utf16Buffer::from(units.clone());

        group.bench_with_input(BenchmarkId::new("text", len), &units, |b, u| {
            b.iter(|| drain(TextSource::new(black_box(u))));
        });
        group.bench_with_input(BenchmarkId::new("segment", len), &units, |b, u| {
            b.iter(|| drain(TextSource::from_segment(Segment::whole(black_box(u)))));
        });
        group.bench_with_input(BenchmarkId::new("buffer", len), &buffer, |b, buf| {
            b.iter(|| drain(TextSource::from_buffer(black_box(buf))));
        });
        group.bench_with_input(BenchmarkId::new("slice", len), &units, |b, u| {
            b.iter(|| drain(TextSource::from_slice(black_box(u))));
        });
        group.bench_with_input(BenchmarkId::new("calculate_length", len), &units, |b, u| {
            b.iter(|| TextSource::calculate_length(black_box(u)));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_backings }
criterion_main!(benches);
