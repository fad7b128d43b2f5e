use criterion::{criterion_group, Bencher, Criterion};
use sparse_sequence::SparseSequence;

const ELEMENT_COUNT: usize = 10000;

fn input() -> SparseSequence<Option<usize>> {
  (0..ELEMENT_COUNT).map(|i| (i * 7, Some(i))).collect()
}

fn tail() -> Vec<Option<usize>> {
  (0..ELEMENT_COUNT).map(|i| (i % 3 != 0).then_some(i)).collect()
}

fn extend_fast_path(b: &mut Bencher<'_>) {
  let tail = tail();

  b.iter(|| {
    let mut sequence = input();
    sequence.extend(tail.iter().copied());
  });
}

fn extend_round_trip(b: &mut Bencher<'_>) {
  let tail = tail();

  b.iter(|| {
    let mut dense = input().materialize();
    dense.extend(tail.iter().copied());
    SparseSequence::from_dense(dense)
  });
}

fn reverse_fast_path(b: &mut Bencher<'_>) {
  b.iter(|| {
    let mut sequence = input();
    sequence.reverse();
  });
}

fn reverse_round_trip(b: &mut Bencher<'_>) {
  b.iter(|| {
    let mut dense = input().materialize();
    dense.reverse();
    SparseSequence::from_dense(dense)
  });
}

fn sort(b: &mut Bencher<'_>) {
  b.iter(|| {
    let mut sequence = input();
    sequence.sort();
  });
}

fn benchmark(c: &mut Criterion) {
  let mut group = c.benchmark_group("dense ops");

  group.bench_function("extend fast path", |b| extend_fast_path(b));
  group.bench_function("extend round trip", |b| extend_round_trip(b));
  group.bench_function("reverse fast path", |b| reverse_fast_path(b));
  group.bench_function("reverse round trip", |b| reverse_round_trip(b));
  group.bench_function("sort", |b| sort(b));

  group.finish();
}

criterion_group!(benches, benchmark);
