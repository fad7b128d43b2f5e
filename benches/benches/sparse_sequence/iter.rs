use criterion::{criterion_group, Bencher, Criterion};
use sparse_sequence::{Slot, SparseSequence};

const ELEMENT_COUNT: usize = 100000;

fn input_iter() -> impl Iterator<Item = (usize, usize)> {
  (0..ELEMENT_COUNT).map(|i| (i * 5, i))
}

fn stored(b: &mut Bencher<'_>) {
  let sequence: SparseSequence<usize> = input_iter().collect();
  let mut sum = 0;

  b.iter(|| {
    for (_, value) in &sequence {
      sum += value;
    }
  });
}

fn slots(b: &mut Bencher<'_>) {
  let sequence: SparseSequence<usize> = input_iter().collect();
  let mut sum = 0;

  b.iter(|| {
    for slot in sequence.slots() {
      if let Slot::Present(value) = slot {
        sum += value;
      }
    }
  });
}

fn materialized(b: &mut Bencher<'_>) {
  let sequence: SparseSequence<Option<usize>> = input_iter().map(|(i, v)| (i, Some(v))).collect();
  let mut sum = 0;

  b.iter(|| {
    for value in sequence.materialize().into_iter().flatten() {
      sum += value;
    }
  });
}

fn benchmark(c: &mut Criterion) {
  let mut group = c.benchmark_group("iter");

  group.bench_function("stored", |b| stored(b));
  group.bench_function("slots", |b| slots(b));
  group.bench_function("materialized", |b| materialized(b));

  group.finish();
}

criterion_group!(benches, benchmark);
