use criterion::{criterion_group, Bencher, Criterion};
use sparse_sequence::SparseSequence;

const ELEMENT_COUNT: usize = 100000;
const REMOVE_COUNT: usize = 20000;

fn input_iter() -> impl Iterator<Item = (usize, usize)> {
  (0..ELEMENT_COUNT).enumerate()
}

fn delete(b: &mut Bencher<'_>) {
  let mut sequence: SparseSequence<usize> = input_iter().collect();

  b.iter(|| {
    for i in 0..REMOVE_COUNT {
      let _ = sequence.delete(i * 5);
    }
  });
}

fn pop_at(b: &mut Bencher<'_>) {
  let mut sequence: SparseSequence<usize> = input_iter().collect();

  b.iter(|| {
    for _ in 0..REMOVE_COUNT {
      let _ = sequence.pop_at(-2);
    }
  });
}

fn remove_value(b: &mut Bencher<'_>) {
  let mut sequence: SparseSequence<usize> = input_iter().collect();

  b.iter(|| {
    for i in 0..REMOVE_COUNT {
      let _ = sequence.remove(&(i * 5));
    }
  });
}

fn benchmark(c: &mut Criterion) {
  let mut group = c.benchmark_group("remove");

  group.bench_function("delete", |b| delete(b));
  group.bench_function("pop_at", |b| pop_at(b));
  group.bench_function("remove", |b| remove_value(b));

  group.finish();
}

criterion_group!(benches, benchmark);
