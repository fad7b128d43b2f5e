use criterion::{criterion_group, Bencher, Criterion};
use sparse_sequence::SparseSequence;
use std::collections::BTreeMap;

const ELEMENT_COUNT: usize = 100000;

fn input_iter() -> impl Iterator<Item = (usize, usize)> {
  (0..ELEMENT_COUNT).map(|i| (i * 5, i))
}

fn sparse_sequence(b: &mut Bencher<'_>) {
  b.iter(|| {
    let mut sequence = SparseSequence::new();

    for (i, v) in input_iter() {
      sequence.insert(i, v);
    }
  });
}

fn btree_map(b: &mut Bencher<'_>) {
  b.iter(|| {
    let mut map = BTreeMap::new();

    for (i, v) in input_iter() {
      map.insert(i, v);
    }
  });
}

fn option_vec(b: &mut Bencher<'_>) {
  b.iter(|| {
    let mut vec = Vec::new();

    for (i, v) in input_iter() {
      if i >= vec.len() {
        vec.resize_with(i + 1, || None);
      }

      vec[i] = Some(v);
    }
  });
}

fn benchmark(c: &mut Criterion) {
  let mut group = c.benchmark_group("insert");

  group.bench_function("SparseSequence", |b| sparse_sequence(b));
  group.bench_function("BTreeMap", |b| btree_map(b));
  group.bench_function("Vec<Option<T>>", |b| option_vec(b));

  group.finish();
}

criterion_group!(benches, benchmark);
