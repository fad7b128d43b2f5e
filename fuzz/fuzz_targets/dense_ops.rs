#![no_main]
use libfuzzer_sys::{
  arbitrary::{Arbitrary, Unstructured},
  fuzz_target,
};
use sparse_sequence::SparseSequence;

// Operations with a sparse fast path must agree with the materialize, transform, re-sparsify round trip.
fuzz_target!(|bytes: &[u8]| {
  let mut u = Unstructured::new(bytes);
  let (sequence, tail) = match <(SparseSequence<Option<u8>>, Vec<Option<u8>>)>::arbitrary(&mut u) {
    Ok(input) => input,
    _ => return,
  };

  let mut extended = sequence.clone();
  extended.extend(tail.iter().copied());
  let mut dense = sequence.materialize();
  dense.extend(tail.iter().copied());
  assert_eq!(extended, SparseSequence::from_dense(dense));

  let mut reversed = sequence.clone();
  reversed.reverse();
  let mut dense = sequence.materialize();
  dense.reverse();
  assert_eq!(reversed, SparseSequence::from_dense(dense));

  let prepended = tail.clone() + sequence.clone();
  let mut dense = tail.clone();
  dense.extend(sequence.materialize());
  assert_eq!(prepended, SparseSequence::from_dense(dense));

  let mut sorted = sequence.clone();
  sorted.sort();
  let mut dense = sequence.materialize();
  dense.sort();
  assert_eq!(sorted.materialize(), SparseSequence::from_dense(dense).materialize());
});
