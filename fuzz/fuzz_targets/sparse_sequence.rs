#![no_main]
use libfuzzer_sys::{
  arbitrary::{Arbitrary, Unstructured},
  fuzz_target,
};
use sparse_sequence::{Slot, SparseSequence};

fuzz_target!(|bytes: &[u8]| {
  let u = Unstructured::new(bytes);
  let mut sequence = match SparseSequence::<Option<u8>>::arbitrary_take_rest(u) {
    Ok(sequence) => sequence,
    _ => return,
  };

  assert_eq!(sequence, sequence);
  assert_eq!(sequence.len(), sequence.keys().next_back().map_or(0, |index| index + 1));

  let dense = sequence.materialize();
  assert_eq!(dense.len(), sequence.len());
  assert_eq!(sequence, dense);

  for (position, slot) in sequence.slots().enumerate() {
    assert_eq!(slot.is_present(), sequence.contains_index(position));

    if let Slot::Hole = slot {
      assert!(dense[position].is_none());
    }
  }

  let round_tripped = SparseSequence::from_dense(dense.clone());
  assert_eq!(round_tripped.materialize(), dense);

  let stored = sequence.stored_len();
  let mut popped = 0;

  while sequence.pop().is_ok() {
    popped += 1;
    assert!(sequence.len() <= dense.len());
  }

  assert_eq!(popped, stored);
  assert!(sequence.is_empty());
});
