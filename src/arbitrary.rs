//! `Arbitrary` implementations for the types in this crate.

use arbitrary::{Arbitrary, Unstructured};

use crate::SparseSequence;

impl<'a, T: Arbitrary<'a>> Arbitrary<'a> for SparseSequence<T> {
  fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
    // Get the number of positions we should consider populating.
    let len = u.arbitrary_len::<T>()?;
    let mut sequence = SparseSequence::new();

    for _ in 0..len {
      if *u.choose(&[false, true])? {
        // Spread indices past `len` so that long runs of holes show up.
        let index = u.int_in_range(0..=(len * 4))?;
        let value = T::arbitrary(u)?;
        sequence.set(index, value);
      }
    }

    Ok(sequence)
  }
}

#[cfg(test)]
mod test {
  use coverage_helper::test;

  use super::*;

  #[test]
  fn test_sparse_sequence_arbitrary() {
    let bytes = (0..255).collect::<Vec<u8>>().repeat(100);
    let mut u = Unstructured::new(&bytes);
    let sequence: SparseSequence<usize> = SparseSequence::arbitrary(&mut u).unwrap();
    assert!(!sequence.is_empty());
    assert!(sequence.len() >= sequence.stored_len());
  }

  #[test]
  fn test_sparse_sequence_arbitrary_empty_input() {
    let mut u = Unstructured::new(&[]);
    let sequence: SparseSequence<usize> = SparseSequence::arbitrary(&mut u).unwrap();
    assert!(sequence.is_empty());
  }
}
