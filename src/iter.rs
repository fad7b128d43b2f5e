//! Iterators over a `SparseSequence`.

use std::{
  collections::btree_map,
  iter::{FusedIterator, Peekable},
};

use crate::Slot;

/// An iterator over the stored `(index, &value)` pairs of a sparse sequence, in ascending index order.
///
/// Created by [`SparseSequence::iter`](crate::SparseSequence::iter).
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
  pub(crate) inner: btree_map::Iter<'a, usize, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = (usize, &'a T);

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next().map(|(&index, value)| (index, value))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.next_back().map(|(&index, value)| (index, value))
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the stored `(index, &mut value)` pairs of a sparse sequence, in ascending index order.
///
/// Created by [`SparseSequence::iter_mut`](crate::SparseSequence::iter_mut).
#[derive(Debug)]
pub struct IterMut<'a, T> {
  pub(crate) inner: btree_map::IterMut<'a, usize, T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
  type Item = (usize, &'a mut T);

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next().map(|(&index, value)| (index, value))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.inner.size_hint()
  }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.next_back().map(|(&index, value)| (index, value))
  }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An iterator over every position `0..len` of a sparse sequence, yielding a [`Slot`] for each.
///
/// Created by [`SparseSequence::slots`](crate::SparseSequence::slots).
#[derive(Clone, Debug)]
pub struct Slots<'a, T> {
  pub(crate) position: usize,
  pub(crate) len: usize,
  pub(crate) entries: Peekable<btree_map::Iter<'a, usize, T>>,
}

impl<'a, T> Iterator for Slots<'a, T> {
  type Item = Slot<&'a T>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.position == self.len {
      return None;
    }

    let position = self.position;
    self.position += 1;

    match self.entries.next_if(|&(&index, _)| index == position) {
      Some((_, value)) => Some(Slot::Present(value)),
      None => Some(Slot::Hole),
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.len - self.position;
    (remaining, Some(remaining))
  }
}

impl<T> ExactSizeIterator for Slots<'_, T> {}

impl<T> FusedIterator for Slots<'_, T> {}

#[cfg(test)]
mod test {
  use coverage_helper::test;

  use crate::SparseSequence;

  use super::*;

  #[test]
  fn test_iter_order() {
    let sequence = SparseSequence::from_iter([(5, 'f'), (0, 'a'), (2, 'c')]);
    assert!(sequence.iter().eq([(0, &'a'), (2, &'c'), (5, &'f')]));
  }

  #[test]
  fn test_iter_rev() {
    let sequence = SparseSequence::from_iter([(5, 'f'), (0, 'a'), (2, 'c')]);
    assert!(sequence.iter().rev().eq([(5, &'f'), (2, &'c'), (0, &'a')]));
  }

  #[test]
  fn test_iter_len() {
    let sequence = SparseSequence::from_iter([(5, 'f'), (0, 'a')]);
    assert_eq!(sequence.iter().len(), 2);
  }

  #[test]
  fn test_iter_mut() {
    let mut sequence = SparseSequence::from_iter([(1, 1), (4, 4)]);

    for (index, value) in sequence.iter_mut() {
      *value += index;
    }

    assert!(sequence.iter().eq([(1, &2), (4, &8)]));
  }

  #[test]
  fn test_iter_mut_rev() {
    let mut sequence = SparseSequence::from_iter([(1, 1), (4, 4)]);
    let (index, value) = sequence.iter_mut().next_back().unwrap();
    assert_eq!(index, 4);
    *value = 40;
    assert_eq!(sequence.get(4), Ok(&40));
  }

  #[test]
  fn test_slots() {
    let sequence = SparseSequence::from_iter([(1, 'b'), (3, 'd')]);
    assert!(sequence
      .slots()
      .eq([Slot::Hole, Slot::Present(&'b'), Slot::Hole, Slot::Present(&'d')]));
  }

  #[test]
  fn test_slots_empty() {
    let sequence: SparseSequence<u32> = SparseSequence::new();
    assert_eq!(sequence.slots().next(), None);
  }

  #[test]
  fn test_slots_len() {
    let sequence = SparseSequence::from_iter([(1, 'b'), (9, 'j')]);
    let mut slots = sequence.slots();
    assert_eq!(slots.len(), 10);
    let _ = slots.next();
    assert_eq!(slots.len(), 9);
  }

  #[test]
  fn test_slots_fused() {
    let sequence = SparseSequence::from_iter([(0, 'a')]);
    let mut slots = sequence.slots();
    assert_eq!(slots.next(), Some(Slot::Present(&'a')));
    assert_eq!(slots.next(), None);
    assert_eq!(slots.next(), None);
  }
}
