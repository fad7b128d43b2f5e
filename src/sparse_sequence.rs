//! A sequence that accepts values at arbitrary indices, written `SparseSequence<T>`.
//!
//! Values are kept in a sparse store mapping each populated index to its value. Indices without a value are *holes*.
//! Holes are never stored; absence of an index is the only way a hole is represented.
//!
//! The length of a sparse sequence is one more than its largest populated index, not the number of stored values.
//! The *materialized* view is the dense sequence of that length with every hole replaced by the [`Hole`] placeholder
//! of the element type.
//!
//! # Comparisons
//!
//! Comparing two sparse sequences compares their sparse stores. Comparing a sparse sequence with a slice or `Vec`
//! compares the materialized view. A hole and a stored placeholder value therefore differ in the first case and match
//! in the second:
//!
//! ```
//! # use sparse_sequence::SparseSequence;
//! #
//! let holey = SparseSequence::from_iter([(0, Some(1)), (2, Some(3))]);
//! let stored = SparseSequence::from_iter([(0, Some(1)), (1, None), (2, Some(3))]);
//!
//! assert_ne!(holey, stored);
//! assert_eq!(holey.materialize(), stored.materialize());
//! assert_eq!(holey, stored.materialize());
//! ```
//!
//! # Dense operations
//!
//! Operations that are defined over the dense ordering (sorting, reversing, repetition, and extending or
//! concatenating with a plain sequence) behave as if the sequence were materialized, transformed, and re-sparsified.
//! Re-sparsifying turns every placeholder into a hole, so these operations drop stored placeholder values.

use std::{
  cmp::Ordering,
  collections::BTreeMap,
  fmt,
  hash::{Hash, Hasher},
  mem,
  num::NonZeroUsize,
  ops::{Add, AddAssign, Bound, Index, IndexMut, Mul, MulAssign, RangeBounds},
};

use crate::{
  iter::{Iter, IterMut, Slots},
  Error, Hole, Slot,
};

/// A sequence that accepts values at arbitrary indices, written `SparseSequence<T>`.
///
/// For operation complexity notes, *n* is the number of stored values and *m* is the length of the sequence. Note
/// that *m* will always be at least as large as *n*.
pub struct SparseSequence<T> {
  values: BTreeMap<usize, T>,
}

impl<T> SparseSequence<T> {
  /// Constructs a new, empty `SparseSequence<T>`.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let sequence: SparseSequence<u32> = SparseSequence::new();
  /// assert!(sequence.is_empty());
  /// ```
  #[must_use]
  pub const fn new() -> Self {
    Self {
      values: BTreeMap::new(),
    }
  }

  /// Constructs a `SparseSequence<T>` from a dense sequence.
  ///
  /// Every value is stored at its position, except placeholder values, whose positions become holes.
  ///
  /// This operation is *O*(*m* log *n*).
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let sequence = SparseSequence::from_dense([Some('a'), None, Some('c')]);
  ///
  /// assert_eq!(sequence.len(), 3);
  /// assert_eq!(sequence.stored_len(), 2);
  /// assert!(!sequence.contains_index(1));
  /// ```
  pub fn from_dense<Iter: IntoIterator<Item = T>>(iter: Iter) -> Self
  where
    T: Hole,
  {
    iter
      .into_iter()
      .enumerate()
      .filter(|(_, value)| !value.is_hole())
      .collect()
  }

  /// Returns the length of the sequence: one more than the largest populated index, or 0 if nothing is stored.
  ///
  /// This operation is *O*(log *n*).
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let mut sequence = SparseSequence::new();
  /// assert_eq!(sequence.len(), 0);
  ///
  /// sequence.set(9, 'j');
  /// assert_eq!(sequence.len(), 10);
  /// ```
  #[must_use]
  pub fn len(&self) -> usize {
    // An empty store has no largest index to measure from.
    self.values.last_key_value().map_or(0, |(&index, _)| index + 1)
  }

  /// Returns the number of stored values. Holes are not counted.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let sequence = SparseSequence::from_iter([(0, 'a'), (9, 'j')]);
  /// assert_eq!(sequence.stored_len(), 2);
  /// assert_eq!(sequence.len(), 10);
  /// ```
  #[must_use]
  pub fn stored_len(&self) -> usize {
    self.values.len()
  }

  /// Returns `true` if the sequence contains no values.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// Returns a reference to the value stored at `index`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::IndexAbsent`] if `index` is a hole or lies beyond the end of the sequence. An `index` above
  /// `isize::MAX` is reported as `isize::MAX`.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::{Error, SparseSequence};
  /// #
  /// let sequence = SparseSequence::from_iter([(0, 'a'), (2, 'c')]);
  ///
  /// assert_eq!(sequence.get(2), Ok(&'c'));
  /// assert_eq!(sequence.get(1), Err(Error::IndexAbsent(1)));
  /// ```
  pub fn get(&self, index: usize) -> Result<&T, Error> {
    self.values.get(&index).ok_or_else(|| Error::absent(index))
  }

  /// Returns a mutable reference to the value stored at `index`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::IndexAbsent`] if `index` is a hole or lies beyond the end of the sequence. An `index` above
  /// `isize::MAX` is reported as `isize::MAX`.
  pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
    self.values.get_mut(&index).ok_or_else(|| Error::absent(index))
  }

  /// Returns the value at `index` of the materialized view: the stored value, or the placeholder for a hole.
  ///
  /// # Errors
  ///
  /// Returns [`Error::IndexOutOfRange`] if `index` is not less than the length of the sequence.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::{Error, SparseSequence};
  /// #
  /// let sequence = SparseSequence::from_iter([(0, Some('a')), (2, Some('c'))]);
  ///
  /// assert_eq!(sequence.get_materialized(0), Ok(Some('a')));
  /// assert_eq!(sequence.get_materialized(1), Ok(None));
  /// assert_eq!(sequence.get_materialized(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
  /// ```
  pub fn get_materialized(&self, index: usize) -> Result<T, Error>
  where
    T: Hole + Clone,
  {
    let len = self.len();

    if index >= len {
      return Err(Error::IndexOutOfRange { index, len });
    }

    Ok(self.values.get(&index).cloned().unwrap_or_else(T::hole))
  }

  /// Returns the state of the position `index`, or `None` if `index` is not less than the length of the sequence.
  ///
  /// Unlike [`get_materialized`], this tells a stored placeholder value apart from a hole.
  ///
  /// [`get_materialized`]: SparseSequence::get_materialized
  #[must_use]
  pub fn slot(&self, index: usize) -> Option<Slot<&T>> {
    if index >= self.len() {
      return None;
    }

    Some(self.values.get(&index).into())
  }

  /// Stores `value` at `index`, returning the value previously stored there.
  ///
  /// `index` may lie far beyond the end of the sequence. The positions in between become holes.
  ///
  /// # Panics
  ///
  /// Panics if `index` is `usize::MAX`, as the length of the sequence would not be representable.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let mut sequence = SparseSequence::new();
  ///
  /// assert_eq!(sequence.set(4, 'e'), None);
  /// assert_eq!(sequence.set(4, 'E'), Some('e'));
  /// assert_eq!(sequence.len(), 5);
  /// ```
  pub fn set(&mut self, index: usize, value: T) -> Option<T> {
    assert!(index < usize::MAX, "sequence length overflows `usize`");
    self.values.insert(index, value)
  }

  /// Stores `value` at `index`. An alias of [`set`].
  ///
  /// No values are shifted: inserting at a populated index overwrites it, and every other index keeps its value.
  ///
  /// # Panics
  ///
  /// Panics if `index` is `usize::MAX`.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let mut sequence = SparseSequence::from_iter([(0, 'a'), (1, 'b')]);
  /// sequence.insert(0, 'z');
  ///
  /// assert!(sequence.iter().eq([(0, &'z'), (1, &'b')]));
  /// ```
  ///
  /// [`set`]: SparseSequence::set
  pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
    self.set(index, value)
  }

  /// Stores `value` at the index equal to the current length of the sequence.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let mut sequence = SparseSequence::from_iter([(2, 'c')]);
  /// sequence.append('d');
  ///
  /// assert_eq!(sequence.get(3), Ok(&'d'));
  /// ```
  pub fn append(&mut self, value: T) {
    let index = self.len();
    self.set(index, value);
  }

  /// Removes and returns the value stored at `index`, leaving a hole.
  ///
  /// No values are shifted.
  ///
  /// # Errors
  ///
  /// Returns [`Error::IndexAbsent`] if `index` does not hold a value. An `index` above `isize::MAX` is reported as
  /// `isize::MAX`.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let mut sequence = SparseSequence::from_iter([(0, 'a'), (1, 'b'), (2, 'c')]);
  ///
  /// assert_eq!(sequence.delete(1), Ok('b'));
  /// assert_eq!(sequence.len(), 3);
  /// assert!(sequence.delete(1).is_err());
  /// ```
  pub fn delete(&mut self, index: usize) -> Result<T, Error> {
    self.values.remove(&index).ok_or_else(|| Error::absent(index))
  }

  /// Removes and returns the value stored at the largest populated index.
  ///
  /// # Errors
  ///
  /// Returns [`Error::IndexAbsent`] if the sequence is empty.
  pub fn pop(&mut self) -> Result<T, Error> {
    self.pop_at(-1)
  }

  /// Removes and returns a stored value.
  ///
  /// A non-negative `index` names the index directly. A negative `index` counts back through the populated indices,
  /// skipping holes: `-1` is the largest populated index, `-2` the second largest, and so on.
  ///
  /// # Errors
  ///
  /// Returns [`Error::IndexAbsent`] if `index` does not resolve to a populated index.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let mut sequence = SparseSequence::from_iter([(0, 'a'), (1, 'b'), (5, 'f')]);
  ///
  /// assert_eq!(sequence.pop_at(-2), Ok('b'));
  /// assert_eq!(sequence.pop_at(0), Ok('a'));
  /// assert!(sequence.pop_at(-2).is_err());
  /// ```
  pub fn pop_at(&mut self, index: isize) -> Result<T, Error> {
    let key = match usize::try_from(index) {
      Ok(key) => Some(key),
      Err(_) => self.keys().rev().nth(index.unsigned_abs() - 1),
    };

    key
      .and_then(|key| self.values.remove(&key))
      .ok_or(Error::IndexAbsent(index))
  }

  /// Removes and returns the first stored value, by ascending index, that equals `value`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::ValueNotFound`] if no stored value equals `value`. Holes never match.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::{Error, SparseSequence};
  /// #
  /// let mut sequence = SparseSequence::from_iter([(0, 'x'), (3, 'y'), (7, 'x')]);
  ///
  /// assert_eq!(sequence.remove(&'x'), Ok('x'));
  /// assert!(sequence.iter().eq([(3, &'y'), (7, &'x')]));
  /// assert_eq!(sequence.remove(&'z'), Err(Error::ValueNotFound));
  /// ```
  pub fn remove(&mut self, value: &T) -> Result<T, Error>
  where
    T: PartialEq,
  {
    // Find the index first; the store is only touched once a match is known.
    let index = self
      .iter()
      .find(|&(_, stored)| stored == value)
      .map(|(index, _)| index);

    index
      .and_then(|index| self.values.remove(&index))
      .ok_or(Error::ValueNotFound)
  }

  /// Clears the sequence, removing all values and holes.
  ///
  /// This operation is *O*(*n*).
  pub fn clear(&mut self) {
    self.values.clear();
  }

  /// Returns `true` if any stored value equals `value`. Holes are never matched.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let sequence = SparseSequence::from_iter([(0, Some(1)), (2, Some(3))]);
  ///
  /// assert!(sequence.contains(&Some(3)));
  /// assert!(!sequence.contains(&None));
  /// ```
  #[must_use]
  pub fn contains(&self, value: &T) -> bool
  where
    T: PartialEq,
  {
    self.values.values().any(|stored| stored == value)
  }

  /// Returns `true` if `index` holds a stored value.
  #[must_use]
  pub fn contains_index(&self, index: usize) -> bool {
    self.values.contains_key(&index)
  }

  /// Returns the number of stored values equal to `value`. Holes are never counted.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let sequence = SparseSequence::from_iter([(0, 'x'), (3, 'y'), (7, 'x')]);
  /// assert_eq!(sequence.count(&'x'), 2);
  /// ```
  #[must_use]
  pub fn count(&self, value: &T) -> usize
  where
    T: PartialEq,
  {
    self.values.values().filter(|&stored| stored == value).count()
  }

  /// Returns the position of the first occurrence of `value` in the materialized view.
  ///
  /// # Errors
  ///
  /// Returns [`Error::ValueNotFound`] if `value` does not occur.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let sequence = SparseSequence::from_iter([(0, Some('a')), (2, Some('c'))]);
  ///
  /// assert_eq!(sequence.index_of(&Some('c')), Ok(2));
  /// assert_eq!(sequence.index_of(&None), Ok(1));
  /// ```
  pub fn index_of(&self, value: &T) -> Result<usize, Error>
  where
    T: Hole + PartialEq,
  {
    self.index_of_in(value, ..)
  }

  /// Returns the position of the first occurrence of `value` in the given range of the materialized view.
  ///
  /// The end of the range is clamped to the length of the sequence. A hole matches only if `value` is a placeholder.
  ///
  /// # Errors
  ///
  /// Returns [`Error::ValueNotFound`] if `value` does not occur within the range.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::{Error, SparseSequence};
  /// #
  /// let sequence = SparseSequence::from_dense([Some(1), Some(2), Some(1)]);
  ///
  /// assert_eq!(sequence.index_of_in(&Some(1), 1..), Ok(2));
  /// assert_eq!(sequence.index_of_in(&Some(1), 1..2), Err(Error::ValueNotFound));
  /// ```
  pub fn index_of_in<R: RangeBounds<usize>>(&self, value: &T, range: R) -> Result<usize, Error>
  where
    T: Hole + PartialEq,
  {
    let (start, end) = window(&range, self.len());

    self
      .slots()
      .enumerate()
      .skip(start)
      .take(end - start)
      .find(|(_, slot)| match slot {
        Slot::Present(stored) => *stored == value,
        Slot::Hole => value.is_hole(),
      })
      .map(|(position, _)| position)
      .ok_or(Error::ValueNotFound)
  }

  /// Returns an iterator over the stored `(index, &value)` pairs, in ascending index order.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let sequence = SparseSequence::from_iter([(4, 'e'), (1, 'b')]);
  ///
  /// let mut iterator = sequence.iter();
  ///
  /// assert_eq!(iterator.next(), Some((1, &'b')));
  /// assert_eq!(iterator.next(), Some((4, &'e')));
  /// assert_eq!(iterator.next(), None);
  /// ```
  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      inner: self.values.iter(),
    }
  }

  /// Returns an iterator that allows modifying each stored value.
  pub fn iter_mut(&mut self) -> IterMut<'_, T> {
    IterMut {
      inner: self.values.iter_mut(),
    }
  }

  /// Returns an iterator over the populated indices, in ascending order.
  pub fn keys(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + '_ {
    self.values.keys().copied()
  }

  /// Returns an iterator over the stored values, in ascending index order.
  pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
    self.values.values()
  }

  /// Returns the stored entry with the smallest index.
  #[must_use]
  pub fn first(&self) -> Option<(usize, &T)> {
    self.values.first_key_value().map(|(&index, value)| (index, value))
  }

  /// Returns the stored entry with the largest index. Its index is always `len() - 1`.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let sequence = SparseSequence::from_iter([(3, 'd'), (8, 'i')]);
  ///
  /// assert_eq!(sequence.first(), Some((3, &'d')));
  /// assert_eq!(sequence.last(), Some((8, &'i')));
  /// ```
  #[must_use]
  pub fn last(&self) -> Option<(usize, &T)> {
    self.values.last_key_value().map(|(&index, value)| (index, value))
  }

  /// Returns an iterator yielding the [`Slot`] of every position `0..len`.
  ///
  /// Consuming the iterator is an *O*(*m*) operation.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::{Slot, SparseSequence};
  /// #
  /// let sequence = SparseSequence::from_iter([(0, None), (2, Some(3))]);
  ///
  /// assert!(sequence.slots().eq([Slot::Present(&None), Slot::Hole, Slot::Present(&Some(3))]));
  /// ```
  pub fn slots(&self) -> Slots<'_, T> {
    Slots {
      position: 0,
      len: self.len(),
      entries: self.values.iter().peekable(),
    }
  }

  /// Returns the materialized view: a `Vec` of length [`len`] holding the stored values, with placeholders in the
  /// holes.
  ///
  /// This operation is *O*(*m*).
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let sequence = SparseSequence::from_iter([(1, Some('b')), (3, Some('d'))]);
  /// assert_eq!(sequence.materialize(), vec![None, Some('b'), None, Some('d')]);
  /// ```
  ///
  /// [`len`]: SparseSequence::len
  #[must_use]
  pub fn materialize(&self) -> Vec<T>
  where
    T: Hole + Clone,
  {
    self.slots().map(|slot| slot.cloned().unwrap_or_hole()).collect()
  }

  /// Converts the sequence into its materialized view without cloning.
  #[must_use]
  pub fn into_materialized(self) -> Vec<T>
  where
    T: Hole,
  {
    let mut dense = Vec::with_capacity(self.len());

    for (index, value) in self.values {
      dense.resize_with(index, T::hole);
      dense.push(value);
    }

    dense
  }

  /// Returns the values in `range`, renumbered so that the start of the range becomes index 0.
  ///
  /// The end of the range is clamped to the length of the sequence. Holes stay holes.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let sequence = SparseSequence::from_iter([(1, 'b'), (3, 'd'), (6, 'g')]);
  /// let slice = sequence.slice(2..);
  ///
  /// assert!(slice.iter().eq([(1, &'d'), (4, &'g')]));
  /// ```
  #[must_use]
  pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Self
  where
    T: Clone,
  {
    self.slice_step(range, NonZeroUsize::MIN)
  }

  /// Returns every `step`-th position of `range`, renumbered from 0.
  ///
  /// Position `start + k * step` of the sequence becomes index `k` of the result.
  ///
  /// # Examples
  ///
  /// ```
  /// # use std::num::NonZeroUsize;
  /// #
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let sequence = SparseSequence::from_iter([(0, 'a'), (1, 'b'), (4, 'e'), (6, 'g')]);
  /// let step = NonZeroUsize::new(2).unwrap();
  ///
  /// assert!(sequence.slice_step(.., step).iter().eq([(0, &'a'), (2, &'e'), (3, &'g')]));
  /// ```
  #[must_use]
  pub fn slice_step<R: RangeBounds<usize>>(&self, range: R, step: NonZeroUsize) -> Self
  where
    T: Clone,
  {
    let (start, end) = window(&range, self.len());
    let step = step.get();

    self
      .values
      .range(start..end)
      .filter(|&(&index, _)| (index - start) % step == 0)
      .map(|(&index, value)| ((index - start) / step, value.clone()))
      .collect()
  }

  /// Appends the stored values of `other`, shifted by the length of `self`.
  ///
  /// Holes of `other` stay holes. The indices of `self` are untouched.
  ///
  /// # Panics
  ///
  /// Panics if the combined length overflows `usize`. The sequence is left unchanged.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let mut sequence = SparseSequence::from_iter([(0, 'a'), (2, 'c')]);
  /// sequence.extend_sparse(&SparseSequence::from_iter([(0, 'x'), (3, 'y')]));
  ///
  /// assert!(sequence.iter().eq([(0, &'a'), (2, &'c'), (3, &'x'), (6, &'y')]));
  /// ```
  pub fn extend_sparse(&mut self, other: &Self)
  where
    T: Clone,
  {
    let offset = self.len();
    grown_len(offset, other.len());

    self
      .values
      .extend(other.iter().map(|(index, value)| (offset + index, value.clone())));
  }

  /// Appends a dense sequence after the materialized view of `self`.
  ///
  /// Placeholder values of `other` become holes. This is the slice counterpart of the [`Extend`] implementation.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let mut sequence = SparseSequence::from_iter([(1, Some('b'))]);
  /// sequence.extend_from_slice(&[None, Some('d')]);
  ///
  /// assert_eq!(sequence.materialize(), vec![None, Some('b'), None, Some('d')]);
  /// ```
  pub fn extend_from_slice(&mut self, other: &[T])
  where
    T: Hole + Clone,
  {
    self.extend(other.iter().cloned());
  }

  /// Returns the sequence repeated `count` times, as the materialized view repeated and re-sparsified.
  ///
  /// Holes repeat positionally.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let sequence = SparseSequence::from_iter([(1, Some('b'))]);
  /// assert_eq!(sequence.repeat(3).materialize(), vec![None, Some('b'), None, Some('b'), None, Some('b')]);
  /// ```
  #[must_use]
  pub fn repeat(&self, count: usize) -> Self
  where
    T: Hole + Clone,
  {
    let dense = self.materialize();

    #[cfg(feature = "tracing")]
    tracing::trace!(len = dense.len(), count, "repeating materialized sequence");

    Self::from_dense((0..count).flat_map(|_| dense.iter().cloned()))
  }

  /// Reverses the materialized view in place.
  ///
  /// Holes move with their positions. A hole at index 0 becomes trailing and so shortens the sequence.
  ///
  /// This operation is *O*(*n* log *n*).
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let mut sequence = SparseSequence::from_dense([Some(1), None, Some(3), Some(4)]);
  /// sequence.reverse();
  ///
  /// assert_eq!(sequence.materialize(), vec![Some(4), Some(3), None, Some(1)]);
  /// ```
  pub fn reverse(&mut self)
  where
    T: Hole,
  {
    let len = self.len();
    self.drop_placeholders();

    self.values = mem::take(&mut self.values)
      .into_iter()
      .map(|(index, value)| (len - 1 - index, value))
      .collect();
  }

  /// Sorts the materialized view, holes included, and re-sparsifies it.
  ///
  /// Holes take part in the sort as placeholder values. For `Option` they order before every stored value. The sort
  /// is stable.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let mut sequence = SparseSequence::from_iter([(0, Some(3)), (2, Some(1))]);
  /// sequence.sort();
  ///
  /// assert_eq!(sequence.materialize(), vec![None, Some(1), Some(3)]);
  /// ```
  pub fn sort(&mut self)
  where
    T: Hole + Ord,
  {
    self.sort_by(T::cmp);
  }

  /// Sorts the materialized view with a comparator function, and re-sparsifies it.
  ///
  /// The comparator sees holes as placeholder values.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let mut sequence = SparseSequence::from_iter([(0, Some(1)), (2, Some(3))]);
  /// sequence.sort_by(|a, b| b.cmp(a));
  ///
  /// assert_eq!(sequence.materialize(), vec![Some(3), Some(1)]);
  /// ```
  pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, mut compare: F)
  where
    T: Hole,
  {
    // The store is rebuilt only after the sort has finished.
    let order = {
      let hole = T::hole();
      let dense: Vec<&T> = baked(self, &hole).collect();

      #[cfg(feature = "tracing")]
      tracing::trace!(len = dense.len(), "sorting materialized sequence");

      let mut order: Vec<usize> = (0..dense.len()).collect();
      order.sort_by(|&a, &b| compare(dense[a], dense[b]));
      order
    };

    let mut values = mem::take(&mut self.values);
    self.values = order
      .into_iter()
      .enumerate()
      .filter_map(|(position, source)| {
        values
          .remove(&source)
          .filter(|value| !value.is_hole())
          .map(|value| (position, value))
      })
      .collect();
  }

  /// Sorts the materialized view with a key extraction function, and re-sparsifies it.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::SparseSequence;
  /// #
  /// let mut sequence = SparseSequence::from_iter([(0, Some(-4)), (1, Some(2)), (3, Some(-1))]);
  /// sequence.sort_by_key(|value| value.map(i32::abs));
  ///
  /// assert_eq!(sequence.materialize(), vec![None, Some(-1), Some(2), Some(-4)]);
  /// ```
  pub fn sort_by_key<K: Ord, F: FnMut(&T) -> K>(&mut self, mut f: F)
  where
    T: Hole,
  {
    self.sort_by(|a, b| f(a).cmp(&f(b)));
  }

  /// Turns stored placeholder values into holes, as a round trip through the materialized view would.
  fn drop_placeholders(&mut self)
  where
    T: Hole,
  {
    self.values.retain(|_, value| !value.is_hole());
  }
}

/// Returns the length of `len` positions followed by `extra` more.
///
/// Panics if it overflows `usize`. A length of `usize::MAX` is the largest allowed, as `set` never stores at
/// `usize::MAX`.
fn grown_len(len: usize, extra: usize) -> usize {
  match len.checked_add(extra) {
    Some(len) => len,
    None => panic!("sequence length overflows `usize`"),
  }
}

/// Resolves `range` to a `start..end` window of a sequence of length `len`, clamping both ends.
fn window<R: RangeBounds<usize>>(range: &R, len: usize) -> (usize, usize) {
  let end = match range.end_bound() {
    Bound::Included(&end) => end.saturating_add(1),
    Bound::Excluded(&end) => end,
    Bound::Unbounded => len,
  }
  .min(len);

  let start = match range.start_bound() {
    Bound::Included(&start) => start,
    Bound::Excluded(&start) => start.saturating_add(1),
    Bound::Unbounded => 0,
  }
  .min(end);

  (start, end)
}

impl<T: Clone> Clone for SparseSequence<T> {
  fn clone(&self) -> Self {
    SparseSequence {
      values: self.values.clone(),
    }
  }
}

impl<T> Default for SparseSequence<T> {
  fn default() -> Self {
    Self::new()
  }
}

/// Renders the materialized view, with holes shown as `None`.
impl<T: fmt::Debug> fmt::Debug for SparseSequence<T> {
  fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    struct DebugSlot<'a, T>(Slot<&'a T>);

    impl<T: fmt::Debug> fmt::Debug for DebugSlot<'_, T> {
      fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
          Slot::Present(value) => fmt::Debug::fmt(value, formatter),
          Slot::Hole => formatter.write_str("None"),
        }
      }
    }

    formatter.write_str("SparseSequence(")?;
    formatter.debug_list().entries(self.slots().map(DebugSlot)).finish()?;
    formatter.write_str(")")
  }
}

/// Appends a dense sequence after the materialized view, turning placeholder values into holes.
///
/// Stored placeholder values of `self` become holes too, matching a materialize and re-sparsify round trip.
///
/// Panics if the combined length overflows `usize`, leaving the sequence unchanged.
impl<T: Hole> Extend<T> for SparseSequence<T> {
  fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
    let offset = self.len();
    let dense: Vec<T> = iter.into_iter().collect();
    grown_len(offset, dense.len());

    #[cfg(feature = "tracing")]
    tracing::trace!(offset, len = dense.len(), "extending with dense sequence");

    self.drop_placeholders();
    self.values.extend(
      dense
        .into_iter()
        .enumerate()
        .filter(|(_, value)| !value.is_hole())
        .map(|(position, value)| (offset + position, value)),
    );
  }
}

impl<T: Hole> From<Vec<T>> for SparseSequence<T> {
  fn from(dense: Vec<T>) -> Self {
    Self::from_dense(dense)
  }
}

impl<T: Hole, const N: usize> From<[T; N]> for SparseSequence<T> {
  fn from(dense: [T; N]) -> Self {
    Self::from_dense(dense)
  }
}

impl<T: Hole> From<SparseSequence<T>> for Vec<T> {
  fn from(sequence: SparseSequence<T>) -> Self {
    sequence.into_materialized()
  }
}

impl<T, const N: usize> From<[(usize, T); N]> for SparseSequence<T> {
  fn from(pairs: [(usize, T); N]) -> Self {
    pairs.into_iter().collect()
  }
}

/// Collects `(index, value)` pairs. Later pairs overwrite earlier ones with the same index.
impl<T> FromIterator<(usize, T)> for SparseSequence<T> {
  fn from_iter<Iter: IntoIterator<Item = (usize, T)>>(iter: Iter) -> Self {
    let mut sequence = SparseSequence::new();

    for (index, value) in iter {
      sequence.set(index, value);
    }

    sequence
  }
}

impl<T: Hash> Hash for SparseSequence<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.values.hash(state);
  }
}

impl<T> Index<usize> for SparseSequence<T> {
  type Output = T;

  fn index(&self, index: usize) -> &Self::Output {
    match self.values.get(&index) {
      Some(value) => value,
      None => panic!("index {index} does not hold a value"),
    }
  }
}

impl<T> IndexMut<usize> for SparseSequence<T> {
  fn index_mut(&mut self, index: usize) -> &mut Self::Output {
    match self.values.get_mut(&index) {
      Some(value) => value,
      None => panic!("index {index} does not hold a value"),
    }
  }
}

impl<T> IntoIterator for SparseSequence<T> {
  type Item = (usize, T);
  type IntoIter = std::collections::btree_map::IntoIter<usize, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.values.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a SparseSequence<T> {
  type Item = (usize, &'a T);
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T> IntoIterator for &'a mut SparseSequence<T> {
  type Item = (usize, &'a mut T);
  type IntoIter = IterMut<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

// Two sparse sequences compare by their stores, index by index, so a hole and a stored placeholder differ.

impl<T: PartialEq> PartialEq for SparseSequence<T> {
  fn eq(&self, other: &Self) -> bool {
    self.values == other.values
  }
}

impl<T: Eq> Eq for SparseSequence<T> {}

impl<T: PartialOrd> PartialOrd for SparseSequence<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.values.partial_cmp(&other.values)
  }
}

impl<T: Ord> Ord for SparseSequence<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.values.cmp(&other.values)
  }
}

// Against a plain sequence, the materialized view is compared instead.

impl<T: Hole + PartialEq> PartialEq<[T]> for SparseSequence<T> {
  fn eq(&self, other: &[T]) -> bool {
    let hole = T::hole();
    self.len() == other.len() && baked(self, &hole).eq(other.iter())
  }
}

impl<T: Hole + PartialEq> PartialEq<Vec<T>> for SparseSequence<T> {
  fn eq(&self, other: &Vec<T>) -> bool {
    <Self as PartialEq<[T]>>::eq(self, other)
  }
}

impl<T: Hole + PartialEq, const N: usize> PartialEq<[T; N]> for SparseSequence<T> {
  fn eq(&self, other: &[T; N]) -> bool {
    <Self as PartialEq<[T]>>::eq(self, other)
  }
}

impl<T: Hole + PartialEq> PartialEq<SparseSequence<T>> for Vec<T> {
  fn eq(&self, other: &SparseSequence<T>) -> bool {
    <SparseSequence<T> as PartialEq<[T]>>::eq(other, self)
  }
}

impl<T: Hole + PartialOrd> PartialOrd<[T]> for SparseSequence<T> {
  fn partial_cmp(&self, other: &[T]) -> Option<Ordering> {
    let hole = T::hole();
    baked(self, &hole).partial_cmp(other.iter())
  }
}

impl<T: Hole + PartialOrd> PartialOrd<Vec<T>> for SparseSequence<T> {
  fn partial_cmp(&self, other: &Vec<T>) -> Option<Ordering> {
    <Self as PartialOrd<[T]>>::partial_cmp(self, other)
  }
}

impl<T: Hole + PartialOrd, const N: usize> PartialOrd<[T; N]> for SparseSequence<T> {
  fn partial_cmp(&self, other: &[T; N]) -> Option<Ordering> {
    <Self as PartialOrd<[T]>>::partial_cmp(self, other)
  }
}

impl<T: Hole + PartialOrd> PartialOrd<SparseSequence<T>> for Vec<T> {
  fn partial_cmp(&self, other: &SparseSequence<T>) -> Option<Ordering> {
    <SparseSequence<T> as PartialOrd<[T]>>::partial_cmp(other, self).map(Ordering::reverse)
  }
}

/// Iterates the materialized view by reference, lending `hole` for every hole.
fn baked<'a, T>(sequence: &'a SparseSequence<T>, hole: &'a T) -> impl Iterator<Item = &'a T> {
  sequence.slots().map(move |slot| match slot {
    Slot::Present(value) => value,
    Slot::Hole => hole,
  })
}

// Adding two sparse sequences overlays their stores without shifting; the right-hand side wins on shared indices.

impl<T> AddAssign for SparseSequence<T> {
  fn add_assign(&mut self, rhs: Self) {
    self.values.extend(rhs.values);
  }
}

impl<T: Clone> AddAssign<&SparseSequence<T>> for SparseSequence<T> {
  fn add_assign(&mut self, rhs: &SparseSequence<T>) {
    self
      .values
      .extend(rhs.iter().map(|(index, value)| (index, value.clone())));
  }
}

impl<T> Add for SparseSequence<T> {
  type Output = SparseSequence<T>;

  fn add(mut self, rhs: Self) -> Self::Output {
    self += rhs;
    self
  }
}

impl<T: Clone> Add for &SparseSequence<T> {
  type Output = SparseSequence<T>;

  fn add(self, rhs: Self) -> Self::Output {
    let mut sequence = self.clone();
    sequence += rhs;
    sequence
  }
}

// Adding a plain sequence concatenates it with the materialized view, shifting it past the end.

impl<T: Hole> AddAssign<Vec<T>> for SparseSequence<T> {
  fn add_assign(&mut self, rhs: Vec<T>) {
    self.extend(rhs);
  }
}

impl<T: Hole + Clone> AddAssign<&[T]> for SparseSequence<T> {
  fn add_assign(&mut self, rhs: &[T]) {
    self.extend_from_slice(rhs);
  }
}

impl<T: Hole> Add<Vec<T>> for SparseSequence<T> {
  type Output = SparseSequence<T>;

  fn add(mut self, rhs: Vec<T>) -> Self::Output {
    self += rhs;
    self
  }
}

impl<T: Hole + Clone> Add<&[T]> for SparseSequence<T> {
  type Output = SparseSequence<T>;

  fn add(mut self, rhs: &[T]) -> Self::Output {
    self += rhs;
    self
  }
}

/// Prepends the plain sequence: the sparse sequence is shifted past the end of `self`.
///
/// Panics if the combined length overflows `usize`.
impl<T: Hole> Add<SparseSequence<T>> for Vec<T> {
  type Output = SparseSequence<T>;

  fn add(self, mut rhs: SparseSequence<T>) -> Self::Output {
    let offset = self.len();
    grown_len(offset, rhs.len());
    rhs.drop_placeholders();

    #[cfg(feature = "tracing")]
    tracing::trace!(offset, "prepending dense sequence");

    let mut sequence = SparseSequence::from_dense(self);
    sequence
      .values
      .extend(rhs.values.into_iter().map(|(index, value)| (offset + index, value)));
    sequence
  }
}

impl<T: Hole + Clone> Mul<usize> for &SparseSequence<T> {
  type Output = SparseSequence<T>;

  fn mul(self, rhs: usize) -> Self::Output {
    self.repeat(rhs)
  }
}

impl<T: Hole + Clone> Mul<usize> for SparseSequence<T> {
  type Output = SparseSequence<T>;

  fn mul(self, rhs: usize) -> Self::Output {
    self.repeat(rhs)
  }
}

impl<T: Hole + Clone> Mul<SparseSequence<T>> for usize {
  type Output = SparseSequence<T>;

  fn mul(self, rhs: SparseSequence<T>) -> Self::Output {
    rhs.repeat(self)
  }
}

impl<T: Hole + Clone> MulAssign<usize> for SparseSequence<T> {
  fn mul_assign(&mut self, rhs: usize) {
    *self = self.repeat(rhs);
  }
}
