//! Defines how holes are represented when a `SparseSequence` is viewed densely.
//!
//! A hole is an index with no stored value. The sparse store never holds an entry for it. Two views of a position
//! exist:
//!
//! - [`Slot`] keeps the distinction: a stored value is always `Slot::Present`, even when that value is itself a
//!   placeholder such as `None`.
//! - The materialized view renders holes as a placeholder value of the element type, given by [`Hole`]. In this view a
//!   hole and a stored placeholder are indistinguishable.

/// A type with this trait has a value that stands in for a hole in a materialized sequence.
///
/// `is_hole` must return `true` for the value returned by `hole`. Any value for which `is_hole` returns `true` becomes
/// a hole again when a dense sequence is re-sparsified.
pub trait Hole {
  /// Returns the placeholder value.
  fn hole() -> Self;

  /// Returns `true` if this value is the placeholder.
  fn is_hole(&self) -> bool;
}

impl<T> Hole for Option<T> {
  fn hole() -> Self {
    None
  }

  fn is_hole(&self) -> bool {
    self.is_none()
  }
}

/// The state of a single position of a sparse sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot<T> {
  /// The position holds a stored value.
  Present(T),
  /// The position has no stored value.
  Hole,
}

impl<T> Slot<T> {
  /// Returns `true` if the slot holds a stored value.
  #[must_use]
  pub fn is_present(&self) -> bool {
    matches!(self, Slot::Present(_))
  }

  /// Returns `true` if the slot is a hole.
  #[must_use]
  pub fn is_hole(&self) -> bool {
    matches!(self, Slot::Hole)
  }

  /// Converts from `&Slot<T>` to `Slot<&T>`.
  #[must_use]
  pub fn as_ref(&self) -> Slot<&T> {
    match self {
      Slot::Present(value) => Slot::Present(value),
      Slot::Hole => Slot::Hole,
    }
  }

  /// Returns the stored value, if any.
  #[must_use]
  pub fn present(self) -> Option<T> {
    match self {
      Slot::Present(value) => Some(value),
      Slot::Hole => None,
    }
  }

  /// Returns the stored value, or the placeholder for a hole.
  ///
  /// # Examples
  ///
  /// ```
  /// # use sparse_sequence::Slot;
  /// #
  /// assert_eq!(Slot::Present(Some(1)).unwrap_or_hole(), Some(1));
  /// assert_eq!(Slot::<Option<u32>>::Hole.unwrap_or_hole(), None);
  /// ```
  #[must_use]
  pub fn unwrap_or_hole(self) -> T
  where
    T: Hole,
  {
    match self {
      Slot::Present(value) => value,
      Slot::Hole => T::hole(),
    }
  }
}

impl<T: Clone> Slot<&T> {
  /// Maps a `Slot<&T>` to a `Slot<T>` by cloning the stored value.
  #[must_use]
  pub fn cloned(self) -> Slot<T> {
    match self {
      Slot::Present(value) => Slot::Present(value.clone()),
      Slot::Hole => Slot::Hole,
    }
  }
}

impl<T> From<Option<T>> for Slot<T> {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(value) => Slot::Present(value),
      None => Slot::Hole,
    }
  }
}
