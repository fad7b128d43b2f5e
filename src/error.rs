//! Defines the error type returned by fallible `SparseSequence` operations.

use std::{error, fmt};

/// The error type for fallible operations on a `SparseSequence`.
///
/// Failed operations never modify the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
  /// The index does not currently hold a stored value.
  ///
  /// Returned by operations that work on the sparse store directly, such as `get`, `delete` and `pop_at`. The index is
  /// signed because `pop_at` accepts negative indices. Unsigned indices above `isize::MAX` saturate to `isize::MAX`.
  IndexAbsent(isize),

  /// The index lies outside of `0..len` of the materialized view.
  IndexOutOfRange {
    /// The index that was requested.
    index: usize,
    /// The length of the sequence at the time of the request.
    len: usize,
  },

  /// No stored value (or hole, for searches over the materialized view) compares equal to the requested value.
  ValueNotFound,
}

impl Error {
  pub(crate) fn absent(index: usize) -> Self {
    Error::IndexAbsent(isize::try_from(index).unwrap_or(isize::MAX))
  }
}

impl fmt::Display for Error {
  fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::IndexAbsent(index) => write!(formatter, "index {index} does not hold a value"),
      Error::IndexOutOfRange { index, len } => {
        write!(formatter, "index {index} is out of range for a sequence of length {len}")
      }
      Error::ValueNotFound => formatter.write_str("value not found in sequence"),
    }
  }
}

impl error::Error for Error {}
