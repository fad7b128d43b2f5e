//! A crate that implements a sequence accepting values at arbitrary, possibly non-contiguous, indices.
//!
//! Unpopulated indices are holes. They are never stored, and the length of a sequence is one more than its largest
//! populated index. See [`sparse_sequence`] for how holes interact with comparisons and dense operations.
//!
//! ```
//! # use sparse_sequence::SparseSequence;
//! #
//! let mut sequence: SparseSequence<i32> = (0..5).enumerate().collect();
//! sequence.insert(9, 9);
//! sequence.insert(8, 8);
//! sequence.insert(5, 5);
//!
//! assert_eq!(format!("{:?}", sequence), "SparseSequence([0, 1, 2, 3, 4, 5, None, None, 8, 9])");
//! assert_eq!(sequence.len(), 10);
//! assert_eq!(sequence.stored_len(), 8);
//! ```

#![cfg_attr(coverage_nightly, feature(no_coverage))]

#[cfg(feature = "arbitrary")]
pub mod arbitrary;

pub mod error;
pub mod hole;
pub mod iter;
pub mod sparse_sequence;

pub use crate::{
  error::Error,
  hole::{Hole, Slot},
  sparse_sequence::SparseSequence,
};
