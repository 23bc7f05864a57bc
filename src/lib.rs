//! Two-way merge of ordered sequences.
//!
//! ```
//! use std::collections::{BTreeSet, VecDeque};
//! use sequenced_merge::merge;
//!
//! let mut a = BTreeSet::from([2, 4, 6, 7]);
//! let mut b = VecDeque::from([1, 2, 9, 11, 11, 13]);
//! let merged = merge(&mut a, &mut b);
//! assert_eq!(Vec::from(merged), vec![1, 2, 2, 4, 6, 7, 9, 11, 11, 13]);
//! ```

pub mod merge;
pub mod messages;
pub mod reader;
pub mod sequence;
pub mod service;
pub mod writer;

pub use merge::{merge, merge_by, merge_by_key, merge_into};
pub use sequence::{is_non_decreasing, OrderedSequence};
