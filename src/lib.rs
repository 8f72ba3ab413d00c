//! # seqops
//!
//! `seqops` is a small library of reusable algorithms over ordered sequences:
//! stable sorting, binary search with insertion points, reversal, shuffling,
//! swapping, filling, rotation, copying, replacement and min/max reduction.
//!
//! The algorithms are written against the [`OrderedSequence`] trait rather
//! than a concrete container, so the same call works on a `Vec`, a slice,
//! a `VecDeque`, a `LinkedList`, or your own storage.
//!
//! ## Key Features
//!
//! - **Container Agnostic**: Implement [`OrderedSequence`] once and every algorithm applies.
//! - **Adaptive Strategy**: Each call chooses between positional access and front/back
//!   cursors, based on the sequence length and whether it reports random access. Linked
//!   storage therefore stays linear (or O(n log n) for sorting) instead of going quadratic.
//! - **Typed Failures**: Every fallible call returns a [`SeqError`]; nothing panics on
//!   bad indices or read-only storage.
//! - **Pluggable Randomness**: [`shuffle_with`] takes any [`rand::Rng`]; [`shuffle`] uses a
//!   lazily seeded process-wide generator.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use seqops::prelude::*;
//!
//! let mut data = vec!["dog", "cat"];
//! sort(&mut data).unwrap();
//! assert_eq!(data, vec!["cat", "dog"]);
//!
//! assert_eq!(binary_search(&data, &"cat"), Ok(0));
//! assert_eq!(binary_search(&data, &"fish"), Err(2));
//!
//! reverse(&mut data).unwrap();
//! assert_eq!(data, vec!["dog", "cat"]);
//!
//! fill(&mut data, "tiger").unwrap();
//! assert_eq!(data, vec!["tiger", "tiger"]);
//! ```
//!
//! ### Linked Storage
//!
//! ```rust
//! use std::collections::LinkedList;
//! use seqops::prelude::*;
//!
//! let mut list: LinkedList<u32> = (0..100).rev().collect();
//! sort(&mut list).unwrap();
//! assert!(list.iter().zip(list.iter().skip(1)).all(|(a, b)| a <= b));
//!
//! rotate(&mut list, 10).unwrap();
//! assert_eq!(list.front(), Some(&90));
//! ```
//!
//! ### Failures
//!
//! ```rust
//! use seqops::{min, SeqError};
//!
//! let empty: Vec<i32> = vec![];
//! assert_eq!(min(&empty), Err(SeqError::EmptyInput));
//!
//! let mut data = vec![1, 2];
//! assert_eq!(
//!     seqops::swap(&mut data, 0, 2),
//!     Err(SeqError::IndexOutOfBounds { index: 2, len: 2 })
//! );
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Sort**: O(n log n) comparisons, stable. Non-contiguous storage costs one
//!   pointer per element of temporary memory.
//! - **Binary Search**: O(log n) comparisons; O(n) traversal on large linked storage.
//! - **Everything Else**: Linear.

pub mod algo;
pub mod core;
pub mod error;
pub mod random;
pub use crate::algo::{
    binary_search, binary_search_by, copy, encode_search_result, fill, max, max_by, min, min_by,
    replace_all, reverse, rotate, shuffle, shuffle_with, sort, sort_by, swap,
};
pub use crate::core::{OrderedSequence, Traversal};
pub use crate::error::{Result, SeqError};

pub mod prelude {
    pub use crate::algo::{
        binary_search, binary_search_by, copy, encode_search_result, fill, max, max_by, min,
        min_by, replace_all, reverse, rotate, shuffle, shuffle_with, sort, sort_by, swap,
    };
    pub use crate::core::OrderedSequence;
    pub use crate::error::SeqError;
}
