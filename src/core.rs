//! Core traits and types for seqops.
//!
//! This module defines:
//! - [`OrderedSequence`]: The trait a container implements to be reordered by the algorithms.
//! - [`Traversal`]: The index-vs-cursor strategy selected per call.
//! - The size thresholds driving that selection.

use crate::error::{Result, SeqError};
use std::collections::{LinkedList, VecDeque};

/// Below this size `binary_search` always probes by index.
pub const BINARY_SEARCH_THRESHOLD: usize = 5000;
pub const REVERSE_THRESHOLD: usize = 5;
pub const SHUFFLE_THRESHOLD: usize = 5;
pub const FILL_THRESHOLD: usize = 5;
pub const ROTATE_THRESHOLD: usize = 5;
pub const COPY_THRESHOLD: usize = 5;
pub const REPLACE_ALL_THRESHOLD: usize = 5;

/// A mutable, indexable, size-bounded sequence.
///
/// The algorithms in [`crate::algo`] borrow a sequence for the duration of a
/// call and never change its length. Two access paths are offered:
///
/// - **Indexed**: [`get`](Self::get), [`set`](Self::set) and [`swap`](Self::swap).
/// - **Cursor**: [`values`](Self::values) and [`values_mut`](Self::values_mut), which walk
///   the sequence from both ends at once.
///
/// Containers whose indexed access is not O(1) (linked lists, ropes, paged
/// storage) should report `false` from
/// [`supports_random_access`](Self::supports_random_access). Large inputs are
/// then handled through the cursors, keeping every operation linear.
///
/// A sequence that rejects element replacement returns
/// [`SeqError::UnsupportedMutation`] from [`values_mut`](Self::values_mut);
/// the default [`set`](Self::set) and [`swap`](Self::swap) inherit that.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use seqops::core::OrderedSequence;
/// use seqops::Result;
///
/// struct Playlist {
///     tracks: Vec<String>,
/// }
///
/// impl OrderedSequence for Playlist {
///     type Item = String;
///     type Values<'a> = std::slice::Iter<'a, String>;
///     type ValuesMut<'a> = std::slice::IterMut<'a, String>;
///
///     fn len(&self) -> usize {
///         self.tracks.len()
///     }
///
///     fn get(&self, index: usize) -> Option<&String> {
///         self.tracks.get(index)
///     }
///
///     fn values(&self) -> Self::Values<'_> {
///         self.tracks.iter()
///     }
///
///     fn values_mut(&mut self) -> Result<Self::ValuesMut<'_>> {
///         Ok(self.tracks.iter_mut())
///     }
/// }
///
/// let mut playlist = Playlist { tracks: vec!["b".into(), "a".into()] };
/// seqops::sort(&mut playlist).unwrap();
/// assert_eq!(playlist.tracks, vec!["a", "b"]);
/// ```
pub trait OrderedSequence {
    /// Element type.
    type Item;

    /// Shared cursor over the elements, front to back.
    type Values<'a>: DoubleEndedIterator<Item = &'a Self::Item> + ExactSizeIterator + Clone
    where
        Self: 'a;

    /// Mutable cursor over the elements, front to back.
    type ValuesMut<'a>: DoubleEndedIterator<Item = &'a mut Self::Item> + ExactSizeIterator
    where
        Self: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns a shared cursor over the elements.
    fn values(&self) -> Self::Values<'_>;

    /// Returns a mutable cursor over the elements.
    ///
    /// # Errors
    ///
    /// [`SeqError::UnsupportedMutation`] if the sequence rejects element replacement.
    fn values_mut(&mut self) -> Result<Self::ValuesMut<'_>>;

    /// Whether [`get`](Self::get) and [`set`](Self::set) run in constant time.
    fn supports_random_access(&self) -> bool {
        true
    }

    /// Exposes the elements as one contiguous slice, if the storage allows it.
    ///
    /// Implementations rejecting element replacement must return `None`.
    fn contiguous_mut(&mut self) -> Option<&mut [Self::Item]> {
        None
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`SeqError::IndexOutOfBounds`] if `index >= len()`, or
    /// [`SeqError::UnsupportedMutation`] if the sequence rejects replacement.
    fn set(&mut self, index: usize, value: Self::Item) -> Result<Self::Item> {
        let len = self.len();
        check_index(index, len)?;
        let slot = self
            .values_mut()?
            .nth(index)
            .ok_or(SeqError::IndexOutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, value))
    }

    /// Exchanges the elements at `i` and `j`.
    ///
    /// Both indices are checked before anything is touched. `i == j` is a
    /// no-op that succeeds even on a sequence rejecting replacement.
    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.len();
        check_index(i, len)?;
        check_index(j, len)?;
        if i == j {
            return Ok(());
        }

        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let mut values = self.values_mut()?;
        let missing = SeqError::IndexOutOfBounds { index: hi, len };
        let first = values.nth(lo).ok_or_else(|| missing.clone())?;
        let second = values.nth(hi - lo - 1).ok_or(missing)?;
        std::mem::swap(first, second);
        Ok(())
    }
}

/// Fails with [`SeqError::IndexOutOfBounds`] unless `index < len`.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(SeqError::IndexOutOfBounds { index, len })
    }
}

/// How an operation walks a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Positional `get`/`set`/`swap`.
    Indexed,
    /// Front and back cursors over [`OrderedSequence::values_mut`].
    Cursor,
}

impl Traversal {
    /// Picks [`Traversal::Indexed`] for short or random-access sequences.
    pub fn select<S: OrderedSequence + ?Sized>(seq: &S, threshold: usize) -> Self {
        if seq.len() < threshold || seq.supports_random_access() {
            Traversal::Indexed
        } else {
            Traversal::Cursor
        }
    }
}

impl<T> OrderedSequence for [T] {
    type Item = T;
    type Values<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type ValuesMut<'a>
        = std::slice::IterMut<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }

    fn values_mut(&mut self) -> Result<Self::ValuesMut<'_>> {
        Ok(self.iter_mut())
    }

    fn contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(self)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = <[T]>::len(self);
        let slot = <[T]>::get_mut(self, index).ok_or(SeqError::IndexOutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, value))
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = <[T]>::len(self);
        check_index(i, len)?;
        check_index(j, len)?;
        <[T]>::swap(self, i, j);
        Ok(())
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T> OrderedSequence for Vec<T> {
    type Item = T;
    type Values<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type ValuesMut<'a>
        = std::slice::IterMut<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T] as OrderedSequence>::get(self, index)
    }

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }

    fn values_mut(&mut self) -> Result<Self::ValuesMut<'_>> {
        Ok(self.iter_mut())
    }

    fn contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(self.as_mut_slice())
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        <[T] as OrderedSequence>::set(self, index, value)
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        <[T] as OrderedSequence>::swap(self, i, j)
    }
}

// Ring buffer with O(1) indexing; sorted through make_contiguous.
impl<T> OrderedSequence for VecDeque<T> {
    type Item = T;
    type Values<'a>
        = std::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a;
    type ValuesMut<'a>
        = std::collections::vec_deque::IterMut<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }

    fn values_mut(&mut self) -> Result<Self::ValuesMut<'_>> {
        Ok(self.iter_mut())
    }

    fn contiguous_mut(&mut self) -> Option<&mut [T]> {
        Some(self.make_contiguous())
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = VecDeque::len(self);
        let slot = VecDeque::get_mut(self, index).ok_or(SeqError::IndexOutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, value))
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = VecDeque::len(self);
        check_index(i, len)?;
        check_index(j, len)?;
        VecDeque::swap(self, i, j);
        Ok(())
    }
}

// Positional access walks the list, so large lists take the cursor paths.
impl<T> OrderedSequence for LinkedList<T> {
    type Item = T;
    type Values<'a>
        = std::collections::linked_list::Iter<'a, T>
    where
        Self: 'a;
    type ValuesMut<'a>
        = std::collections::linked_list::IterMut<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    fn values(&self) -> Self::Values<'_> {
        self.iter()
    }

    fn values_mut(&mut self) -> Result<Self::ValuesMut<'_>> {
        Ok(self.iter_mut())
    }

    fn supports_random_access(&self) -> bool {
        false
    }
}
