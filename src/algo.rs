//! Sequence algorithms: sort, search, reverse, shuffle, swap, fill, rotate, copy and min/max.
//!
//! Every operation borrows a caller-owned [`OrderedSequence`] and preserves its
//! length. Operations that walk the whole sequence choose between two strategies
//! per call (see [`Traversal`]):
//! - **Indexed**: positional `get`/`set`/`swap`, used for short sequences and
//!   those reporting random access.
//! - **Cursor**: front/back cursors from [`OrderedSequence::values_mut`], used for large
//!   sequences where positional access is itself linear.
//!
//! Destructive operations probe writability before touching anything, so a
//! sequence that rejects replacement fails with [`SeqError::UnsupportedMutation`]
//! even when the call would have had no effect. The one exception is
//! [`swap`] with equal indices.

use crate::core::{
    BINARY_SEARCH_THRESHOLD, COPY_THRESHOLD, FILL_THRESHOLD, OrderedSequence,
    REPLACE_ALL_THRESHOLD, REVERSE_THRESHOLD, ROTATE_THRESHOLD, SHUFFLE_THRESHOLD, Traversal,
};
use crate::error::{Result, SeqError};
use crate::random;
use log::trace;
use rand::Rng;
use std::cmp::Ordering;

/// Sorts the sequence into ascending natural order.
///
/// The sort is stable: elements comparing equal keep their relative order.
/// Contiguous storage is sorted in place; anything else is sorted through a
/// temporary vector of element slots gathered by one cursor pass, so a
/// linked list costs O(n log n) like an array does.
///
/// # Errors
///
/// [`SeqError::UnsupportedMutation`] if the sequence rejects element replacement.
///
/// # Examples
///
/// ```
/// use seqops::sort;
///
/// let mut data = vec!["dog", "cat"];
/// sort(&mut data).unwrap();
///
/// assert_eq!(data, vec!["cat", "dog"]);
/// ```
pub fn sort<S>(seq: &mut S) -> Result<()>
where
    S: OrderedSequence + ?Sized,
    S::Item: Ord,
{
    sort_by(seq, |a, b| a.cmp(b))
}

/// Sorts the sequence stably under `compare`.
///
/// `compare` must be a total order; if it is not, the resulting order is
/// unspecified but still a permutation of the input.
pub fn sort_by<S, F>(seq: &mut S, mut compare: F) -> Result<()>
where
    S: OrderedSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    if let Some(slice) = seq.contiguous_mut() {
        trace!("sort: {} elements in contiguous storage", slice.len());
        slice.sort_by(compare);
        return Ok(());
    }

    // 1. Gather slots in sequence order.
    let mut slots: Vec<&mut S::Item> = seq.values_mut()?.collect();
    trace!("sort: {} elements through gathered slots", slots.len());

    // 2. Stable sort of positions by the values they hold.
    let mut order: Vec<usize> = (0..slots.len()).collect();
    order.sort_by(|&a, &b| compare(&*slots[a], &*slots[b]));

    // 3. Move the values into place.
    apply_permutation(&mut slots, order);
    Ok(())
}

/// Rearranges the values behind `slots` so that position `k` receives the value
/// previously at `order[k]`.
fn apply_permutation<T>(slots: &mut [&mut T], mut order: Vec<usize>) {
    for i in 0..slots.len() {
        let mut current = i;
        while order[current] != i {
            let next = order[current];
            swap_slots(slots, current, next);
            order[current] = current; // Mark as placed
            current = next;
        }
        order[current] = current;
    }
}

#[inline]
fn swap_slots<T>(slots: &mut [&mut T], a: usize, b: usize) {
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = slots.split_at_mut(hi);
    std::mem::swap(&mut *head[lo], &mut *tail[0]);
}

/// Searches a sorted sequence for `key`.
///
/// Returns `Ok(index)` of a matching element, or `Err(insertion_point)` where
/// `insertion_point` is the first index whose element is greater than `key`
/// (`len()` if none). With duplicates, any matching index may be returned.
///
/// The sequence must be sorted ascending; otherwise the result is unspecified.
/// Use [`encode_search_result`] for the signed `-(insertion_point) - 1` form.
///
/// # Examples
///
/// ```
/// use seqops::binary_search;
///
/// let data = vec!["cat", "dog"];
/// assert_eq!(binary_search(&data, &"cat"), Ok(0));
/// assert_eq!(binary_search(&data, &"fish"), Err(2));
/// ```
pub fn binary_search<S>(seq: &S, key: &S::Item) -> std::result::Result<usize, usize>
where
    S: OrderedSequence + ?Sized,
    S::Item: Ord,
{
    binary_search_by(seq, |probe| probe.cmp(key))
}

/// Searches a sorted sequence with a comparator.
///
/// `compare` returns the ordering of the probed element relative to the
/// target, and must be consistent with the order the sequence is sorted in.
///
/// Random-access and shorter sequences are probed by index. Longer sequences
/// without random access are probed through a shrinking cursor window, so the
/// search does O(log n) comparisons over O(n) total traversal.
pub fn binary_search_by<S, F>(seq: &S, compare: F) -> std::result::Result<usize, usize>
where
    S: OrderedSequence + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    match Traversal::select(seq, BINARY_SEARCH_THRESHOLD) {
        Traversal::Indexed => indexed_binary_search(seq, compare),
        Traversal::Cursor => {
            trace!("binary_search: cursor window over {} elements", seq.len());
            cursor_binary_search(seq, compare)
        }
    }
}

fn indexed_binary_search<S, F>(seq: &S, mut compare: F) -> std::result::Result<usize, usize>
where
    S: OrderedSequence + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    // Candidates lie in [low, high).
    let mut low = 0;
    let mut high = seq.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let Some(probe) = seq.get(mid) else {
            break;
        };
        match compare(probe) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Ok(mid),
        }
    }
    Err(low)
}

fn cursor_binary_search<S, F>(seq: &S, mut compare: F) -> std::result::Result<usize, usize>
where
    S: OrderedSequence + ?Sized,
    F: FnMut(&S::Item) -> Ordering,
{
    // `window` yields exactly the candidates, starting at index `low`.
    let mut window = seq.values();
    let mut low = 0;

    while window.len() > 0 {
        let half = window.len() / 2;
        let Some(probe) = window.clone().nth(half) else {
            break;
        };
        match compare(probe) {
            Ordering::Less => {
                window.nth(half);
                low += half + 1;
            }
            Ordering::Greater => {
                let dropped = window.len() - half;
                window.nth_back(dropped - 1);
            }
            Ordering::Equal => return Ok(low + half),
        }
    }
    Err(low)
}

/// Maps a search result to a single signed index: the match position, or
/// `-(insertion_point) - 1` when absent.
///
/// ```
/// use seqops::{binary_search, encode_search_result};
///
/// let data = vec!["cat", "dog"];
/// assert_eq!(encode_search_result(binary_search(&data, &"fish")), -3);
/// ```
pub fn encode_search_result(result: std::result::Result<usize, usize>) -> isize {
    match result {
        Ok(index) => index as isize,
        Err(insertion_point) => -(insertion_point as isize) - 1,
    }
}

/// Reverses the order of the elements in linear time.
///
/// # Errors
///
/// [`SeqError::UnsupportedMutation`] if the sequence rejects element replacement.
pub fn reverse<S>(seq: &mut S) -> Result<()>
where
    S: OrderedSequence + ?Sized,
{
    ensure_writable(seq)?;
    let len = seq.len();
    match Traversal::select(seq, REVERSE_THRESHOLD) {
        Traversal::Indexed => {
            for i in 0..len / 2 {
                seq.swap(i, len - 1 - i)?;
            }
            Ok(())
        }
        Traversal::Cursor => {
            trace!("reverse: cursor pass over {} elements", len);
            reverse_range(seq, 0, len)
        }
    }
}

/// Reverses `[start, end)` by walking inward from both ends.
fn reverse_range<S>(seq: &mut S, start: usize, end: usize) -> Result<()>
where
    S: OrderedSequence + ?Sized,
{
    let mut values = seq.values_mut()?.skip(start).take(end - start);
    while let (Some(front), Some(back)) = (values.next(), values.next_back()) {
        std::mem::swap(front, back);
    }
    Ok(())
}

/// Randomly permutes the sequence using the process-wide shared source.
///
/// See [`random::SharedSource`] for the concurrency contract. Use
/// [`shuffle_with`] to supply a generator, e.g. a seeded one for reproducible
/// output.
pub fn shuffle<S>(seq: &mut S) -> Result<()>
where
    S: OrderedSequence + ?Sized,
{
    random::shared_source().with(|rng| shuffle_with(seq, rng))
}

/// Randomly permutes the sequence with the supplied generator.
///
/// Runs the backward Fisher-Yates walk: for `i` from `len` down to 2, the
/// element at `i - 1` is exchanged with one drawn uniformly from `[0, i)`.
/// Every permutation is equally likely if `rng` is unbiased.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seqops::shuffle_with;
///
/// let mut data = vec![1, 2, 3, 4, 5];
/// let mut rng = StdRng::seed_from_u64(7);
/// shuffle_with(&mut data, &mut rng).unwrap();
///
/// data.sort();
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle_with<S, R>(seq: &mut S, rng: &mut R) -> Result<()>
where
    S: OrderedSequence + ?Sized,
    R: Rng + ?Sized,
{
    ensure_writable(seq)?;
    let len = seq.len();
    match Traversal::select(seq, SHUFFLE_THRESHOLD) {
        Traversal::Indexed => {
            for i in (2..=len).rev() {
                seq.swap(i - 1, rng.random_range(0..i))?;
            }
        }
        Traversal::Cursor => {
            trace!("shuffle: {} elements through gathered slots", len);
            let mut slots: Vec<&mut S::Item> = seq.values_mut()?.collect();
            for i in (2..=slots.len()).rev() {
                swap_slots(&mut slots, i - 1, rng.random_range(0..i));
            }
        }
    }
    Ok(())
}

/// Exchanges the elements at `i` and `j`.
///
/// Swapping an index with itself is a no-op.
///
/// # Errors
///
/// [`SeqError::IndexOutOfBounds`] if either index is outside `[0, len)`.
pub fn swap<S>(seq: &mut S, i: usize, j: usize) -> Result<()>
where
    S: OrderedSequence + ?Sized,
{
    seq.swap(i, j)
}

/// Overwrites every element with a clone of `value`.
pub fn fill<S>(seq: &mut S, value: S::Item) -> Result<()>
where
    S: OrderedSequence + ?Sized,
    S::Item: Clone,
{
    ensure_writable(seq)?;
    let len = seq.len();
    match Traversal::select(seq, FILL_THRESHOLD) {
        Traversal::Indexed => {
            for i in 0..len {
                seq.set(i, value.clone())?;
            }
        }
        Traversal::Cursor => {
            trace!("fill: cursor pass over {} elements", len);
            seq.values_mut()?.for_each(|slot| slot.clone_from(&value));
        }
    }
    Ok(())
}

/// Rotates the elements by `distance`.
///
/// Afterwards the element at index `i` is the one previously at
/// `(i - distance) mod len`. `distance` may be negative, zero or larger than
/// the sequence.
///
/// # Examples
///
/// ```
/// use seqops::rotate;
///
/// let mut data = vec!['t', 'a', 'n', 'k', 's'];
/// rotate(&mut data, 1).unwrap();
/// assert_eq!(data, vec!['s', 't', 'a', 'n', 'k']);
///
/// rotate(&mut data, -1).unwrap();
/// assert_eq!(data, vec!['t', 'a', 'n', 'k', 's']);
/// ```
pub fn rotate<S>(seq: &mut S, distance: isize) -> Result<()>
where
    S: OrderedSequence + ?Sized,
{
    ensure_writable(seq)?;
    let len = seq.len();
    if len == 0 {
        return Ok(());
    }
    let shift = distance.rem_euclid(len as isize) as usize;
    if shift == 0 {
        return Ok(());
    }

    match Traversal::select(seq, ROTATE_THRESHOLD) {
        Traversal::Indexed => rotate_by_cycles(seq, shift),
        Traversal::Cursor => {
            trace!("rotate: triple reversal over {} elements", len);
            let mid = len - shift;
            reverse_range(seq, 0, mid)?;
            reverse_range(seq, mid, len)?;
            reverse_range(seq, 0, len)
        }
    }
}

/// Moves each element `shift` places right by following the permutation's
/// cycles. The element in transit is parked at the cycle start.
fn rotate_by_cycles<S>(seq: &mut S, shift: usize) -> Result<()>
where
    S: OrderedSequence + ?Sized,
{
    let len = seq.len();
    let mut moved = 0;
    let mut cycle_start = 0;

    while moved != len {
        let mut i = cycle_start;
        loop {
            i += shift;
            if i >= len {
                i -= len;
            }
            seq.swap(cycle_start, i)?;
            moved += 1;
            if i == cycle_start {
                break;
            }
        }
        cycle_start += 1;
    }
    Ok(())
}

/// Copies every element of `src` into the front of `dest`.
///
/// Elements of `dest` past `src.len()` are left untouched.
///
/// # Errors
///
/// [`SeqError::SourceTooLarge`] if `src` is longer than `dest`, checked before
/// anything is written.
pub fn copy<D, S>(dest: &mut D, src: &S) -> Result<()>
where
    D: OrderedSequence + ?Sized,
    S: OrderedSequence<Item = D::Item> + ?Sized,
    D::Item: Clone,
{
    let src_len = src.len();
    let dest_len = dest.len();
    if src_len > dest_len {
        return Err(SeqError::SourceTooLarge { src_len, dest_len });
    }
    ensure_writable(dest)?;

    if src_len < COPY_THRESHOLD || (src.supports_random_access() && dest.supports_random_access()) {
        for index in 0..src_len {
            let value = src.get(index).ok_or(SeqError::IndexOutOfBounds {
                index,
                len: src_len,
            })?;
            dest.set(index, value.clone())?;
        }
    } else {
        trace!("copy: cursor pass over {} elements", src_len);
        dest.values_mut()?
            .zip(src.values())
            .for_each(|(slot, value)| slot.clone_from(value));
    }
    Ok(())
}

/// Replaces every element equal to `old` with a clone of `new`.
///
/// Returns whether anything was replaced.
pub fn replace_all<S>(seq: &mut S, old: &S::Item, new: S::Item) -> Result<bool>
where
    S: OrderedSequence + ?Sized,
    S::Item: PartialEq + Clone,
{
    ensure_writable(seq)?;
    let len = seq.len();
    let mut replaced = false;

    match Traversal::select(seq, REPLACE_ALL_THRESHOLD) {
        Traversal::Indexed => {
            for i in 0..len {
                if seq.get(i).is_some_and(|value| value == old) {
                    seq.set(i, new.clone())?;
                    replaced = true;
                }
            }
        }
        Traversal::Cursor => {
            trace!("replace_all: cursor pass over {} elements", len);
            for slot in seq.values_mut()? {
                if *slot == *old {
                    slot.clone_from(&new);
                    replaced = true;
                }
            }
        }
    }
    Ok(replaced)
}

/// Returns the least element in natural order.
///
/// On ties the earliest element wins. Works on anything iterable, including
/// `&Vec<T>` (yielding `&T`) and sequences' [`OrderedSequence::values`].
///
/// # Errors
///
/// [`SeqError::EmptyInput`] if the collection is empty.
///
/// # Examples
///
/// ```
/// use seqops::{max, min};
///
/// let data = vec!["dog", "cat"];
/// assert_eq!(min(&data), Ok(&"cat"));
/// assert_eq!(max(&data), Ok(&"dog"));
/// ```
pub fn min<I>(coll: I) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    min_by(coll, |a, b| a.cmp(b))
}

/// Returns the greatest element in natural order; on ties the earliest wins.
pub fn max<I>(coll: I) -> Result<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    max_by(coll, |a, b| a.cmp(b))
}

/// Returns the least element under `compare`; on ties the earliest wins.
pub fn min_by<I, F>(coll: I, compare: F) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    extremum(coll, compare, Ordering::Less)
}

/// Returns the greatest element under `compare`; on ties the earliest wins.
pub fn max_by<I, F>(coll: I, compare: F) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    extremum(coll, compare, Ordering::Greater)
}

/// Single pass keeping the candidate until something strictly beats it.
fn extremum<I, F>(coll: I, mut compare: F, wins: Ordering) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut values = coll.into_iter();
    let mut candidate = values.next().ok_or(SeqError::EmptyInput)?;
    for next in values {
        if compare(&next, &candidate) == wins {
            candidate = next;
        }
    }
    Ok(candidate)
}

#[inline]
fn ensure_writable<S>(seq: &mut S) -> Result<()>
where
    S: OrderedSequence + ?Sized,
{
    seq.values_mut().map(|_| ())
}
