use std::collections::VecDeque;

use crate::sequence::OrderedSequence;

/// Merges two non-decreasing sequences into a new one, draining both inputs.
///
/// Duplicates are kept. When the fronts compare equal the element from `b`
/// goes first. Unsorted inputs still produce every element exactly once, in
/// no particular order.
pub fn merge<T, A, B>(a: &mut A, b: &mut B) -> VecDeque<T>
where
    T: Ord,
    A: OrderedSequence<T>,
    B: OrderedSequence<T>,
{
    let mut out = VecDeque::with_capacity(a.len() + b.len());
    merge_into(a, b, &mut out);
    out
}

/// Like [`merge`], but appends to an existing output sequence.
pub fn merge_into<T, A, B, R>(a: &mut A, b: &mut B, out: &mut R)
where
    T: Ord,
    A: OrderedSequence<T>,
    B: OrderedSequence<T>,
    R: OrderedSequence<T>,
{
    merge_by_into(a, b, out, |x, y| x < y)
}

/// Merges using `less` as the strict ordering. `b` wins whenever
/// `less(front_a, front_b)` is false.
pub fn merge_by<T, A, B, F>(a: &mut A, b: &mut B, less: F) -> VecDeque<T>
where
    A: OrderedSequence<T>,
    B: OrderedSequence<T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut out = VecDeque::with_capacity(a.len() + b.len());
    merge_by_into(a, b, &mut out, less);
    out
}

/// Merges by comparing the keys extracted with `key`.
pub fn merge_by_key<T, K, A, B, F>(a: &mut A, b: &mut B, mut key: F) -> VecDeque<T>
where
    K: Ord,
    A: OrderedSequence<T>,
    B: OrderedSequence<T>,
    F: FnMut(&T) -> K,
{
    merge_by(a, b, |x, y| key(x) < key(y))
}

fn merge_by_into<T, A, B, R, F>(a: &mut A, b: &mut B, out: &mut R, mut less: F)
where
    A: OrderedSequence<T>,
    B: OrderedSequence<T>,
    R: OrderedSequence<T>,
    F: FnMut(&T, &T) -> bool,
{
    log::trace!("merging {} + {} elements", a.len(), b.len());
    loop {
        let take_a = match (a.peek_front(), b.peek_front()) {
            (Some(x), Some(y)) => less(x, y),
            _ => break,
        };
        let next = if take_a { a.pop_front() } else { b.pop_front() };
        if let Some(item) = next {
            out.push_back(item);
        }
    }
    while let Some(item) = a.pop_front() {
        out.push_back(item);
    }
    while let Some(item) = b.pop_front() {
        out.push_back(item);
    }
}
