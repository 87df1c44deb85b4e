//! The `Sequence` trait: lazy descriptions of element streams.
//!
//! A sequence is a factory of cursors. Chaining methods wrap one description
//! in another without touching any elements; eager methods open a cursor and
//! pull only as much as their answer needs. Because the description is never
//! consumed by realization, the same sequence can be realized any number of
//! times.

use std::ops::Range;

use crate::combinator::{Filter, Inspect, Map, Skip, SkipWhile, Take, TakeWhile};
use crate::cursor::{Cursor, CursorIter};
use crate::error::SequenceError;

/// A lazy, repeatable stream of elements.
///
/// Implementors provide [`cursor`](Sequence::cursor); everything else is
/// built on it. Chaining combinators consume the receiver and return a new
/// description wrapping it, so a chain reads top to bottom in evaluation
/// order. Eager terminals borrow the receiver and drive a fresh cursor, so
/// realization is repeatable.
///
/// Closures handed to chaining combinators must behave as pure functions:
/// each cursor opened on the result gets its own clone, and no ordering
/// between clones is promised beyond pull order within one cursor.
pub trait Sequence {
    /// The element type.
    type Item;

    /// The traversal type produced by [`cursor`](Sequence::cursor).
    type Cursor: Cursor<Item = Self::Item>;

    /// Open a fresh, independent traversal of this sequence.
    ///
    /// Opening pulls nothing for plain sources and most combinators;
    /// wrappers that discard a prefix ([`skip`](Sequence::skip),
    /// [`skip_while`](Sequence::skip_while)) do their discarding here.
    fn cursor(&self) -> Self::Cursor;

    // -----------------------------------------------------------------------
    // Chaining combinators (lazy)
    // -----------------------------------------------------------------------

    /// Keep at most the first `count` elements.
    ///
    /// Never pulls more than `count` elements from the input, so this is
    /// the standard way to bound an unbounded sequence.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Discard the first `count` elements.
    ///
    /// A sequence shorter than `count` yields nothing.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Keep only elements satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool + Clone,
    {
        Filter::new(self, predicate)
    }

    /// Keep only elements that fail `predicate`.
    ///
    /// The mirror image of [`filter`](Sequence::filter), and implemented as
    /// exactly that: a filter on the negated predicate.
    fn reject<P>(self, predicate: P) -> Filter<Self, impl Fn(&Self::Item) -> bool + Clone>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool + Clone,
    {
        self.filter(move |item: &Self::Item| !predicate(item))
    }

    /// Transform every element with `transform`.
    fn map<U, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U + Clone,
    {
        Map::new(self, transform)
    }

    /// Discard leading elements while `condition` holds.
    ///
    /// The first element failing the condition is consumed and discarded
    /// along with the prefix; output resumes with the element after it. See
    /// [`take_while`](Sequence::take_while) for the mirror-image policy.
    ///
    /// # Example
    ///
    /// ```
    /// use lazyseq::{Sequence, from_iter};
    ///
    /// let seq = from_iter([1, 2, 3, 4, 5]).skip_while(|&n| n < 3);
    /// // 3 ends the prefix and is discarded with it.
    /// assert_eq!(seq.to_vec(), vec![4, 5]);
    /// ```
    fn skip_while<P>(self, condition: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool + Clone,
    {
        SkipWhile::new(self, condition)
    }

    /// Keep leading elements while `condition` holds.
    ///
    /// The first element failing the condition is consumed but not kept: it
    /// ends the output without appearing in it. Between this and
    /// [`skip_while`](Sequence::skip_while), the boundary element belongs to
    /// neither side.
    ///
    /// # Example
    ///
    /// ```
    /// use lazyseq::{Sequence, from_iter};
    ///
    /// let seq = from_iter([1, 2, 3, 4, 5]).take_while(|&n| n != 3);
    /// assert_eq!(seq.to_vec(), vec![1, 2]);
    /// ```
    fn take_while<P>(self, condition: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool + Clone,
    {
        TakeWhile::new(self, condition)
    }

    /// Call `callback` on each element as it is pulled through, unchanged.
    ///
    /// Handy for tracing what a chain actually realizes.
    fn inspect<F>(self, callback: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item) + Clone,
    {
        Inspect::new(self, callback)
    }

    /// Keep the half-open window of zero-based positions `range`.
    ///
    /// `get_range(a..b)` is literally `skip(a)` followed by `take(b - a)`.
    /// An empty or inverted range yields an empty sequence; a window past
    /// the end yields whatever is actually there.
    fn get_range(self, range: Range<usize>) -> Take<Skip<Self>>
    where
        Self: Sized,
    {
        let len = range.end.saturating_sub(range.start);
        self.skip(range.start).take(len)
    }

    // -----------------------------------------------------------------------
    // Eager terminals
    // -----------------------------------------------------------------------

    /// The first element, if any. Pulls at most once.
    fn first(&self) -> Option<Self::Item> {
        self.cursor().advance()
    }

    /// The first `count` elements, or fewer if the sequence runs out.
    ///
    /// Pulls at most `count` times.
    fn first_n(&self, count: usize) -> Vec<Self::Item> {
        let mut cursor = self.cursor();
        let mut items = Vec::new();
        while items.len() < count {
            match cursor.advance() {
                Some(item) => items.push(item),
                None => break,
            }
        }
        items
    }

    /// The element at zero-based `index`, if the sequence reaches it.
    ///
    /// Agrees with `to_vec()` indexing: the first element is `get(0)`.
    /// Pulls at most `index + 1` times.
    ///
    /// # Example
    ///
    /// ```
    /// use lazyseq::{Sequence, from_iter};
    ///
    /// let seq = from_iter([1, 2, 3, 4, 5]);
    /// assert_eq!(seq.get(0), Some(1));
    /// assert_eq!(seq.get(4), Some(5));
    /// assert_eq!(seq.get(5), None);
    /// ```
    fn get(&self, index: usize) -> Option<Self::Item> {
        let mut cursor = self.cursor();
        for _ in 0..index {
            cursor.advance()?;
        }
        cursor.advance()
    }

    /// The zero-based position of the first element equal to `target`.
    ///
    /// Stops pulling at the first match.
    fn index_of(&self, target: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        let mut cursor = self.cursor();
        let mut index = 0;
        while let Some(item) = cursor.advance() {
            if item == *target {
                return Some(index);
            }
            index += 1;
        }
        None
    }

    /// Whether any element equals `target`. Stops pulling at the first match.
    fn contains(&self, target: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(target).is_some()
    }

    /// Whether any element satisfies `predicate`.
    ///
    /// Stops pulling at the first hit, so it can answer `true` on an
    /// unbounded sequence.
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        let mut cursor = self.cursor();
        while let Some(item) = cursor.advance() {
            if predicate(item) {
                return true;
            }
        }
        false
    }

    /// Combine all elements left to right, starting from `seed`.
    ///
    /// Returns `seed` unchanged for an empty sequence.
    fn fold<U, F>(&self, seed: U, mut combine: F) -> U
    where
        F: FnMut(U, Self::Item) -> U,
    {
        let mut cursor = self.cursor();
        let mut accumulator = seed;
        while let Some(item) = cursor.advance() {
            accumulator = combine(accumulator, item);
        }
        accumulator
    }

    /// Combine all elements left to right, seeded with the first element.
    ///
    /// A single pass: the first element is pulled as the seed, then the
    /// rest are folded into it. An empty sequence has no seed to offer and
    /// is reported as [`SequenceError::EmptySequence`].
    fn reduce<F>(&self, mut combine: F) -> Result<Self::Item, SequenceError>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let mut cursor = self.cursor();
        let mut accumulator = cursor.advance().ok_or(SequenceError::EmptySequence)?;
        while let Some(item) = cursor.advance() {
            accumulator = combine(accumulator, item);
        }
        Ok(accumulator)
    }

    /// Realize every element into a `Vec`.
    ///
    /// Runs the whole sequence; do not call this on an unbounded one.
    fn to_vec(&self) -> Vec<Self::Item> {
        let mut cursor = self.cursor();
        let mut items = Vec::new();
        while let Some(item) = cursor.advance() {
            items.push(item);
        }
        items
    }

    /// Open a cursor and adapt it to a standard [`Iterator`].
    ///
    /// Each call is a fresh traversal, like [`cursor`](Sequence::cursor).
    fn iter(&self) -> CursorIter<Self::Cursor> {
        CursorIter::new(self.cursor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{empty, from_iter};
    use std::cell::Cell;
    use std::rc::Rc;

    /// The worked scenario input used throughout: 1 through 5.
    fn nums() -> impl Sequence<Item = i32> {
        from_iter([1, 2, 3, 4, 5])
    }

    // --- Chain scenarios over 1..=5 ---

    macro_rules! chain_test {
        ($name:ident, $seq:expr, $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!($seq.to_vec(), $expected);
            }
        };
    }

    chain_test!(test_skip_two, nums().skip(2), vec![3, 4, 5]);
    chain_test!(test_skip_zero, nums().skip(0), vec![1, 2, 3, 4, 5]);
    chain_test!(test_skip_past_end, nums().skip(8), vec![]);
    chain_test!(test_take_two, nums().take(2), vec![1, 2]);
    chain_test!(test_take_more_than_len, nums().take(20), vec![1, 2, 3, 4, 5]);
    chain_test!(test_take_zero, nums().take(0), vec![]);
    chain_test!(test_skip_while_small, nums().skip_while(|&n| n < 3), vec![4, 5]);
    chain_test!(test_skip_while_all, nums().skip_while(|&n| n < 20), vec![]);
    chain_test!(test_take_while_not_three, nums().take_while(|&n| n != 3), vec![1, 2]);
    chain_test!(test_take_while_never_holds, nums().take_while(|&n| n == 7), vec![]);
    chain_test!(test_take_while_always_holds, nums().take_while(|&n| n != 7), vec![1, 2, 3, 4, 5]);
    chain_test!(test_filter_evens, nums().filter(|&n| n % 2 == 0), vec![2, 4]);
    chain_test!(test_filter_odds, nums().filter(|&n| n % 2 == 1), vec![1, 3, 5]);
    chain_test!(test_filter_keeps_all, nums().filter(|_| true), vec![1, 2, 3, 4, 5]);
    chain_test!(test_filter_drops_all, nums().filter(|_| false), vec![]);
    chain_test!(test_map_squares, nums().map(|n| n * n), vec![1, 4, 9, 16, 25]);
    chain_test!(test_map_halves, nums().map(|n| n as f64 / 2.0), vec![0.5, 1.0, 1.5, 2.0, 2.5]);
    chain_test!(test_map_identity, nums().map(|n| n), vec![1, 2, 3, 4, 5]);
    chain_test!(test_reject_three, nums().reject(|&n| n == 3), vec![1, 2, 4, 5]);
    chain_test!(test_reject_one, nums().reject(|&n| n == 1), vec![2, 3, 4, 5]);
    chain_test!(test_reject_absent, nums().reject(|&n| n == 10), vec![1, 2, 3, 4, 5]);
    chain_test!(test_get_range_window, nums().get_range(1..3), vec![2, 3]);
    chain_test!(test_get_range_empty, nums().get_range(0..0), vec![]);
    chain_test!(test_get_range_past_end, nums().get_range(10..15), vec![]);
    chain_test!(test_get_range_inverted, nums().get_range(3..1), vec![]);
    chain_test!(test_get_range_full, nums().get_range(0..5), vec![1, 2, 3, 4, 5]);
    chain_test!(
        test_chain_composes,
        nums().skip(1).take(3).filter(|&n| n % 2 == 0).map(|n| n * 10),
        vec![20, 40]
    );

    // --- Eager terminals ---

    #[test]
    fn test_first() {
        assert_eq!(nums().first(), Some(1));
        assert_eq!(empty::<i32>().first(), None);
    }

    #[test]
    fn test_first_n() {
        assert_eq!(nums().first_n(3), vec![1, 2, 3]);
        assert_eq!(nums().first_n(0), vec![]);
        assert_eq!(nums().first_n(20), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get_is_zero_based() {
        let seq = nums();
        assert_eq!(seq.get(0), Some(1));
        assert_eq!(seq.get(2), Some(3));
        assert_eq!(seq.get(4), Some(5));
        assert_eq!(seq.get(5), None);
        assert_eq!(seq.get(22), None);
    }

    #[test]
    fn test_get_agrees_with_to_vec_indexing() {
        let seq = nums().map(|n| n * 7);
        let all = seq.to_vec();
        for i in 0..6 {
            assert_eq!(seq.get(i), all.get(i).copied());
        }
    }

    #[test]
    fn test_get_pulls_no_further_than_needed() {
        let pulls = Rc::new(Cell::new(0));
        let probe = Rc::clone(&pulls);
        let seq = from_iter(1..).inspect(move |_| probe.set(probe.get() + 1));
        assert_eq!(seq.get(2), Some(3));
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_index_of() {
        assert_eq!(nums().index_of(&1), Some(0));
        assert_eq!(nums().index_of(&2), Some(1));
        assert_eq!(nums().index_of(&77), None);
    }

    #[test]
    fn test_index_of_round_trips_through_get() {
        let seq = nums();
        let index = seq.index_of(&4).unwrap();
        assert_eq!(index, 3);
        assert_eq!(seq.get(index), Some(4));
    }

    #[test]
    fn test_contains() {
        assert!(nums().contains(&1));
        assert!(!nums().contains(&56));
    }

    #[test]
    fn test_any() {
        assert!(nums().any(|n| n > 4));
        assert!(!nums().any(|n| n > 10));
        assert!(!empty::<i32>().any(|_| true));
    }

    #[test]
    fn test_any_short_circuits_on_unbounded_input() {
        let naturals = from_iter(0u64..);
        assert!(naturals.any(|n| n > 10));
    }

    #[test]
    fn test_contains_on_unbounded_input() {
        let naturals = from_iter(0u32..);
        assert!(naturals.contains(&7));
    }

    #[test]
    fn test_fold_sum() {
        assert_eq!(nums().fold(0, |acc, n| acc + n), 15);
    }

    #[test]
    fn test_fold_product() {
        assert_eq!(nums().fold(1, |acc, n| acc * n), 120);
    }

    #[test]
    fn test_fold_empty_returns_seed() {
        assert_eq!(empty::<i32>().fold(1, |acc, n| acc * n), 1);
    }

    #[test]
    fn test_fold_builds_strings() {
        let joined = nums().fold(String::new(), |acc, n| format!("{acc}{n}"));
        assert_eq!(joined, "12345");
    }

    #[test]
    fn test_reduce_sum() {
        assert_eq!(nums().reduce(|a, b| a + b), Ok(15));
    }

    #[test]
    fn test_reduce_product() {
        assert_eq!(nums().reduce(|a, b| a * b), Ok(120));
    }

    #[test]
    fn test_reduce_single_element() {
        assert_eq!(from_iter([7]).reduce(|a, b| a + b), Ok(7));
    }

    #[test]
    fn test_reduce_empty_is_an_error() {
        let result = empty::<i32>().reduce(|a, b| a + b);
        assert!(matches!(result, Err(SequenceError::EmptySequence)));
    }

    #[test]
    fn test_to_vec() {
        assert_eq!(nums().to_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(empty::<i32>().to_vec(), vec![]);
    }

    // --- Laziness and repeatability ---

    #[test]
    fn test_building_a_chain_pulls_nothing() {
        let pulls = Rc::new(Cell::new(0));
        let probe = Rc::clone(&pulls);
        let seq = nums()
            .inspect(move |_| probe.set(probe.get() + 1))
            .filter(|&n| n % 2 == 0)
            .map(|n| n * 10);
        assert_eq!(pulls.get(), 0);
        assert_eq!(seq.first(), Some(20));
        // first() realized 1 (dropped by the filter) and 2, nothing further.
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_realization_is_repeatable() {
        let evens = nums().filter(|&n| n % 2 == 0);
        assert_eq!(evens.to_vec(), vec![2, 4]);
        assert_eq!(evens.to_vec(), vec![2, 4]);
        assert_eq!(evens.first(), Some(2));
    }

    #[test]
    fn test_chain_cursors_are_independent() {
        let seq = nums().map(|n| n * 2);
        let mut a = seq.cursor();
        let mut b = seq.cursor();
        assert_eq!(a.advance(), Some(2));
        assert_eq!(a.advance(), Some(4));
        assert_eq!(b.advance(), Some(2));
        assert_eq!(a.advance(), Some(6));
    }

    #[test]
    fn test_first_on_unbounded_input() {
        let naturals = from_iter(100u32..);
        assert_eq!(naturals.first(), Some(100));
    }

    #[test]
    fn test_take_bounds_unbounded_input() {
        assert_eq!(from_iter(0..).take(3).to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_stacked_filters_match_conjunction() {
        let stacked = nums().filter(|&n| n > 1).filter(|&n| n < 5).to_vec();
        let conjoined = nums().filter(|&n| n > 1 && n < 5).to_vec();
        assert_eq!(stacked, conjoined);
        assert_eq!(stacked, vec![2, 3, 4]);
    }

    #[test]
    fn test_stacked_maps_match_composition() {
        let stacked = nums().map(|n| n + 1).map(|n| n * 2).to_vec();
        let composed = nums().map(|n| (n + 1) * 2).to_vec();
        assert_eq!(stacked, composed);
        assert_eq!(stacked, vec![4, 6, 8, 10, 12]);
    }

    #[test]
    fn test_get_range_matches_slice_windows() {
        let all = nums().to_vec();
        for start in 0..=5 {
            for end in start..=5 {
                assert_eq!(nums().get_range(start..end).to_vec(), &all[start..end]);
            }
        }
    }
}
