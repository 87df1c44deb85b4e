//! Lazy combinator wrappers and their cursors.
//!
//! Each combinator is a pair: a wrapper struct implementing
//! [`Sequence`] and a cursor struct implementing [`Cursor`]. The wrapper is
//! pure description; opening a cursor on it opens a cursor on its input and
//! layers the combinator's state on top. Each cursor owns exactly the state
//! its semantics need, so independent traversals never interfere.

use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// Keeps at most the first `count` elements.
///
/// Built by [`Sequence::take`]. A cursor pulls its input at most `count`
/// times, so `take` bounds unbounded input.
#[derive(Clone, Debug)]
pub struct Take<S> {
    inner: S,
    count: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(inner: S, count: usize) -> Self {
        Take { inner, count }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakeCursor {
            inner: self.inner.cursor(),
            remaining: self.count,
        }
    }
}

/// A traversal of [`Take`]: counts its budget down and stops pulling at zero.
#[derive(Clone, Debug)]
pub struct TakeCursor<C> {
    inner: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Option<C::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.advance()
    }
}

/// Discards the first `count` elements.
///
/// Built by [`Sequence::skip`]. The discard happens when a cursor is opened:
/// the leading elements are pulled and dropped up front, and the cursor then
/// passes everything else straight through. A sequence shorter than `count`
/// yields nothing.
#[derive(Clone, Debug)]
pub struct Skip<S> {
    inner: S,
    count: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(inner: S, count: usize) -> Self {
        Skip { inner, count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor = SkipCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        SkipCursor::open(self.inner.cursor(), self.count)
    }
}

/// A traversal of [`Skip`]: the discard is done in `open`, after which pulls
/// pass through untouched.
#[derive(Clone, Debug)]
pub struct SkipCursor<C> {
    inner: C,
}

impl<C: Cursor> SkipCursor<C> {
    fn open(mut inner: C, count: usize) -> Self {
        for _ in 0..count {
            if inner.advance().is_none() {
                break;
            }
        }
        SkipCursor { inner }
    }
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Option<C::Item> {
        self.inner.advance()
    }
}

/// Keeps only elements satisfying a predicate.
///
/// Built by [`Sequence::filter`], and with the predicate negated by
/// [`Sequence::reject`].
#[derive(Clone)]
pub struct Filter<S, P> {
    inner: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(inner: S, predicate: P) -> Self {
        Filter { inner, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor {
            inner: self.inner.cursor(),
            predicate: self.predicate.clone(),
        }
    }
}

/// A traversal of [`Filter`]: pulls until an element passes or input ends.
#[derive(Clone)]
pub struct FilterCursor<C, P> {
    inner: C,
    predicate: P,
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<C::Item> {
        loop {
            let item = self.inner.advance()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }
}

/// Applies a transform to every element.
///
/// Built by [`Sequence::map`].
#[derive(Clone)]
pub struct Map<S, F> {
    inner: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(inner: S, transform: F) -> Self {
        Map { inner, transform }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U + Clone,
{
    type Item = U;
    type Cursor = MapCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        MapCursor {
            inner: self.inner.cursor(),
            transform: self.transform.clone(),
        }
    }
}

/// A traversal of [`Map`].
#[derive(Clone)]
pub struct MapCursor<C, F> {
    inner: C,
    transform: F,
}

impl<C, F, U> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> Option<U> {
        let item = self.inner.advance()?;
        Some((self.transform)(item))
    }
}

/// Discards leading elements while a condition holds.
///
/// Built by [`Sequence::skip_while`]. The first element failing the
/// condition is consumed and discarded along with the prefix; output starts
/// with the element after it. Like [`Skip`], the discard happens when a
/// cursor is opened.
#[derive(Clone)]
pub struct SkipWhile<S, P> {
    inner: S,
    condition: P,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) fn new(inner: S, condition: P) -> Self {
        SkipWhile { inner, condition }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = SkipWhileCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        SkipWhileCursor::open(self.inner.cursor(), &self.condition)
    }
}

/// A traversal of [`SkipWhile`]: the condition is only needed for the
/// opening discard, so the cursor itself carries none of it.
#[derive(Clone, Debug)]
pub struct SkipWhileCursor<C> {
    inner: C,
}

impl<C: Cursor> SkipWhileCursor<C> {
    fn open<P>(mut inner: C, condition: &P) -> Self
    where
        P: Fn(&C::Item) -> bool,
    {
        loop {
            match inner.advance() {
                Some(item) if condition(&item) => continue,
                // The first failing element is consumed and dropped too.
                _ => break,
            }
        }
        SkipWhileCursor { inner }
    }
}

impl<C: Cursor> Cursor for SkipWhileCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Option<C::Item> {
        self.inner.advance()
    }
}

/// Keeps leading elements while a condition holds.
///
/// Built by [`Sequence::take_while`]. The first element failing the
/// condition is consumed but not handed out: it ends the output without
/// appearing in it.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    inner: S,
    condition: P,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(inner: S, condition: P) -> Self {
        TakeWhile { inner, condition }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = TakeWhileCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        TakeWhileCursor {
            inner: self.inner.cursor(),
            condition: self.condition.clone(),
            done: false,
        }
    }
}

/// A traversal of [`TakeWhile`]. Once the condition fails the cursor stays
/// exhausted for good, even though its input may not be.
#[derive(Clone)]
pub struct TakeWhileCursor<C, P> {
    inner: C,
    condition: P,
    done: bool,
}

impl<C, P> Cursor for TakeWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<C::Item> {
        if self.done {
            return None;
        }
        match self.inner.advance() {
            Some(item) if (self.condition)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

/// Calls a callback on each element as it is pulled through, unchanged.
///
/// Built by [`Sequence::inspect`]. Elements are only realized on demand, so
/// the callback fires exactly once per pulled element; that makes it a
/// direct probe of what a chain actually pulls.
#[derive(Clone)]
pub struct Inspect<S, F> {
    inner: S,
    callback: F,
}

impl<S, F> Inspect<S, F> {
    pub(crate) fn new(inner: S, callback: F) -> Self {
        Inspect { inner, callback }
    }
}

impl<S, F> Sequence for Inspect<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) + Clone,
{
    type Item = S::Item;
    type Cursor = InspectCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        InspectCursor {
            inner: self.inner.cursor(),
            callback: self.callback.clone(),
        }
    }
}

/// A traversal of [`Inspect`].
#[derive(Clone)]
pub struct InspectCursor<C, F> {
    inner: C,
    callback: F,
}

impl<C, F> Cursor for InspectCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item),
{
    type Item = C::Item;

    fn advance(&mut self) -> Option<C::Item> {
        let item = self.inner.advance()?;
        (self.callback)(&item);
        Some(item)
    }
}
