//! Leaf sequences: where elements actually come from.
//!
//! The only built-in source wraps a cloneable iterator. The iterator is the
//! description, not the traversal: every cursor gets its own clone, so one
//! source can be walked any number of times and the walks never disturb each
//! other.

use crate::cursor::Cursor;
use crate::sequence::Sequence;

/// A sequence backed by a cloneable iterator.
///
/// Built by [`from_iter`] and [`empty`]. Unbounded iterators are fine as
/// sources; it is the chain's job to bound realization (`take`, `first_n`,
/// `any`, ...).
#[derive(Clone, Debug)]
pub struct IterSource<I> {
    iter: I,
}

impl<I> Sequence for IterSource<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;
    type Cursor = IterCursor<I>;

    fn cursor(&self) -> IterCursor<I> {
        // Fused so foreign iterators honor the exhaustion contract.
        IterCursor {
            iter: self.iter.clone().fuse(),
        }
    }
}

/// A traversal of an [`IterSource`].
#[derive(Clone, Debug)]
pub struct IterCursor<I> {
    iter: std::iter::Fuse<I>,
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

/// Wrap an iterable as a sequence.
///
/// Accepts anything whose iterator is `Clone`: arrays, ranges, most std
/// adapters. For collections that only yield references (`&Vec<T>` and
/// friends), clone or copy up front, e.g. `from_iter(v.clone())`.
pub fn from_iter<I>(source: I) -> IterSource<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    IterSource {
        iter: source.into_iter(),
    }
}

/// The sequence with no elements.
pub fn empty<T>() -> IterSource<std::iter::Empty<T>> {
    IterSource {
        iter: std::iter::empty(),
    }
}
