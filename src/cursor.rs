//! The pull protocol: cursors, and their bridge to standard iterators.
//!
//! A cursor is one traversal in progress. Combinator wrappers never hold a
//! cursor themselves; they manufacture one on demand, so the traversal state
//! lives entirely in the cursor and a sequence can be walked any number of
//! times.

use std::iter::FusedIterator;

/// A single traversal of a sequence.
///
/// `advance` either produces the next element or reports exhaustion with
/// `None`. Exhaustion is final: once `advance` has returned `None`, every
/// later call must return `None` as well. All cursors in this crate uphold
/// that, and code driving a cursor is entitled to rely on it.
pub trait Cursor {
    /// The element type this cursor yields.
    type Item;

    /// Pull the next element, or `None` once the traversal is exhausted.
    fn advance(&mut self) -> Option<Self::Item>;
}

/// Iterator adapter over a cursor, for `for` loops, `collect`, and the rest
/// of the standard iterator vocabulary.
///
/// Built by [`Sequence::iter`](crate::Sequence::iter).
#[derive(Clone, Debug)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C> CursorIter<C> {
    pub(crate) fn new(cursor: C) -> Self {
        CursorIter { cursor }
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        self.cursor.advance()
    }
}

// Cursor exhaustion is final, which is the fused contract.
impl<C: Cursor> FusedIterator for CursorIter<C> {}
