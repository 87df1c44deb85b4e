//! # lazyseq
//!
//! Lazy, pull-based sequence combinators.
//!
//! A [`Sequence`] is a description of a stream of elements, not the stream
//! itself. Chaining combinators (`skip`, `take`, `filter`, `map`, ...) wrap
//! one description in another without computing anything; elements are only
//! realized when an eager operation (`first`, `fold`, `to_vec`, ...) opens a
//! [`Cursor`] and pulls. Realization never consumes the description, so one
//! sequence can be walked any number of times.
//!
//! ## Overview
//!
//! - **Sources**: [`from_iter`] wraps any cloneable iterator as a sequence;
//!   [`empty`] is the sequence with nothing in it.
//! - **Combinators**: lazy wrappers built by [`Sequence`] chaining methods.
//!   Building a chain pulls no elements at all.
//! - **Terminals**: eager [`Sequence`] methods that pull only as much as
//!   their answer needs, so prefixes of unbounded sequences are fine.
//!
//! ## Example
//!
//! ```
//! use lazyseq::{Sequence, from_iter};
//!
//! // An unbounded sequence costs nothing to describe.
//! let squares = from_iter(1u64..).map(|n| n * n);
//!
//! assert_eq!(squares.first_n(4), vec![1, 4, 9, 16]);
//! assert_eq!(squares.get(9), Some(100));
//!
//! // Chains stay lazy end to end and realize on demand.
//! let picked = squares.filter(|&n| n % 2 == 0).take(3).to_vec();
//! assert_eq!(picked, vec![4, 16, 36]);
//! ```

pub mod combinator;
pub mod cursor;
pub mod error;
pub mod sequence;
pub mod source;

pub use combinator::{Filter, Inspect, Map, Skip, SkipWhile, Take, TakeWhile};
pub use cursor::{Cursor, CursorIter};
pub use error::SequenceError;
pub use sequence::Sequence;
pub use source::{IterSource, empty, from_iter};
