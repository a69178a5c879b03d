//! Lazy, memoized streams.
//!
//! A [`Stream`] is a persistent linked list whose tail is produced on demand
//! by a [`Thunk`] and cached in a [`ForcingCell`], so each tail is computed
//! at most once no matter how many handles share the node.
//!
//! ```
//! use lazy_stream::Stream;
//!
//! fn fibs(a: u64, b: u64) -> Stream<u64> {
//!   Stream::lazy(a, move || fibs(b, a + b))
//! }
//!
//! let xs: Vec<u64> = fibs(0, 1).iter().take(10).collect();
//! assert_eq!(xs, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
//! ```

pub mod error;
pub mod thunk;
pub mod cell;
pub mod stream;
pub mod iter;

#[cfg(test)]
pub mod proptest;

pub use crate::error::{StreamError, StreamResult};
pub use crate::thunk::Thunk;
pub use crate::cell::ForcingCell;
pub use crate::stream::{Stream, Tail};
pub use crate::iter::{Cursor, Iter};
