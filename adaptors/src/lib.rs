pub mod flat;
pub mod optional;
pub mod lazy;

#[cfg(test)]
pub mod proptest;

pub use crate::flat::{flatten, FlatIter};
pub use crate::optional::{each, each_owned, for_each, first_of, both_of, make_optional_if};
pub use crate::lazy::{Lazy, InsertLazy};
