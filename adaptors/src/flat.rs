use std::iter::{Fuse, FusedIterator};

/// Traverse a sequence of sequences as one sequence.
///
/// Inner sequences are visited in order and empty ones are skipped, so the
/// iterator only ever stops on an element or at the very end.
pub struct FlatIter<O>
  where
  O: Iterator,
  O::Item: IntoIterator
{
  outer: Fuse<O>,
  inner: Option<<O::Item as IntoIterator>::IntoIter>
}

/// Flatten `outer`, which may be a container of containers or any iterator
/// of iterables.
pub fn flatten<I>(outer: I) -> FlatIter<I::IntoIter>
  where
  I: IntoIterator,
  I::Item: IntoIterator
{
  FlatIter { outer: outer.into_iter().fuse(), inner: None }
}

impl<O> Iterator for FlatIter<O>
  where
  O: Iterator,
  O::Item: IntoIterator
{
  type Item = <O::Item as IntoIterator>::Item;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(inner) = &mut self.inner {
        if let Some(x) = inner.next() { return Some(x) }
      }
      match self.outer.next() {
        Some(next) => self.inner = Some(next.into_iter()),
        None       => { self.inner = None; return None }
      }
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let lo = self.inner.as_ref().map_or(0, |i| i.size_hint().0);
    (lo, None)
  }
}

impl<O> FusedIterator for FlatIter<O>
  where
  O: Iterator,
  O::Item: IntoIterator
{}

impl<O> Clone for FlatIter<O>
  where
  O: Iterator + Clone,
  O::Item: IntoIterator,
  <O::Item as IntoIterator>::IntoIter: Clone
{
  fn clone(&self) -> Self {
    FlatIter { outer: self.outer.clone(), inner: self.inner.clone() }
  }
}
