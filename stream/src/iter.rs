use std::iter::FusedIterator;
use crate::stream::Stream;

/// A position in a stream, used like a forward iterator.
///
/// Cursors compare by node identity, so a traversal ends when its cursor
/// becomes equal to `Stream::end()`, which is the same for all streams.
pub struct Cursor<E> {
  at: Stream<E>
}

impl<E> Cursor<E> {

  /// The element at this position, `None` at the end.
  pub fn get(&self) -> Option<&E> {
    if self.at.is_nil() { None } else { Some(self.at.head()) }
  }

  /// Move to the next position, forcing the tail.
  /// Assert: not at the end.
  pub fn advance(&mut self) {
    self.at = self.at.tail();
  }

  /// Is this the end position.
  pub fn is_end(&self) -> bool { self.at.is_nil() }

  /// The stream starting at this position.
  pub fn as_stream(&self) -> &Stream<E> { &self.at }

  pub fn into_stream(self) -> Stream<E> { self.at }
}

impl<E> Clone for Cursor<E> {
  fn clone(&self) -> Self { Cursor { at: self.at.clone() } }
}

impl<E> PartialEq for Cursor<E> {
  fn eq(&self, other: &Self) -> bool { self.at.ptr_eq(&other.at) }
}

impl<E> Eq for Cursor<E> {}

impl<E> std::fmt::Debug for Cursor<E> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    if self.is_end() { write!(f, "Cursor(end)") } else { write!(f, "Cursor(..)") }
  }
}


impl<E> Stream<E> {

  /// A cursor at the start of this stream.
  pub fn begin(&self) -> Cursor<E> { Cursor { at: self.clone() } }

  /// The past-the-end cursor, shared by all streams.
  ///
  /// Streams may be infinite, so walking one until `end` only terminates
  /// if the generating process does.
  pub fn end() -> Cursor<E> { Cursor { at: Stream::nil() } }

  /// Iterate over clones of the elements, starting from this handle.
  /// The handle itself keeps the whole traversed prefix alive.
  pub fn iter(&self) -> Iter<E> { Iter::new(self.clone()) }
}


/// Iterator over the elements of a stream.
///
/// The iterator holds on to the node of the element it returned last, and
/// forces the next tail only when asked for the following element, so
/// `take(n)` forces `n - 1` tails.  Nodes behind it are released unless
/// someone else has a handle to them.
pub struct Iter<E> {
  current: Stream<E>,
  started: bool
}

impl<E> Iter<E> {
  fn new(start: Stream<E>) -> Self { Iter { current: start, started: false } }
}

impl<E: Clone> Iterator for Iter<E> {
  type Item = E;

  fn next(&mut self) -> Option<E> {
    if self.current.is_nil() { return None }
    if self.started {
      self.current = self.current.tail();
      if self.current.is_nil() { return None }
    }
    self.started = true;
    Some(self.current.head().clone())
  }
}

impl<E: Clone> FusedIterator for Iter<E> {}

impl<E: Clone> IntoIterator for Stream<E> {
  type Item     = E;
  type IntoIter = Iter<E>;
  fn into_iter(self) -> Iter<E> { Iter::new(self) }
}

impl<'a, E: Clone> IntoIterator for &'a Stream<E> {
  type Item     = E;
  type IntoIter = Iter<E>;
  fn into_iter(self) -> Iter<E> { self.iter() }
}
