use std::fmt;
use std::rc::Rc;
use tracing::trace;

use crate::cell::ForcingCell;
use crate::error::{StreamError, StreamResult};
use crate::thunk::Thunk;

/// A lazy, memoized, persistent singly-linked list.
///
/// A `Stream` is a shared handle to a node holding an immutable head and a
/// tail that is either already known or computed on demand.  Forcing a tail
/// runs its thunk once and caches the result in the node, so every handle to
/// that node observes the same successor.  The empty handle (`Stream::nil`)
/// terminates every stream.
///
/// Streams are meant to model generative, possibly unbounded processes, so
/// the memory in use is everything reachable from the handles still alive.
/// Drop the handle to the front while walking a long stream (consuming
/// iteration does this) to keep memory bounded by the window being examined.
///
/// A thunk must not capture the node it is producing.
pub struct Stream<E> {
  node: Option<Rc<Node<E>>>
}

struct Node<E> {
  head: ForcingCell<E>,
  tail: ForcingCell<Stream<E>>
}

/// The source for the tail of a new node.
pub enum Tail<E> {
  /// The tail is already known.
  Ready(Stream<E>),
  /// The tail will be computed on first access.
  Deferred(Thunk<Stream<E>>)
}

impl<E> From<Stream<E>> for Tail<E> {
  fn from(s: Stream<E>) -> Self { Tail::Ready(s) }
}

impl<E> From<Thunk<Stream<E>>> for Tail<E> {
  fn from(t: Thunk<Stream<E>>) -> Self { Tail::Deferred(t) }
}

impl<E> Tail<E> {
  fn into_cell(self) -> ForcingCell<Stream<E>> {
    match self {
      Tail::Ready(s)    => ForcingCell::resolved(s),
      Tail::Deferred(t) => ForcingCell::pending(t)
    }
  }
}


/* Construction */

impl<E> Stream<E> {

  /// The empty stream.
  pub fn nil() -> Self { Stream { node: None } }

  /// Prepend `head` to a tail, which may be a stream or a thunk computing one.
  /// Nothing is evaluated.
  pub fn cell(head: E, tail: impl Into<Tail<E>>) -> Self {
    Self::from_cells(ForcingCell::resolved(head), tail.into().into_cell())
  }

  /// Prepend `head` to the stream that `tail` will compute when needed.
  pub fn lazy<F>(head: E, tail: F) -> Self
    where F: FnOnce() -> Stream<E> + 'static
  {
    Self::cell(head, Thunk::new(tail))
  }

  fn from_cells(head: ForcingCell<E>, tail: ForcingCell<Stream<E>>) -> Self {
    Stream { node: Some(Rc::new(Node { head, tail })) }
  }
}


/* Observation */

impl<E> Stream<E> {

  /// Is this the empty stream.
  pub fn is_nil(&self) -> bool { self.node.is_none() }

  /// Do the two handles refer to the same node.  All empty streams are equal.
  pub fn ptr_eq(&self, other: &Self) -> bool {
    match (&self.node, &other.node) {
      (Some(x), Some(y)) => Rc::ptr_eq(x, y),
      (None, None)       => true,
      _                  => false
    }
  }

  /// The first element, or an error for the empty stream.
  pub fn try_head(&self) -> StreamResult<&E> {
    match &self.node {
      Some(node) => node.head.try_force(),
      None       => Err(StreamError::Nil { op: "head" })
    }
  }

  /// The first element.
  /// Assert: the stream is not empty.
  pub fn head(&self) -> &E {
    match self.try_head() {
      Ok(head) => head,
      Err(err) => panic!("{}", err)
    }
  }

  /// The rest of the stream, computing it if this is the first request.
  pub fn try_tail(&self) -> StreamResult<Stream<E>> {
    match &self.node {
      Some(node) => node.tail.try_force().cloned(),
      None       => Err(StreamError::Nil { op: "tail" })
    }
  }

  /// The rest of the stream, computing it if this is the first request.
  /// Assert: the stream is not empty.
  pub fn tail(&self) -> Stream<E> {
    match self.try_tail() {
      Ok(tail) => tail,
      Err(err) => panic!("{}", err)
    }
  }

  /// Has the tail of the first node already been computed.
  /// `false` for the empty stream.
  pub fn is_tail_forced(&self) -> bool {
    self.node.as_ref().map_or(false, |node| node.tail.is_resolved())
  }
}


/* Transformation */

impl<E: 'static> Stream<E> {

  /// Apply `transform` to every element, lazily.
  ///
  /// Building the new stream does not call `transform`.  It is called once
  /// for each element of the result that is actually looked at, and the
  /// answer is kept, so looking again does not call it again.  The tails of
  /// this stream are forced only as the tails of the result are.
  pub fn map<E2, F>(&self, transform: F) -> Stream<E2>
    where
    E2: 'static,
    F:  Fn(&E) -> E2 + 'static
  {
    map_from(self.clone(), Rc::new(transform))
  }
}

fn map_from<E, E2>(source: Stream<E>, transform: Rc<dyn Fn(&E) -> E2>) -> Stream<E2>
  where E: 'static, E2: 'static
{
  let Some(node) = source.node else { return Stream::nil() };

  let head = {
    let node      = node.clone();
    let transform = transform.clone();
    Thunk::new(move || transform(node.head.force()))
  };
  let tail = Thunk::new(move || map_from(node.tail.force().clone(), transform));

  Stream::from_cells(ForcingCell::pending(head), ForcingCell::pending(tail))
}


/* Generators */

impl<E: 'static> Stream<E> {

  /// A stream of the elements of an iterator, pulled on demand.
  /// The first element is pulled right away, to decide if the stream is empty.
  pub fn from_iter_lazy<I>(iter: I) -> Self
    where
    I: IntoIterator<Item = E>,
    I::IntoIter: 'static
  {
    let mut iter = iter.into_iter();
    match iter.next() {
      Some(head) => Self::lazy(head, move || Self::from_iter_lazy(iter)),
      None       => Self::nil()
    }
  }

  /// Corecursively generate a stream from a seed.
  /// `step` gives the next element and the seed for the rest of the stream,
  /// or `None` to end the stream.
  pub fn unfold<S, F>(seed: S, step: F) -> Self
    where
    S: 'static,
    F: Fn(S) -> Option<(E, S)> + 'static
  {
    unfold_from(seed, Rc::new(step))
  }

  /// The infinite stream `first, next(first), next(next(first)), ...`.
  pub fn iterate<F>(first: E, next: F) -> Self
    where F: Fn(&E) -> E + 'static
  {
    Self::unfold(first, move |x| {
      let following = next(&x);
      Some((x, following))
    })
  }
}

fn unfold_from<E, S>(seed: S, step: Rc<dyn Fn(S) -> Option<(E, S)>>) -> Stream<E>
  where E: 'static, S: 'static
{
  match step(seed) {
    Some((head, next)) => Stream::lazy(head, move || unfold_from(next, step)),
    None               => Stream::nil()
  }
}


/* Teardown */

impl<E> Drop for Node<E> {
  fn drop(&mut self) {
    // Unlink uniquely owned successors one at a time, so that dropping a long
    // forced chain does not recurse once per node.
    let mut unlinked: usize = 0;
    let mut next = self.tail.take();
    while let Some(Stream { node: Some(rc) }) = next {
      next = match Rc::try_unwrap(rc) {
        Ok(mut node) => { unlinked += 1; node.tail.take() }
        Err(_)       => None
      };
    }
    if unlinked > 0 {
      trace!(unlinked, "released stream chain");
    }
  }
}


/* Standard traits */

impl<E> Clone for Stream<E> {
  fn clone(&self) -> Self { Stream { node: self.node.clone() } }
}

impl<E> Default for Stream<E> {
  fn default() -> Self { Self::nil() }
}

/// Shows the part of the stream that has been computed.  Elements that have
/// not been computed yet are shown as `?` and an unforced tail as `..`.
impl<E: fmt::Debug> fmt::Debug for Stream<E> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "[")?;
    let mut here  = &self.node;
    let mut first = true;
    while let Some(node) = here {
      if !first { write!(f, ", ")? }
      first = false;
      match node.head.get() {
        Some(x) => fmt::Debug::fmt(x, f)?,
        None    => write!(f, "?")?
      }
      match node.tail.get() {
        Some(rest) => here = &rest.node,
        None       => return write!(f, ", ..]")
      }
    }
    write!(f, "]")
  }
}
