use std::fmt;
use crate::error::{StreamError, StreamResult};

type Body<T> = Box<dyn FnOnce() -> T>;

/// A type-erased, move-only, nullary computation producing a `T`.
///
/// Any `FnOnce() -> T` can be stored, including closures that own values
/// which cannot be cloned (other thunks, iterators, stream handles).
/// A thunk may also be empty, which is the state left behind by `take`.
pub struct Thunk<T> {
  body: Option<Body<T>>
}

impl<T> Thunk<T> {

  /// Wrap a callable.
  pub fn new<F>(f: F) -> Self
    where F: FnOnce() -> T + 'static
  {
    Thunk { body: Some(Box::new(f)) }
  }

  /// A thunk that holds no callable.
  pub fn empty() -> Self { Thunk { body: None } }

  /// A thunk that just hands back `value` when invoked.
  pub fn computed(value: T) -> Self
    where T: 'static
  {
    Self::new(move || value)
  }

  /// Does this thunk currently hold a callable.
  pub fn is_valid(&self) -> bool { self.body.is_some() }

  /// Move the callable out, leaving this thunk empty.
  pub fn take(&mut self) -> Self {
    Thunk { body: self.body.take() }
  }

  /// Run the callable, consuming the thunk.
  /// Panics raised by the callable are not caught.
  pub fn invoke(self) -> StreamResult<T> {
    match self.body {
      Some(f) => Ok(f()),
      None    => Err(StreamError::ConsumedThunk)
    }
  }

  /// Post-process the result of this thunk.  Nothing is evaluated here.
  /// Mapping an empty thunk gives an empty thunk.
  pub fn map<U, F>(self, f: F) -> Thunk<U>
    where
    T: 'static,
    F: FnOnce(T) -> U + 'static
  {
    match self.body {
      Some(g) => Thunk::new(move || f(g())),
      None    => Thunk::empty()
    }
  }
}

impl<T> Default for Thunk<T> {
  fn default() -> Self { Self::empty() }
}

impl<T> fmt::Debug for Thunk<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let state = if self.is_valid() { "pending" } else { "empty" };
    write!(f, "Thunk({})", state)
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;
  use std::rc::Rc;

  #[test]
  fn test_invoke() {
    let t = Thunk::new(|| 6 * 7);
    assert!(t.is_valid());
    assert_eq!(t.invoke(), Ok(42));
  }

  #[test]
  fn test_move_only_capture() {
    // `Vec::into_iter` is moved into the closure and consumed there.
    let items = vec![String::from("a"), String::from("b")];
    let t = Thunk::new(move || items.into_iter().collect::<String>());
    assert_eq!(t.invoke().unwrap(), "ab");
  }

  #[test]
  fn test_take_leaves_empty() {
    let mut t = Thunk::new(|| 1);
    let moved = t.take();
    assert!(!t.is_valid());
    assert!(moved.is_valid());
    assert_eq!(t.invoke(), Err(StreamError::ConsumedThunk));
    assert_eq!(moved.invoke(), Ok(1));
  }

  #[test]
  fn test_map_is_deferred() {
    let calls = Rc::new(Cell::new(0));
    let seen  = calls.clone();
    let t = Thunk::new(move || { seen.set(seen.get() + 1); 10 })
              .map(|x| x + 1)
              .map(|x| x * 2);
    assert_eq!(calls.get(), 0);
    assert_eq!(t.invoke(), Ok(22));
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn test_empty() {
    let t: Thunk<u8> = Thunk::default();
    assert!(!t.is_valid());
    assert_eq!(format!("{:?}", t), "Thunk(empty)");
    assert_eq!(t.map(|x| x + 1).invoke(), Err(StreamError::ConsumedThunk));
    assert_eq!(Thunk::computed(3).invoke(), Ok(3));
  }
}
