use std::cell::{Cell, OnceCell};
use std::fmt;
use tracing::trace;

use crate::error::{StreamError, StreamResult};
use crate::thunk::Thunk;

/// What is left of the computation while the value is not (yet) available.
enum Slot<T> {
  /// The thunk has not been run.
  Waiting(Thunk<T>),
  /// The thunk is running right now.
  Forcing,
  /// The thunk panicked.
  Poisoned,
  /// The thunk is gone: it produced the value, or it was empty.
  Spent
}

/// A slot that is either resolved to a value or holds the thunk computing it.
///
/// The transition from pending to resolved happens at most once, on the first
/// successful `force`, and after that the value never changes.  All observers
/// of a cell see the same value.
///
/// The cell is single threaded (`!Sync`): forcing runs the thunk inline, on
/// the caller's stack.
pub struct ForcingCell<T> {
  value: OnceCell<T>,
  slot:  Cell<Slot<T>>
}

/// Marks the cell as poisoned if the thunk unwinds.
struct PoisonOnUnwind<'a, T> {
  slot: &'a Cell<Slot<T>>
}

impl<T> Drop for PoisonOnUnwind<'_, T> {
  fn drop(&mut self) { self.slot.set(Slot::Poisoned) }
}

impl<T> ForcingCell<T> {

  /// A cell that already has its value.
  pub fn resolved(value: T) -> Self {
    ForcingCell { value: OnceCell::from(value), slot: Cell::new(Slot::Spent) }
  }

  /// A cell whose value will be computed by `thunk` when first forced.
  pub fn pending(thunk: Thunk<T>) -> Self {
    ForcingCell { value: OnceCell::new(), slot: Cell::new(Slot::Waiting(thunk)) }
  }

  /// Has the value been computed.
  pub fn is_resolved(&self) -> bool { self.value.get().is_some() }

  /// The value, if it is already available.  Never runs the thunk.
  pub fn get(&self) -> Option<&T> { self.value.get() }

  /// Get the value, running the thunk if this is the first request.
  ///
  /// Fails if the cell is forced from inside its own thunk, if an earlier
  /// attempt panicked, or if the thunk was empty.
  pub fn try_force(&self) -> StreamResult<&T> {
    if let Some(value) = self.value.get() { return Ok(value) }

    match self.slot.replace(Slot::Forcing) {
      Slot::Waiting(thunk) => {
        trace!("forcing deferred cell");
        let guard  = PoisonOnUnwind { slot: &self.slot };
        let result = thunk.invoke();
        std::mem::forget(guard);
        self.slot.set(Slot::Spent);
        let value = result?;
        Ok(self.value.get_or_init(move || value))
      }
      Slot::Forcing  => Err(StreamError::Reentrant),
      Slot::Poisoned => {
        self.slot.set(Slot::Poisoned);
        Err(StreamError::Poisoned)
      }
      Slot::Spent => {
        self.slot.set(Slot::Spent);
        Err(StreamError::ConsumedThunk)
      }
    }
  }

  /// Get the value, running the thunk if this is the first request.
  /// Panics in the situations where `try_force` reports an error.
  pub fn force(&self) -> &T {
    match self.try_force() {
      Ok(value) => value,
      Err(err)  => panic!("{}", err)
    }
  }

  /// Move a resolved value out of the cell.
  pub fn take(&mut self) -> Option<T> { self.value.take() }
}

impl<T: fmt::Debug> fmt::Debug for ForcingCell<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.value.get() {
      Some(value) => f.debug_tuple("Resolved").field(value).finish(),
      None        => f.write_str("Pending")
    }
  }
}
