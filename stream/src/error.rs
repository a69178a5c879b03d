//! Errors reported by streams and their deferred cells.

/// Things that can go wrong when observing a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {

  /// `head` or `tail` was requested from the empty stream.
  #[error("`{op}` called on an empty stream")]
  Nil {
    /// The operation that was attempted.
    op: &'static str
  },

  /// A thunk was invoked after its callable had been moved out.
  #[error("thunk invoked after its callable was consumed")]
  ConsumedThunk,

  /// A cell was forced while its own thunk was still running.
  #[error("deferred cell forced from inside its own computation")]
  Reentrant,

  /// An earlier attempt to force the cell panicked, consuming its thunk.
  #[error("deferred cell is poisoned: an earlier computation panicked")]
  Poisoned,
}

pub type StreamResult<T> = Result<T, StreamError>;
