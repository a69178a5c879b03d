use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A value that is computed only when it is asked for.
///
/// Build one with the `lazy!` macro.  A `Lazy` is consumed when forced, so
/// a computation with side effects runs at most once.
#[must_use = "a lazy value does nothing unless forced"]
pub struct Lazy<F>(F);

impl<T, F: FnOnce() -> T> Lazy<F> {

  pub fn new(f: F) -> Self { Lazy(f) }

  /// Compute the value.
  pub fn force(self) -> T { (self.0)() }

  /// Transform the value once it is computed.
  pub fn map<U, G: FnOnce(T) -> U>(self, g: G) -> Lazy<impl FnOnce() -> U> {
    Lazy(move || g((self.0)()))
  }
}

/// Defer the evaluation of an expression.
/// The expression may borrow from the surrounding scope.
#[macro_export]
macro_rules! lazy {
  ($e:expr) => { $crate::lazy::Lazy::new(|| $e) };
}

/// A placeholder of type `$t` that panics with "not implemented" if it is
/// ever forced.  Handy when sketching out an API.
#[macro_export]
macro_rules! todo_value {
  ($t:ty) => {
    $crate::lazy::Lazy::new(|| -> $t { panic!("not implemented") })
  };
}


/// Maps that can take a `Lazy` value and only force it if the key is absent.
pub trait InsertLazy<K, V> {

  /// Insert the value for `key` unless one is there already, and return the
  /// value now associated with `key`.  `value` is forced only if it is
  /// inserted.
  fn insert_lazy<F: FnOnce() -> V>(&mut self, key: K, value: Lazy<F>) -> &mut V;
}

impl<K: Ord, V> InsertLazy<K, V> for BTreeMap<K, V> {
  fn insert_lazy<F: FnOnce() -> V>(&mut self, key: K, value: Lazy<F>) -> &mut V {
    self.entry(key).or_insert_with(|| value.force())
  }
}

impl<K: Eq + Hash, V, S: BuildHasher> InsertLazy<K, V> for HashMap<K, V, S> {
  fn insert_lazy<F: FnOnce() -> V>(&mut self, key: K, value: Lazy<F>) -> &mut V {
    self.entry(key).or_insert_with(|| value.force())
  }
}
