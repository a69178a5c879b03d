//! Treating "zero or one value" as a sequence, and a few helpers for
//! combining optional values.

/// Borrow the contents of an option as a sequence of zero or one element.
/// The sequence cannot outlive the option.
pub fn each<T>(opt: &Option<T>) -> std::option::Iter<'_, T> { opt.iter() }

/// Move the contents of an option into a sequence of zero or one element.
pub fn each_owned<T>(opt: Option<T>) -> std::option::IntoIter<T> {
  opt.into_iter()
}

/// Apply `f` to the value, if there is one.
pub fn for_each<T, F: FnOnce(T)>(opt: Option<T>, f: F) {
  if let Some(x) = opt { f(x) }
}

/// The first of the two values that is present.
pub fn first_of<T>(a: Option<T>, b: Option<T>) -> Option<T> { a.or(b) }

/// Both values, if both are present.
pub fn both_of<A, B>(a: Option<A>, b: Option<B>) -> Option<(A, B)> { a.zip(b) }

/// Construct a value only if `cond` holds.
/// `make` is not called otherwise, which makes this a good fit for `Lazy`
/// values whose construction has effects.
pub fn make_optional_if<T, F: FnOnce() -> T>(cond: bool, make: F) -> Option<T> {
  if cond { Some(make()) } else { None }
}
