use crate::flat::flatten;
use crate::optional::{each, first_of, both_of};
use proptest::prelude::*;

/// Nested vectors where most inner vectors are empty.
pub fn sparse_nested() -> impl Strategy<Value = Vec<Vec<u16>>> {
  let inner = prop_oneof![
    3 => Just(vec![]),
    1 => prop::collection::vec(any::<u16>(), 1 .. 6)
  ];
  prop::collection::vec(inner, 0 .. 32)
}

proptest! {
  #[test]
  fn prop_flatten_agrees_with_std(xs in sparse_nested()) {
    let got:  Vec<u16> = flatten(&xs).copied().collect();
    let want: Vec<u16> = xs.iter().flatten().copied().collect();
    prop_assert_eq!(got, want);
  }

  #[test]
  fn prop_flatten_len(xs in sparse_nested()) {
    let total: usize = xs.iter().map(|x| x.len()).sum();
    prop_assert_eq!(flatten(xs).count(), total);
  }

  #[test]
  fn prop_each_len(x in any::<Option<u8>>()) {
    prop_assert_eq!(each(&x).count(), usize::from(x.is_some()));
  }

  #[test]
  fn prop_first_and_both(a in any::<Option<u8>>(), b in any::<Option<u8>>()) {
    prop_assert_eq!(first_of(a, b).is_some(), a.is_some() || b.is_some());
    prop_assert_eq!(both_of(a, b).is_some(), a.is_some() && b.is_some());
    if let Some(x) = a { prop_assert_eq!(first_of(a, b), Some(x)); }
  }
}
