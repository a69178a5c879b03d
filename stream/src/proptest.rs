use crate::Stream;
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::test_runner::*;

/// A stream together with the elements it is expected to produce.
#[derive(Debug, Clone)]
pub struct Sample {
  pub expected: Vec<u32>,
  pub stream:   Stream<u32>
}

impl ValueTree for Sample {
  type Value = Sample;

  fn current(&self) -> Sample { self.clone() }

  fn simplify(&mut self) -> bool { false }
  fn complicate(&mut self) -> bool { false }
}

/// How the sample stream is put together.
#[derive(Debug, Clone, Copy)]
pub enum Build {
  /// Every tail is known up front.
  Eager,
  /// Pulled from an iterator on demand.
  FromIter,
  /// Generated from a seed.
  Unfold
}

fn build(how: Build, xs: &[u32]) -> Stream<u32> {
  match how {
    Build::Eager =>
      xs.iter().rev().fold(Stream::nil(), |rest, x| Stream::cell(*x, rest)),
    Build::FromIter => Stream::from_iter_lazy(xs.to_vec()),
    Build::Unfold => {
      let xs = xs.to_vec();
      Stream::unfold(0, move |i| xs.get(i).map(|x| (*x, i + 1)))
    }
  }
}

#[derive(Debug)]
pub struct StreamStrategy { pub max_len: usize }

impl Strategy for StreamStrategy {
  type Tree  = Sample;
  type Value = Sample;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let rng = runner.rng();
    let len = (rng.next_u32() as usize) % (self.max_len + 1);
    let mut expected = Vec::with_capacity(len);
    for _ in 0 .. len {
      expected.push(rng.next_u32() % 1000)
    }
    let how = match rng.next_u32() % 3 {
      0 => Build::Eager,
      1 => Build::FromIter,
      _ => Build::Unfold
    };
    let stream = build(how, &expected);
    Ok(Sample { expected, stream })
  }
}

pub fn streams(max_len: usize) -> StreamStrategy {
  StreamStrategy { max_len }
}

/// Run a property over a range of maximum stream lengths.
/// The property returns `None` to reject an input.
pub fn do_test<S: Strategy>(s: fn(usize) -> S, p: fn(S::Value) -> Option<bool>) {
  for max_len in [0, 1, 2, 8, 64] {
    let mut cfg: Config = <_>::default();
    cfg.failure_persistence = None;
    let mut runner = TestRunner::new(cfg);
    let strategy = s(max_len);
    runner.run(&strategy, |arg| {
      match p(arg) {
        Some(result) =>
          if result { Ok(()) }
          else {
            Err(TestCaseError::Fail("unexpected result".into()))
          },
        None => Err(TestCaseError::Reject("invalid input".into()))
      }
    }).unwrap()
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_iterates_to_expected() {
    do_test(streams, |x| {
      let got: Vec<u32> = x.stream.iter().collect();
      Some(got == x.expected)
    })
  }

  #[test]
  fn test_map_agrees_with_iterator_map() {
    do_test(streams, |x| {
      let got: Vec<u64> = x.stream.map(|v| *v as u64 * 3 + 1).iter().collect();
      let want: Vec<u64> = x.expected.iter().map(|v| *v as u64 * 3 + 1).collect();
      Some(got == want)
    })
  }

  #[test]
  fn test_second_traversal_shares_nodes() {
    do_test(streams, |x| {
      if x.expected.is_empty() { return Some(x.stream.begin() == Stream::end()) }
      let mut a = x.stream.begin();
      let mut b = x.stream.begin();
      while !a.is_end() {
        a.advance();
        b.advance();
        if a != b { return Some(false) }
      }
      Some(b == Stream::end())
    })
  }

  #[test]
  fn test_length_matches_cursor_walk() {
    do_test(streams, |x| {
      let mut n  = 0;
      let mut at = x.stream.begin();
      while at != Stream::end() { n += 1; at.advance() }
      Some(n == x.expected.len())
    })
  }

  proptest! {
    #[test]
    fn prop_map_composes(xs in prop::collection::vec(any::<i32>(), 0 .. 50)) {
      let s = Stream::from_iter_lazy(xs.clone());
      let twice: Vec<i64> = s.map(|x| *x as i64).map(|x| x - 1).iter().collect();
      let want:  Vec<i64> = xs.iter().map(|x| *x as i64 - 1).collect();
      prop_assert_eq!(twice, want);
    }
  }
}
