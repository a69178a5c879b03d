use std::collections::BTreeMap;
use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use functional_adaptors::{both_of, each, first_of, flatten, for_each, lazy, InsertLazy};
use lazy_stream::Stream;
use num::BigUint;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
  name = "lazy-stream-demo",
  about = "Small programs built on lazy, memoized streams",
  version
)]
struct Cli {
  #[command(subcommand)]
  command: Command
}

#[derive(Subcommand)]
enum Command {
  /// Print Fibonacci numbers
  Fib {
    #[arg(short, long, default_value_t = 94)]
    count: usize
  },
  /// Print the Fibonacci numbers after the first, each decremented by one
  FibMap {
    #[arg(short, long, default_value_t = 5)]
    count: usize
  },
  /// ROT13 the given text, or standard input
  Rot13 {
    text: Option<String>
  },
  /// Flatten a vector of vectors with many empty entries
  Flatten,
  /// Use optional values as sequences
  Optional,
  /// Insert into a map with values built only when needed
  Lazy
}

fn fibs() -> Stream<BigUint> {
  Stream::unfold((BigUint::from(0_u32), BigUint::from(1_u32)), |(a, b)| {
    let next = &a + &b;
    Some((a, (b, next)))
  })
}

fn rot13(c: char) -> char {
  match c {
    'A' ..= 'Z' => (((c as u8 - b'A') + 13) % 26 + b'A') as char,
    'a' ..= 'z' => (((c as u8 - b'a') + 13) % 26 + b'a') as char,
    _           => c
  }
}

/// Characters are read from `input` one at a time, as the stream is walked.
fn rot13_stream<I>(mut input: I) -> Stream<char>
  where I: Iterator<Item = char> + 'static
{
  match input.next() {
    Some(c) => Stream::lazy(rot13(c), move || rot13_stream(input)),
    None    => Stream::nil()
  }
}

fn run_fib(count: usize) {
  // Consuming iteration: nodes are released as soon as they are printed.
  for (i, x) in fibs().into_iter().take(count).enumerate() {
    println!("fib({}) = {}", i, x)
  }
}

fn run_fib_map(count: usize) {
  let one = BigUint::from(1_u32);
  let shifted = fibs().tail().map(move |n| n - &one);
  for x in shifted.into_iter().take(count) {
    println!("{}", x)
  }
}

fn run_rot13(text: Option<String>) -> Result<()> {
  let input = match text {
    Some(text) => text,
    None => {
      let mut buf = String::new();
      std::io::stdin().read_to_string(&mut buf).context("reading standard input")?;
      buf
    }
  };
  debug!(chars = input.chars().count(), "rot13 input");
  let chars: Vec<char> = input.chars().collect();
  let out: String = rot13_stream(chars.into_iter()).into_iter().collect();
  print!("{}", out);
  Ok(())
}

fn run_flatten() {
  let nested: Vec<Vec<i32>> =
    vec![vec![], vec![], vec![0], vec![1, 2, 3], vec![], vec![], vec![],
         vec![4], vec![], vec![5], vec![]];
  for x in flatten(&nested) {
    println!("{}", x)
  }
}

fn run_optional() {
  let print_str  = |s: &str| println!("{}", s);
  let print_pair = |(a, b): (&str, &str)| println!("{} {}", a, b);

  let present = Some("present");
  let missing: Option<&str> = None;

  for_each(present, print_str);
  for_each(missing, print_str);
  for_each(first_of(Some("correct"), Some("incorrect")), print_str);
  for_each(first_of(missing, Some("correct")), print_str);
  for_each(first_of(missing, missing), print_str);

  for_each(both_of(missing, missing), print_pair);
  for_each(both_of(Some("a"), missing), print_pair);
  for_each(both_of(missing, Some("b")), print_pair);
  for_each(both_of(Some("corr"), Some("ect")), print_pair);

  let maybe_a: Option<i32> = None;
  let maybe_b = Some(1);
  for a in each(&maybe_a) { println!("{}", a) }
  for b in each(&maybe_b) { println!("{}", b) }
}

fn run_lazy() {
  let mut example = BTreeMap::new();
  for i in 0 .. 10 {
    print!("{} ", i);
    example.insert_lazy(i / 2, lazy!({ print!("blip"); i }));
    println!();
  }
  debug!(entries = example.len(), "lazy insertion done");
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  match cli.command {
    Command::Fib { count }    => { info!(count, "fibonacci"); run_fib(count) }
    Command::FibMap { count } => { info!(count, "mapped fibonacci"); run_fib_map(count) }
    Command::Rot13 { text }   => run_rot13(text)?,
    Command::Flatten          => run_flatten(),
    Command::Optional         => run_optional(),
    Command::Lazy             => run_lazy()
  }
  Ok(())
}
