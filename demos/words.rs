//! Builds two heaps from word lists, merges them and prints the words in order
//!
//! ```bash
//! cargo run --example words
//! ```

use rust_binomial_heap::BinomialHeap;

const FIRST: &[&str] = &[
    "binomial", "heap", "merge", "degree", "root", "sibling", "parent", "child",
];

const SECOND: &[&str] = &[
    "key", "value", "handle", "union", "extract", "decrease", "delete",
];

fn main() {
    let mut first = BinomialHeap::from_keys(FIRST.iter().copied());
    let second = BinomialHeap::from_keys(SECOND.iter().copied());

    first.union(second);

    let words: Vec<&str> = first.drain().collect();
    println!("{}", words.join(" "));
}
