use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, trace};

use super::bucket::Bucket;
use super::context::Context;
use super::order::Order;
use super::token::{Token, tokenize};

/// A word-level Markov chain of a fixed order.
///
/// The `Chain` maps each context key (the last `order` tokens) to the bucket
/// of contexts observed right after it. A chain is built from a corpus, walked
/// once to produce a sentence, then dropped.
///
/// # Responsibilities
/// - Build the transition graph from corpus lines
/// - Walk the graph from the start key until `END` or a dead end
///
/// # Invariants
/// - Every key and every successor has exactly `order.width()` slots
/// - The start bucket gets one entry per non-empty line
/// - No successor has a key that starts with `END`, so `END` never originates a transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
	/// Context window width.
	order: Order,

	/// Mapping from a context key to its successors
	buckets: HashMap<Context, Bucket>,
}

impl Chain {
	/// Creates an empty chain of the given order.
	pub fn new(order: Order) -> Self {
		Self { order, buckets: HashMap::new() }
	}

	/// Builds a chain from every line of `corpus`, in order.
	pub fn build<I>(corpus: I, order: Order) -> Self
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let mut chain = Self::new(order);
		let mut lines = 0usize;
		for line in corpus {
			chain.add_line(line.as_ref());
			lines += 1;
		}
		debug!(%order, lines, keys = chain.buckets.len(), "built chain");
		chain
	}

	/// Adds a corpus line to the chain.
	///
	/// For each word, the context ending at that word gets the context ending
	/// one word later as a successor. The first word's context is also
	/// recorded in the start bucket.
	///
	/// # Notes
	/// - A line with no words contributes nothing.
	pub fn add_line(&mut self, line: &str) {
		let words = tokenize(line);
		for i in 0..words.len() as isize {
			let prev = Context::window(&words, i, self.order);
			let next = Context::window(&words, i + 1, self.order);

			if i == 0 {
				self.buckets.entry(Context::start(self.order)).or_default().add_successor(prev.clone());
			}
			self.buckets.entry(prev).or_default().add_successor(next);
		}
	}

	/// Key of the bucket every walk starts from.
	pub fn start_key(&self) -> Context {
		Context::start(self.order)
	}

	/// Returns the bucket for `key`, if that key was ever seen.
	pub fn bucket(&self, key: &Context) -> Option<&Bucket> {
		self.buckets.get(key)
	}

	/// Number of distinct context keys, including the start key.
	pub fn len(&self) -> usize {
		self.buckets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buckets.is_empty()
	}

	/// Generates a sentence by walking the chain until `END` or a dead end.
	pub fn walk<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		self.walk_limited(rng, None)
	}

	/// Same as [`Chain::walk`], but stops after `max_words` words if set.
	///
	/// Only the newest slot of a picked context is checked against `END`,
	/// and it is also the word emitted.
	pub fn walk_limited<R: Rng + ?Sized>(&self, rng: &mut R, max_words: Option<usize>) -> String {
		let start = self.start_key();
		let mut current = &start;
		let mut words: Vec<&str> = Vec::new();

		while max_words.is_none_or(|max| words.len() < max) {
			let Some(next) = self.buckets.get(current).and_then(|bucket| bucket.predict(rng)) else {
				break;
			};
			let Some(word) = next.newest().and_then(Token::as_word) else {
				break;
			};
			trace!(context = %next, "walk step");
			words.push(word);
			current = next;
		}

		words.join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn ctx(tokens: &[Token]) -> Context {
		Context::from_tokens(tokens.to_vec())
	}

	fn w(s: &str) -> Token {
		Token::Word(s.to_owned())
	}

	#[test]
	fn order_one_links_words() {
		let chain = Chain::build(["a b"], Order::One);

		let start = chain.bucket(&chain.start_key()).unwrap();
		assert_eq!(start.successors(), &[ctx(&[w("a")])]);

		let after_a = chain.bucket(&ctx(&[w("a")])).unwrap();
		assert_eq!(after_a.successors(), &[ctx(&[w("b")])]);

		let after_b = chain.bucket(&ctx(&[w("b")])).unwrap();
		assert_eq!(after_b.successors()[0].newest(), Some(&Token::End));
		assert_eq!(chain.len(), 3);
	}

	#[test]
	fn order_three_pads_start() {
		let chain = Chain::build(["a b"], Order::Three);

		let start = chain.bucket(&chain.start_key()).unwrap();
		assert_eq!(start.successors()[0].tokens(), &[Token::Zero, Token::Start, w("a")]);

		let first = chain.bucket(&start.successors()[0]).unwrap();
		assert_eq!(first.successors()[0].tokens(), &[Token::Start, w("a"), w("b")]);

		let second = chain.bucket(&first.successors()[0]).unwrap();
		assert_eq!(second.successors()[0].tokens(), &[w("a"), w("b"), Token::End]);
	}

	#[test]
	fn start_bucket_counts_each_line() {
		let chain = Chain::build(["a b", "a c", "d", ""], Order::Two);
		let start = chain.bucket(&chain.start_key()).unwrap();
		assert_eq!(start.len(), 3);
		let a_starts = start.successors().iter().filter(|c| c.newest() == Some(&w("a"))).count();
		assert_eq!(a_starts, 2);
	}

	#[test]
	fn empty_lines_add_nothing() {
		let chain = Chain::build(["", "   "], Order::Two);
		assert!(chain.is_empty());
		assert_eq!(chain.walk(&mut StdRng::seed_from_u64(0)), "");
	}

	#[test]
	fn end_never_keys_a_bucket() {
		let chain = Chain::build(["a b c", "c b a", "b"], Order::One);
		assert!(chain.bucket(&ctx(&[Token::End])).is_none());
	}

	#[test]
	fn walk_limited_caps_words() {
		let chain = Chain::build(["a b c d e"], Order::One);
		let mut rng = StdRng::seed_from_u64(3);
		assert_eq!(chain.walk_limited(&mut rng, Some(2)), "a b");
		assert_eq!(chain.walk_limited(&mut rng, Some(0)), "");
	}
}
