use std::fmt;

use super::order::Order;
use super::token::Token;

/// An n-gram context key: the `order.width()` tokens ending at some line position.
///
/// For order 1 a context holds a single token, so successor tokens and
/// successor contexts are the same thing.
///
/// ## Invariants
/// - Never empty
/// - `Zero` slots only ever precede a `Start` slot
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Context(Vec<Token>);

impl Context {
	/// The key of the start bucket: `(ZERO, …, ZERO, START)`.
	pub fn start(order: Order) -> Self {
		Self::window(&[], -1, order)
	}

	/// Builds the context of `order.width()` tokens ending at position `end` of `words`.
	///
	/// Positions outside the line are filled with sentinels:
	/// `-1` is `START`, anything earlier is `ZERO`, and `words.len()` is `END`.
	pub(crate) fn window(words: &[String], end: isize, order: Order) -> Self {
		let first = end - order.width() as isize + 1;
		let tokens = (first..=end)
			.map(|k| match k {
				k if k < -1 => Token::Zero,
				-1 => Token::Start,
				k if (k as usize) < words.len() => Token::Word(words[k as usize].clone()),
				_ => Token::End,
			})
			.collect();
		Self(tokens)
	}

	#[cfg(test)]
	pub(crate) fn from_tokens(tokens: Vec<Token>) -> Self {
		Self(tokens)
	}

	/// The most recent slot, the one a walk emits or terminates on.
	///
	/// `None` only for an empty context, which no chain ever builds.
	pub fn newest(&self) -> Option<&Token> {
		self.0.last()
	}

	pub fn tokens(&self) -> &[Token] {
		&self.0
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for (i, token) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{token}")?;
		}
		f.write_str(")")
	}
}
