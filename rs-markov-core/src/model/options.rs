use serde::{Deserialize, Serialize};

use super::order::Order;
use crate::error::{MarkovError, Result};

/// Parameters for one generation request.
///
/// # Responsibilities
/// - Select the chain order
/// - Control how many times a sentence equal to a corpus line is regenerated
/// - Optionally cap the number of generated words
///
/// # Invariants
/// - `max_words`, when set, is at least 1
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationOptions {
	/// Context window width of the chain.
	pub order: Order,

	/// Number of retries if the generated sentence already is a corpus line.
	pub nb_try: usize,

	/// Hard cap on emitted words (`None` = walk until `END`).
	max_words: Option<usize>,
}

impl GenerationOptions {
	/// Options for a plain walk of the given order: no retry, no cap.
	pub fn new(order: Order) -> Self {
		Self { order, ..Self::default() }
	}

	/// Returns the current word cap.
	pub fn max_words(&self) -> Option<usize> {
		self.max_words
	}

	/// Sets the word cap.
	///
	/// # Errors
	/// Returns an error if the cap is `Some(0)`.
	pub fn set_max_words(&mut self, max_words: Option<usize>) -> Result<()> {
		if max_words == Some(0) {
			return Err(MarkovError::InvalidOption("max_words must be at least 1".to_owned()));
		}
		self.max_words = max_words;
		Ok(())
	}

	/// Re-checks invariants, for values built by deserialization.
	pub fn validate(&self) -> Result<()> {
		if self.max_words == Some(0) {
			return Err(MarkovError::InvalidOption("max_words must be at least 1".to_owned()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_plain_order_two_walk() {
		let options = GenerationOptions::default();
		assert_eq!(options.order, Order::Two);
		assert_eq!(options.nb_try, 0);
		assert_eq!(options.max_words(), None);
	}

	#[test]
	fn zero_word_cap_is_rejected() {
		let mut options = GenerationOptions::new(Order::One);
		assert!(options.set_max_words(Some(0)).is_err());
		assert!(options.set_max_words(Some(5)).is_ok());
		assert_eq!(options.max_words(), Some(5));
		assert!(options.set_max_words(None).is_ok());
	}
}
