use rand::Rng;

use super::context::Context;

/// The successors observed after one context key.
///
/// Conceptually, this is a node in a Markov chain. Outgoing edges are stored
/// once per observation rather than as counts, so a successor seen in K lines
/// sits K times in the sequence and is K times more likely to be picked.
///
/// ## Responsibilities:
/// - Accumulate successor observations during construction
/// - Pick the next context with a uniform index over all observations
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bucket {
	/// Successor contexts, one entry per observation.
	successors: Vec<Context>
}

impl Bucket {
	/// Creates a new empty bucket.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one observation of `next`.
	pub fn add_successor(&mut self, next: Context) {
		self.successors.push(next);
	}

	/// Picks a successor using a uniformly drawn index.
	///
	/// Returns `None` if the bucket is empty, which ends a walk.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Context> {
		if self.successors.is_empty() {
			return None;
		}
		let index = rng.random_range(0..self.successors.len());
		self.successors.get(index)
	}

	pub fn successors(&self) -> &[Context] {
		&self.successors
	}

	pub fn len(&self) -> usize {
		self.successors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.successors.is_empty()
	}
}
