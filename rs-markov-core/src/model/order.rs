use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MarkovError;

/// Width of the context window used to key the transition graph.
///
/// Serialized as the plain integer `1`, `2` or `3`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub enum Order {
	One,
	#[default]
	Two,
	Three,
}

impl Order {
	/// All supported orders, smallest first.
	pub const ALL: [Order; 3] = [Order::One, Order::Two, Order::Three];

	/// Number of tokens in a context key.
	pub fn width(self) -> usize {
		match self {
			Order::One => 1,
			Order::Two => 2,
			Order::Three => 3,
		}
	}
}

impl TryFrom<usize> for Order {
	type Error = MarkovError;

	fn try_from(value: usize) -> Result<Self, Self::Error> {
		match value {
			1 => Ok(Order::One),
			2 => Ok(Order::Two),
			3 => Ok(Order::Three),
			n => Err(MarkovError::InvalidOrder(n)),
		}
	}
}

impl From<Order> for usize {
	fn from(order: Order) -> Self {
		order.width()
	}
}

impl FromStr for Order {
	type Err = MarkovError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let n: usize = s.trim().parse().map_err(|_| MarkovError::UnparsableOrder(s.to_owned()))?;
		Order::try_from(n)
	}
}

impl fmt::Display for Order {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.width())
	}
}
