//! Markov-chain sentence generation library.
//!
//! This crate builds a frequency-weighted successor graph from a corpus of
//! text lines and produces new sentences by randomly walking it:
//! - Word tokenization with reserved sentinel stripping
//! - Chains of order 1, 2 or 3 sharing one builder and one walker
//! - Randomness passed explicitly, so a seeded generator gives reproducible output
//! - A registry of named corpora loaded from disk
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rs_markov_core::{Order, generate};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! assert_eq!(generate(["a b c"], Order::Two, &mut rng), "a b c");
//! ```

/// Chain model and generation logic.
pub mod model;

/// Error types.
pub mod error;

/// I/O utilities (file loading, path helpers).
pub mod io;

pub use error::{MarkovError, Result};
pub use model::corpus::Corpus;
pub use model::generator::{Generator, generate, generate_with};
pub use model::options::GenerationOptions;
pub use model::order::Order;
