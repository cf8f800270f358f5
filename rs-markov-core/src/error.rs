use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around the chain model: option validation and corpus loading.
///
/// Building and walking a chain never fails; these only come from the
/// surfaces that feed it (parsing an order, reading corpus files, looking up
/// a corpus by name).
#[derive(Error, Debug)]
pub enum MarkovError {
	/// The order selector is not 1, 2 or 3.
	#[error("invalid order {0}, expected 1, 2 or 3")]
	InvalidOrder(usize),

	/// The order selector could not be parsed as an integer.
	#[error("invalid order '{0}', expected 1, 2 or 3")]
	UnparsableOrder(String),

	/// A generation option is outside its valid range.
	#[error("invalid option: {0}")]
	InvalidOption(String),

	/// Reading a corpus file or directory failed.
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A directory was expected.
	#[error("expected a directory, got: {}", .0.display())]
	NotADirectory(PathBuf),

	/// No corpus with that name is loaded.
	#[error("corpus '{0}' not found")]
	CorpusNotFound(String),

	/// A corpus with that name is already loaded.
	#[error("corpus '{0}' already loaded")]
	CorpusAlreadyLoaded(String),
}

impl MarkovError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MarkovError>;
