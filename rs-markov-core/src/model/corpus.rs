use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use tracing::info;

use super::options::GenerationOptions;
use super::token::sanitize;
use crate::error::Result;
use crate::io;

/// A named, ordered set of training lines.
///
/// Only the raw lines are kept: the chain is rebuilt from them on every
/// generation so that no graph outlives the call that walked it.
#[derive(Clone, Debug)]
pub struct Corpus {
	name: String,
	lines: Vec<String>,
	/// Normalized lines, used to detect sentences copied from the corpus.
	known: HashSet<String>,
}

impl Corpus {
	pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
		let known = lines.iter().map(|line| normalize(line)).collect();
		Self { name: name.into(), lines, known }
	}

	/// Loads a corpus from a text file, one line per entry.
	///
	/// The corpus name is the file name without extension.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let name = io::get_filename(&filepath)?;
		let lines = io::read_lines(&filepath)?;
		info!(corpus = %name, lines = lines.len(), "loaded corpus");
		Ok(Self::new(name, lines))
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn len(&self) -> usize {
		self.lines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	/// Checks whether `sentence` matches a corpus line, ignoring case and spacing.
	pub fn contains_sentence(&self, sentence: &str) -> bool {
		self.known.contains(&normalize(sentence))
	}

	/// Generates a sentence from this corpus.
	pub fn generate<R: Rng + ?Sized>(&self, options: &GenerationOptions, rng: &mut R) -> String {
		super::generator::generate_avoiding(self.lines.as_slice(), options, rng, |s| self.contains_sentence(s))
	}
}

/// Lowercased words joined by single spaces, with words left empty by
/// sanitization dropped, so a generated `"a  b"` matches the line `"a \u{2} b"`.
fn normalize(line: &str) -> String {
	let words: Vec<String> = line.split_whitespace().map(sanitize).filter(|w| !w.is_empty()).collect();
	words.join(" ").to_lowercase()
}
