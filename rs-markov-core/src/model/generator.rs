use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use super::chain::Chain;
use super::corpus::Corpus;
use super::options::GenerationOptions;
use super::order::Order;
use crate::error::{MarkovError, Result};
use crate::io;

/// File extension of corpus files picked up by [`Generator::new`].
pub const CORPUS_EXTENSION: &str = "txt";

/// Generates one sentence from `corpus` with a chain of the given order.
///
/// The chain is built from scratch, walked once and dropped. An empty corpus,
/// or one with no words, yields an empty string.
pub fn generate<I, R>(corpus: I, order: Order, rng: &mut R) -> String
where
	I: IntoIterator,
	I::Item: AsRef<str>,
	R: Rng + ?Sized,
{
	Chain::build(corpus, order).walk(rng)
}

/// Generates one sentence from `corpus` using the full set of options.
///
/// When `options.nb_try` is non-zero, a sentence equal to a corpus line
/// (ignoring case and spacing) is regenerated up to `nb_try` times.
pub fn generate_with<S, R>(corpus: &[S], options: &GenerationOptions, rng: &mut R) -> String
where
	S: AsRef<str>,
	R: Rng + ?Sized,
{
	if options.nb_try == 0 {
		return generate_avoiding(corpus, options, rng, |_| false);
	}
	let known = Corpus::new("", corpus.iter().map(|s| s.as_ref().to_owned()).collect());
	generate_avoiding(corpus, options, rng, |s| known.contains_sentence(s))
}

/// Generation loop shared by [`generate_with`] and [`Corpus::generate`].
///
/// # Behavior
/// - Builds a fresh chain per attempt.
/// - Retries while `is_known` accepts the sentence, at most `nb_try` times.
/// - Returns the last attempt if all of them collide.
pub(crate) fn generate_avoiding<S, R, F>(corpus: &[S], options: &GenerationOptions, rng: &mut R, is_known: F) -> String
where
	S: AsRef<str>,
	R: Rng + ?Sized,
	F: Fn(&str) -> bool,
{
	let attempt = |rng: &mut R| Chain::build(corpus, options.order).walk_limited(rng, options.max_words());

	let mut sentence = attempt(&mut *rng);
	let mut nb_try = options.nb_try;
	while nb_try > 0 && is_known(&sentence) {
		debug!(nb_try, "generated sentence already in corpus, retrying");
		sentence = attempt(&mut *rng);
		nb_try -= 1;
	}
	sentence
}

/// Registry of named corpora.
///
/// # Responsibilities
/// - Load corpora from a folder or individual files
/// - Generate a sentence from exactly one named corpus
///
/// Corpora are shared behind an `Arc`, so a caller holding the registry
/// behind a lock can clone one out and generate after releasing the lock.
#[derive(Debug, Default)]
pub struct Generator {
	corpora: HashMap<String, Arc<Corpus>>
}

impl Generator {
	/// Creates a generator by loading all `.txt` corpora from a directory.
	///
	/// # Parameters
	/// - `filepath`: Path to a directory containing corpus files.
	///   Both `"folder"` and `"folder/"` are accepted.
	///
	/// # Errors
	/// - Returns an error if the path is not a directory.
	/// - Returns an error if a corpus fails to load.
	///
	/// # Notes
	/// - Only files directly contained in the directory are loaded
	///   (subdirectories are ignored).
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let mut generator = Self::default();

		let folder = io::normalize_folder(filepath.as_ref());
		if !folder.is_dir() {
			return Err(MarkovError::NotADirectory(folder));
		}

		for file in io::list_files(&folder, CORPUS_EXTENSION)? {
			generator.load_corpus(folder.join(&file))?;
		}

		Ok(generator)
	}

	/// Loads a corpus file and registers it under its file stem.
	///
	/// # Errors
	/// Returns an error if a corpus with the same name is already loaded or if file I/O fails.
	pub fn load_corpus<P: AsRef<Path>>(&mut self, filepath: P) -> Result<()> {
		let corpus = Corpus::from_file(filepath)?;
		self.insert(corpus)
	}

	/// Loads a corpus file, replacing any corpus already registered under its name.
	pub fn reload_corpus<P: AsRef<Path>>(&mut self, filepath: P) -> Result<()> {
		let corpus = Corpus::from_file(filepath)?;
		self.corpora.insert(corpus.name().to_owned(), Arc::new(corpus));
		Ok(())
	}

	/// Registers an in-memory corpus.
	pub fn insert(&mut self, corpus: Corpus) -> Result<()> {
		if self.corpora.contains_key(corpus.name()) {
			return Err(MarkovError::CorpusAlreadyLoaded(corpus.name().to_owned()));
		}
		self.corpora.insert(corpus.name().to_owned(), Arc::new(corpus));
		Ok(())
	}

	pub fn remove(&mut self, name: &str) -> Option<Arc<Corpus>> {
		self.corpora.remove(name)
	}

	/// Returns a shared handle on the corpus called `name`.
	///
	/// # Errors
	/// Returns an error if no such corpus is loaded.
	pub fn corpus(&self, name: &str) -> Result<Arc<Corpus>> {
		self.corpora
			.get(name)
			.cloned()
			.ok_or_else(|| MarkovError::CorpusNotFound(name.to_owned()))
	}

	/// Returns the loaded corpus names, sorted.
	pub fn corpus_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.corpora.keys().cloned().collect();
		names.sort();
		names
	}

	/// Generates a sentence from the corpus called `name`.
	///
	/// # Errors
	/// Returns an error if no such corpus is loaded or if the options are invalid.
	pub fn predict<R: Rng + ?Sized>(&self, name: &str, options: &GenerationOptions, rng: &mut R) -> Result<String> {
		options.validate()?;
		let corpus = self.corpus(name)?;
		Ok(corpus.generate(options, rng))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn lines(v: &[&str]) -> Vec<String> {
		v.iter().map(|s| (*s).to_owned()).collect()
	}

	#[test]
	fn retries_stop_on_novel_sentence() {
		// "a x b" and "c x d" are copies, "a x d" and "c x b" are novel
		let corpus = lines(&["a x b", "c x d"]);
		let mut options = GenerationOptions::new(Order::One);
		options.nb_try = 50;

		let mut rng = StdRng::seed_from_u64(5);
		for _ in 0..20 {
			let sentence = generate_with(corpus.as_slice(), &options, &mut rng);
			assert!(sentence == "a x d" || sentence == "c x b", "got {sentence}");
		}
	}

	#[test]
	fn retries_give_up_on_forced_copy() {
		let corpus = lines(&["a b c"]);
		let mut options = GenerationOptions::new(Order::Two);
		options.nb_try = 3;
		assert_eq!(generate_with(corpus.as_slice(), &options, &mut StdRng::seed_from_u64(0)), "a b c");
	}

	#[test]
	fn loads_folder_and_predicts_by_name() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("greetings.txt"), "hello there\n").unwrap();
		std::fs::write(dir.path().join("ignored.md"), "nope\n").unwrap();

		let generator = Generator::new(dir.path()).unwrap();
		assert_eq!(generator.corpus_names(), vec!["greetings"]);

		let mut rng = StdRng::seed_from_u64(9);
		let options = GenerationOptions::new(Order::One);
		assert_eq!(generator.predict("greetings", &options, &mut rng).unwrap(), "hello there");
		assert!(matches!(
			generator.predict("missing", &options, &mut rng),
			Err(MarkovError::CorpusNotFound(_))
		));
	}

	#[test]
	fn rejects_non_directory() {
		let file = tempfile::NamedTempFile::new().unwrap();
		assert!(matches!(Generator::new(file.path()), Err(MarkovError::NotADirectory(_))));
	}

	#[test]
	fn duplicate_names_are_rejected_but_reload_replaces() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("chat.txt");
		std::fs::write(&path, "old line\n").unwrap();

		let mut generator = Generator::default();
		generator.load_corpus(&path).unwrap();
		assert!(matches!(generator.load_corpus(&path), Err(MarkovError::CorpusAlreadyLoaded(_))));

		std::fs::write(&path, "new line\nanother one\n").unwrap();
		generator.reload_corpus(&path).unwrap();
		assert_eq!(generator.corpus("chat").unwrap().len(), 2);

		assert!(generator.remove("chat").is_some());
		assert!(generator.corpus_names().is_empty());
		assert!(matches!(generator.corpus("chat"), Err(MarkovError::CorpusNotFound(_))));
	}

	#[test]
	fn corpus_handle_outlives_replacement() {
		let mut generator = Generator::default();
		generator.insert(Corpus::new("chat", lines(&["first"]))).unwrap();
		let handle = generator.corpus("chat").unwrap();

		generator.remove("chat");
		generator.insert(Corpus::new("chat", lines(&["second"]))).unwrap();

		let options = GenerationOptions::new(Order::One);
		assert_eq!(handle.generate(&options, &mut StdRng::seed_from_u64(1)), "first");
		assert_eq!(generator.predict("chat", &options, &mut StdRng::seed_from_u64(1)).unwrap(), "second");
	}
}
