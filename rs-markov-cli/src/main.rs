use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use rs_markov_core::{Corpus, GenerationOptions, Order};

/// Generate sentences from a text corpus with a word-level Markov chain.
#[derive(Parser, Debug)]
#[command(name = "rs-markov", version)]
struct Cli {
	/// Corpus file, one training line per line.
	corpus: PathBuf,

	/// Context width: 1, 2 or 3 words.
	#[arg(short, long, default_value_t = Order::Two)]
	order: Order,

	/// Number of sentences to generate.
	#[arg(short = 'n', long, default_value_t = 1)]
	count: usize,

	/// Seed for reproducible output.
	#[arg(short, long)]
	seed: Option<u64>,

	/// Retries when a sentence is a verbatim corpus line.
	#[arg(long, default_value_t = 0)]
	nb_try: usize,

	/// Stop a sentence after this many words.
	#[arg(long)]
	max_words: Option<usize>,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn init_tracing(verbose: u8) {
	let log_level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
	fmt::Subscriber::builder()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.compact()
		.init();
}

fn print_sentences<R: Rng + ?Sized>(corpus: &Corpus, options: &GenerationOptions, count: usize, rng: &mut R) {
	for _ in 0..count {
		println!("{}", corpus.generate(options, rng));
	}
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);
	debug!("Parsed CLI arguments: {:?}", cli);

	let corpus = Corpus::from_file(&cli.corpus)
		.with_context(|| format!("Failed to load corpus {}", cli.corpus.display()))?;

	let mut options = GenerationOptions::new(cli.order);
	options.nb_try = cli.nb_try;
	options.set_max_words(cli.max_words)?;

	match cli.seed {
		Some(seed) => print_sentences(&corpus, &options, cli.count, &mut StdRng::seed_from_u64(seed)),
		None => print_sentences(&corpus, &options, cli.count, &mut rand::rng()),
	}

	Ok(())
}
