use std::sync::Mutex;

use actix_web::{HttpResponse, Responder, get, put, web};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use tracing::warn;

use rs_markov_core::io::list_files;
use rs_markov_core::model::generator::CORPUS_EXTENSION;
use rs_markov_core::{GenerationOptions, Generator, MarkovError, Order};

use crate::config::ServerConfig;

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize, Debug)]
struct GenerateParams {
	corpus: Option<String>,
	order: Option<usize>,
	nb_try: Option<usize>,
	max_words: Option<usize>,
	seed: Option<u64>
}

#[derive(Deserialize, Debug)]
struct CorpusQuery {
	name: Option<String>
}

impl GenerateParams {
	/// Merges the request parameters over the configured defaults.
	///
	/// `nb_try` above `max_nb_try` is rejected.
	fn options(&self, defaults: &GenerationOptions, max_nb_try: usize) -> Result<GenerationOptions, MarkovError> {
		let mut options = *defaults;
		if let Some(order) = self.order {
			options.order = Order::try_from(order)?;
		}
		if let Some(nb_try) = self.nb_try {
			if nb_try > max_nb_try {
				return Err(MarkovError::InvalidOption(format!("nb_try must be at most {max_nb_try}")));
			}
			options.nb_try = nb_try;
		}
		if self.max_words.is_some() {
			options.set_max_words(self.max_words)?;
		}
		options.validate()?;
		Ok(options)
	}

	/// Picks the requested corpus, or the only loaded one if none was named.
	fn corpus_name(&self, generator: &Generator) -> Result<String, String> {
		match &self.corpus {
			Some(name) if !name.trim().is_empty() => Ok(name.trim().to_owned()),
			_ => {
				let names = generator.corpus_names();
				match names.as_slice() {
					[only] => Ok(only.clone()),
					[] => Err("No corpus loaded".to_owned()),
					_ => Err("Missing corpus name".to_owned()),
				}
			}
		}
	}
}

fn error_response(e: MarkovError) -> HttpResponse {
	match e {
		MarkovError::CorpusNotFound(_) => HttpResponse::NotFound().body(e.to_string()),
		MarkovError::InvalidOrder(_) | MarkovError::UnparsableOrder(_) | MarkovError::InvalidOption(_) => {
			HttpResponse::BadRequest().body(e.to_string())
		}
		_ => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one sentence from a single loaded corpus.
/// Returns the sentence (possibly empty) as the response body.
///
/// The registry lock is only held to look the corpus up.
#[get("/v1/generate")]
async fn get_generated(
	data: web::Data<Mutex<Generator>>,
	config: web::Data<ServerConfig>,
	query: web::Query<GenerateParams>,
) -> impl Responder {
	let options = match query.options(&config.generation, config.max_nb_try) {
		Ok(o) => o,
		Err(e) => {
			warn!("rejected generate request: {e}");
			return error_response(e);
		}
	};

	let corpus = {
		let generator = match data.lock() {
			Ok(g) => g,
			Err(_) => {
				warn!("generator lock poisoned");
				return HttpResponse::InternalServerError().body("Generator lock failed");
			}
		};

		let name = match query.corpus_name(&generator) {
			Ok(n) => n,
			Err(e) => return HttpResponse::BadRequest().body(e),
		};

		match generator.corpus(&name) {
			Ok(corpus) => corpus,
			Err(e) => return error_response(e),
		}
	};

	let sentence = match query.seed {
		Some(seed) => corpus.generate(&options, &mut StdRng::seed_from_u64(seed)),
		None => corpus.generate(&options, &mut rand::rng()),
	};
	HttpResponse::Ok().body(sentence)
}

#[get("/v1/corpora")]
async fn get_corpora(config: web::Data<ServerConfig>) -> impl Responder {
	match list_files(&config.data_dir, CORPUS_EXTENSION) {
		Ok(files) => {
			let suffix = format!(".{CORPUS_EXTENSION}");
			let names: Vec<&str> = files.iter().map(|f| f.trim_end_matches(suffix.as_str())).collect();
			HttpResponse::Ok().body(names.join("\n"))
		}
		Err(e) => {
			warn!("failed to list corpora: {e}");
			HttpResponse::InternalServerError().body("Failed to list corpora")
		}
	}
}

#[get("/v1/loaded_corpora")]
async fn get_loaded_corpora(data: web::Data<Mutex<Generator>>) -> impl Responder {
	let generator = match data.lock() {
		Ok(g) => g,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};
	HttpResponse::Ok().body(generator.corpus_names().join("\n"))
}

/// HTTP PUT endpoint `/v1/load_corpus`
///
/// (Re)loads `<data_dir>/<name>.txt`, replacing a corpus of the same name.
#[put("/v1/load_corpus")]
async fn put_corpus(
	data: web::Data<Mutex<Generator>>,
	config: web::Data<ServerConfig>,
	query: web::Query<CorpusQuery>,
) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};
	if name.contains(['/', '\\']) || name.contains("..") {
		return HttpResponse::BadRequest().body("Invalid corpus name");
	}

	let path = config.data_dir.join(format!("{name}.{CORPUS_EXTENSION}"));

	let mut generator = match data.lock() {
		Ok(g) => g,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	match generator.reload_corpus(&path) {
		Ok(_) => HttpResponse::Ok().body("Corpus loaded successfully"),
		Err(MarkovError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
			HttpResponse::NotFound().body(format!("Corpus '{name}' not found"))
		}
		Err(e) => {
			warn!("failed to load corpus {name}: {e}");
			HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}"))
		}
	}
}

/// Registers every endpoint on an actix `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated)
		.service(get_corpora)
		.service(get_loaded_corpora)
		.service(put_corpus);
}
