use std::path::PathBuf;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use rs_markov_core::{Generator, MarkovError};

mod config;
mod routes;

use config::ServerConfig;

/// Command-line arguments of the HTTP server.
#[derive(Parser, Debug)]
#[command(name = "rs-markov-server", about = "Serve Markov-chain sentences over HTTP", version)]
struct Cli {
	/// Path to a TOML config file (defaults to ./rs-markov.toml when present).
	#[arg(short, long, env = "RS_MARKOV_CONFIG")]
	config: Option<PathBuf>,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn init_tracing(verbose: u8) {
	let log_level = match verbose {
		0 => "warn,actix_web=info",
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

/// Main entry point for the server.
///
/// Loads every corpus found in the configured data folder, wraps the registry
/// in a `Mutex` and starts an Actix-web HTTP server.
///
/// # Notes
/// - A missing data folder is not fatal: the server starts empty and corpora
///   can be loaded later through `PUT /v1/load_corpus` once the folder exists.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let config = ServerConfig::load(cli.config.as_deref())?;

	let generator = match Generator::new(&config.data_dir) {
		Ok(g) => g,
		Err(MarkovError::NotADirectory(path)) => {
			warn!("data folder {} does not exist, starting without corpora", path.display());
			Generator::default()
		}
		Err(e) => return Err(e).context("Failed to load corpora"),
	};
	info!(corpora = ?generator.corpus_names(), "generator ready");

	let bind = (config.host.clone(), config.port);
	let workers = config.workers;
	let allow_any_origin = config.allow_any_origin;
	let shared_generator = web::Data::new(Mutex::new(generator));
	let shared_config = web::Data::new(config);

	info!("listening on {}:{}", bind.0, bind.1);
	HttpServer::new(move || {
		let cors = if allow_any_origin { Cors::permissive() } else { Cors::default() };
		App::new()
			.wrap(Logger::default())
			.wrap(cors)
			.app_data(shared_generator.clone())
			.app_data(shared_config.clone())
			.configure(routes::configure)
	})
		.workers(workers)
		.bind(bind)
		.context("Failed to bind server address")?
		.run()
		.await?;

	Ok(())
}
