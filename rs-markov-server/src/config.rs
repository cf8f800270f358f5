use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use rs_markov_core::GenerationOptions;
use serde::Deserialize;
use tracing::{debug, info};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "rs-markov.toml";

/// Server settings, loaded from TOML.
///
/// Every field is optional in the file:
///
/// ```toml
/// host = "0.0.0.0"
/// port = 8080
/// data_dir = "./data"
/// max_nb_try = 100
///
/// [generation]
/// order = 3
/// nb_try = 5
/// max_words = 40
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	/// Folder holding the `.txt` corpora.
	pub data_dir: PathBuf,
	/// Number of HTTP worker threads.
	pub workers: usize,
	/// Send permissive CORS headers (for browser front ends on another origin).
	pub allow_any_origin: bool,
	/// Largest `nb_try` a request may ask for. Each retry rebuilds the chain.
	pub max_nb_try: usize,
	/// Defaults for parameters a `/v1/generate` request leaves out.
	pub generation: GenerationOptions,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_owned(),
			port: 5000,
			data_dir: PathBuf::from("./data"),
			workers: num_cpus::get(),
			allow_any_origin: false,
			max_nb_try: 100,
			generation: GenerationOptions::default(),
		}
	}
}

impl ServerConfig {
	/// Loads the configuration.
	///
	/// - With an explicit `path`, the file must exist.
	/// - Otherwise `rs-markov.toml` is read if present, else defaults are used.
	pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
		let config = match path {
			Some(path) => Self::from_file(path)?,
			None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?,
			None => {
				debug!("no config file, using defaults");
				Self::default()
			}
		};
		config.validate()?;
		Ok(config)
	}

	fn from_file(path: &Path) -> anyhow::Result<Self> {
		let content = fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		let config = Self::from_toml(&content)
			.with_context(|| format!("Failed to parse config file: {}", path.display()))?;
		info!("loaded config from {}", path.display());
		Ok(config)
	}

	pub fn from_toml(content: &str) -> anyhow::Result<Self> {
		Ok(toml::from_str(content)?)
	}

	pub fn validate(&self) -> anyhow::Result<()> {
		if self.workers == 0 {
			bail!("workers must be at least 1");
		}
		if self.generation.nb_try > self.max_nb_try {
			bail!(
				"generation.nb_try ({}) exceeds max_nb_try ({})",
				self.generation.nb_try,
				self.max_nb_try
			);
		}
		self.generation.validate()?;
		Ok(())
	}
}
