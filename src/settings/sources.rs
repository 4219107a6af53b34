use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use festdesk::app_dirs;

use crate::cli::CliArgs;

/// Build a [`Config`] from the default locations, `--config` files and the
/// environment, in increasing precedence.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix("festdesk")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("columns.hidden")
			.with_list_parse_key("columns.shown")
			.with_list_parse_key("table.search_fields"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Default configuration file locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".festdesk.toml"));
		files.push(current_dir.join("festdesk.toml"));
	}

	files
}
