//! Log sinks for the binary.
//!
//! Interactive sessions own the terminal, so by default records are appended
//! to `festdesk.log` in the data directory. `--verbose` sends them to stderr
//! instead, as does an unwritable data directory (warnings only).

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use simplelog::{
	ColorChoice, Config, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger,
};

use crate::app_dirs;

pub const LOG_FILE_NAME: &str = "festdesk.log";

/// Where log records end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

/// Install the global logger.
///
/// Returns the chosen target so callers can mention the log file.
pub fn initialize(verbose: bool) -> Result<LogTarget> {
	if verbose {
		install_stderr(LevelFilter::Debug)?;
		return Ok(LogTarget::Stderr);
	}

	match log_file_path().and_then(|path| open_log_file(&path).map(|file| (path, file))) {
		Ok((path, file)) => {
			WriteLogger::init(LevelFilter::Info, config(), file)
				.context("failed to install the file logger")?;
			Ok(LogTarget::File(path))
		}
		Err(err) => {
			install_stderr(LevelFilter::Warn)?;
			warn!("{err:#}; logging warnings to stderr");
			Ok(LogTarget::Stderr)
		}
	}
}

/// Open `path` for appending, creating it and its parent directories.
pub fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

fn install_stderr(level: LevelFilter) -> Result<()> {
	TermLogger::init(level, config(), TerminalMode::Stderr, ColorChoice::Auto)
		.context("failed to install the terminal logger")
}

/// Default location of the log file.
pub fn log_file_path() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

fn config() -> Config {
	ConfigBuilder::new()
		.add_filter_allow_str("festdesk")
		.build()
}
