use std::path::PathBuf;

use crate::cli::{FilterArg, TableKind};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub input: PathBuf,
	pub table: TableSettings,
	pub columns: ColumnSettings,
	pub view: ViewRequest,
	pub ui: UiSettings,
}

/// Engine options; `None` keeps the table's own default.
#[derive(Debug, Clone)]
pub struct TableSettings {
	pub kind: TableKind,
	/// Only consulted for generic tables.
	pub key_field: String,
	pub search_field: Option<String>,
	/// Generic tables search these fields; empty means the key field only.
	pub search_fields: Vec<String>,
	pub threshold: Option<f64>,
	pub page_size: Option<usize>,
	pub sort: Option<String>,
	pub descending: bool,
}

/// Column visibility overrides. `shown` is applied after `hidden`.
#[derive(Debug, Clone, Default)]
pub struct ColumnSettings {
	pub hidden: Vec<String>,
	pub shown: Vec<String>,
}

/// View state requested for this run.
#[derive(Debug, Clone, Default)]
pub struct ViewRequest {
	pub query: String,
	pub filters: Vec<FilterArg>,
	/// Zero-based.
	pub page_index: usize,
	pub select: Vec<String>,
	pub select_all: bool,
	pub interactive: bool,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
	pub title: Option<String>,
	pub theme: String,
	/// Columns of the plain rendering.
	pub width: u16,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(super) fn sample_config() -> ResolvedConfig {
	ResolvedConfig {
		input: PathBuf::from("participants.json"),
		table: TableSettings {
			kind: TableKind::Participants,
			key_field: "id".into(),
			search_field: None,
			search_fields: Vec::new(),
			threshold: None,
			page_size: None,
			sort: None,
			descending: false,
		},
		columns: ColumnSettings::default(),
		view: ViewRequest::default(),
		ui: UiSettings {
			title: None,
			theme: "slate".into(),
			width: 100,
		},
	}
}
