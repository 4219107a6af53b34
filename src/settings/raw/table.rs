use anyhow::{Result, anyhow};
use clap::ValueEnum;
use serde::Deserialize;

use super::super::resolved::TableSettings;
use crate::cli::{CliArgs, TableKind};

/// Key field of generic tables when none is configured.
pub(crate) const DEFAULT_KEY_FIELD: &str = "id";

/// `[table]` values as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TableSection {
	pub(super) kind: Option<String>,
	pub(super) key_field: Option<String>,
	pub(super) search_field: Option<String>,
	pub(super) search_fields: Option<Vec<String>>,
	pub(super) threshold: Option<f64>,
	pub(super) page_size: Option<usize>,
	pub(super) sort: Option<String>,
	pub(super) descending: Option<bool>,
}

impl TableSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(kind) = cli.table {
			self.kind = Some(kind.as_str().to_string());
		}
		if let Some(field) = cli.key_field.clone() {
			self.key_field = Some(field);
		}
		if let Some(field) = cli.search_field.clone() {
			self.search_field = Some(field);
		}
		if let Some(value) = cli.threshold {
			self.threshold = Some(value);
		}
		if let Some(value) = cli.page_size {
			self.page_size = Some(value);
		}
		if let Some(column) = cli.sort.clone() {
			self.sort = Some(column);
			self.descending = Some(cli.descending);
		}
	}

	pub(super) fn resolve(self) -> Result<TableSettings> {
		let kind = match self.kind.as_deref() {
			Some(name) => parse_kind(name)?,
			None => TableKind::default(),
		};

		Ok(TableSettings {
			kind,
			key_field: trimmed(self.key_field).unwrap_or_else(|| DEFAULT_KEY_FIELD.to_string()),
			search_field: trimmed(self.search_field),
			search_fields: self
				.search_fields
				.map(sanitize_names)
				.unwrap_or_default(),
			threshold: self.threshold,
			page_size: self.page_size,
			sort: trimmed(self.sort),
			descending: self.descending.unwrap_or(false),
		})
	}
}

fn parse_kind(name: &str) -> Result<TableKind> {
	TableKind::from_str(name.trim(), true).map_err(|_| {
		anyhow!("unknown table kind `{name}` (expected participants, registrations or generic)")
	})
}

fn trimmed(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

/// Trim names and drop empty or repeated ones.
pub(super) fn sanitize_names(values: Vec<String>) -> Vec<String> {
	let mut cleaned: Vec<String> = Vec::new();
	for value in values {
		let value = value.trim();
		if value.is_empty() || cleaned.iter().any(|seen| seen == value) {
			continue;
		}
		cleaned.push(value.to_string());
	}
	cleaned
}
