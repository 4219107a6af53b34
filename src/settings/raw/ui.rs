use festdesk_tui::style::DEFAULT_THEME;
use serde::Deserialize;

use super::super::resolved::{ColumnSettings, UiSettings};
use super::table::sanitize_names;
use crate::cli::CliArgs;

/// Width of the plain rendering when none is configured.
pub(crate) const DEFAULT_WIDTH: u16 = 100;

/// `[columns]` values as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ColumnsSection {
	pub(super) hidden: Option<Vec<String>>,
	pub(super) shown: Option<Vec<String>>,
}

impl ColumnsSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(hidden) = &cli.hide {
			self.hidden = Some(hidden.clone());
		}
		if let Some(shown) = &cli.show {
			self.shown = Some(shown.clone());
		}
	}

	pub(super) fn resolve(self) -> ColumnSettings {
		ColumnSettings {
			hidden: self.hidden.map(sanitize_names).unwrap_or_default(),
			shown: self.shown.map(sanitize_names).unwrap_or_default(),
		}
	}
}

/// `[ui]` values as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) width: Option<u16>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(width) = cli.width {
			self.width = Some(width);
		}
	}

	pub(super) fn resolve(self) -> UiSettings {
		UiSettings {
			title: self.title.filter(|title| !title.trim().is_empty()),
			theme: self
				.theme
				.map(|name| name.trim().to_ascii_lowercase())
				.unwrap_or_else(|| DEFAULT_THEME.to_string()),
			width: self.width.unwrap_or(DEFAULT_WIDTH),
		}
	}
}
