use std::env;

use anyhow::{Error, Result, anyhow};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, ViewRequest};

mod table;
mod ui;

use table::TableSection;
use ui::{ColumnsSection, UiSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	table: TableSection,
	columns: ColumnsSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.table.apply_cli_overrides(cli);
		self.columns.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			threshold: detect_source(
				cli.threshold.is_some(),
				self.table.threshold.is_some(),
				"FESTDESK__TABLE__THRESHOLD",
				"--threshold",
				"table.threshold",
			),
			page_size: detect_source(
				cli.page_size.is_some(),
				self.table.page_size.is_some(),
				"FESTDESK__TABLE__PAGE_SIZE",
				"--page-size",
				"table.page_size",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"FESTDESK__UI__THEME",
				"--theme",
				"ui.theme",
			),
			width: detect_source(
				cli.width.is_some(),
				self.ui.width.is_some(),
				"FESTDESK__UI__WIDTH",
				"--width",
				"ui.width",
			),
		};

		let input = cli
			.input
			.clone()
			.ok_or_else(|| anyhow!("no input file given"))?;

		let config = ResolvedConfig {
			input,
			table: self.table.resolve()?,
			columns: self.columns.resolve(),
			view: view_request(cli),
			ui: self.ui.resolve(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// Per-run view state only the command line can request.
fn view_request(cli: &CliArgs) -> ViewRequest {
	ViewRequest {
		query: cli.query.clone().unwrap_or_default(),
		filters: cli.filters.clone(),
		page_index: cli
			.page
			.and_then(|page| usize::try_from(page.saturating_sub(1)).ok())
			.unwrap_or(0),
		select: cli.select.clone(),
		select_all: cli.select_all,
		interactive: cli.interactive,
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
