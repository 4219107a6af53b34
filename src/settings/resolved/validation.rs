use festdesk_tui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Narrowest plain rendering that still fits a few columns.
pub(crate) const MIN_WIDTH: u16 = 30;

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if let Some(threshold) = config.table.threshold
		&& !(0.0..=1.0).contains(&threshold)
	{
		return Err(ConfigError::invalid(
			"table.threshold",
			threshold.to_string(),
			sources.source_for_threshold(),
			"must be between 0.0 and 1.0",
		));
	}

	if let Some(page_size) = config.table.page_size
		&& page_size == 0
	{
		return Err(ConfigError::invalid(
			"table.page_size",
			page_size.to_string(),
			sources.source_for_page_size(),
			"must be at least 1",
		));
	}

	if style::by_name(&config.ui.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.ui.theme.clone(),
			sources.source_for_theme(),
			format!("expected one of {}", style::names().join(", ")),
		));
	}

	if config.ui.width < MIN_WIDTH {
		return Err(ConfigError::invalid(
			"ui.width",
			config.ui.width.to_string(),
			sources.source_for_width(),
			format!("must be at least {MIN_WIDTH}"),
		));
	}

	Ok(())
}
