use std::fmt;

/// Where an effective setting came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins of the settings that validation can reject.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) threshold: Option<SettingSource>,
	pub(crate) page_size: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) width: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_threshold(&self) -> SettingSource {
		self.threshold
			.clone()
			.unwrap_or(SettingSource::ConfigKey("table.threshold"))
	}

	pub(crate) fn source_for_page_size(&self) -> SettingSource {
		self.page_size
			.clone()
			.unwrap_or(SettingSource::ConfigKey("table.page_size"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme.clone().unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_width(&self) -> SettingSource {
		self.width.clone().unwrap_or(SettingSource::ConfigKey("ui.width"))
	}
}
