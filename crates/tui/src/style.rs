//! Color themes for the table screen.

use ratatui::style::{Color, Modifier, Style};

/// Styles applied to the parts of the table screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Table border and column headers.
	pub header: Style,
	/// Row under the cursor.
	pub row_highlight: Style,
	/// Search prompt label.
	pub prompt: Style,
	/// Empty states, placeholders and the footer.
	pub empty: Style,
	/// Active sort indicator.
	pub highlight: Style,
	/// Rows whose key is selected.
	pub selected: Style,
}

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
	selected: Style::new().fg(Color::LightGreen),
};

/// No colors at all; used for plain text output.
pub const PLAIN: Theme = Theme {
	header: Style::new(),
	row_highlight: Style::new().add_modifier(Modifier::REVERSED),
	prompt: Style::new(),
	empty: Style::new(),
	highlight: Style::new(),
	selected: Style::new(),
};

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "slate";

const THEMES: [(&str, Theme); 2] = [(DEFAULT_THEME, SLATE), ("plain", PLAIN)];

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

/// Look up a built-in theme, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	THEMES
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
		.map(|(_, theme)| *theme)
}

/// Names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	THEMES.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn theme_lookup_ignores_case() {
		assert_eq!(by_name("Slate"), Some(SLATE));
		assert_eq!(by_name("PLAIN"), Some(PLAIN));
		assert_eq!(by_name("neon"), None);
		assert_eq!(names(), vec!["slate", "plain"]);
	}
}
