use clap::Parser;

use super::RawConfig;
use super::table::DEFAULT_KEY_FIELD;
use super::ui::DEFAULT_WIDTH;
use crate::cli::{CliArgs, TableKind};

fn cli(args: &[&str]) -> CliArgs {
	CliArgs::parse_from(["festdesk", "rows.json"].iter().chain(args).copied())
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = cli(&[
		"--table",
		"generic",
		"--key-field",
		"slug",
		"--search-field",
		"title",
		"--threshold",
		"0.1",
		"--page-size",
		"20",
		"--sort",
		"title",
		"--desc",
		"--hide",
		"venue",
		"--show",
		"city",
		"--title",
		"Events",
		"--theme",
		"plain",
		"--width",
		"72",
	]);

	let mut config = RawConfig::default();
	config.table.page_size = Some(50);
	config.ui.theme = Some("slate".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.table.kind.as_deref(), Some("generic"));
	assert_eq!(config.table.key_field.as_deref(), Some("slug"));
	assert_eq!(config.table.search_field.as_deref(), Some("title"));
	assert_eq!(config.table.threshold, Some(0.1));
	assert_eq!(config.table.page_size, Some(20));
	assert_eq!(config.table.sort.as_deref(), Some("title"));
	assert_eq!(config.table.descending, Some(true));
	assert_eq!(config.columns.hidden, Some(vec!["venue".into()]));
	assert_eq!(config.columns.shown, Some(vec!["city".into()]));
	assert_eq!(config.ui.title.as_deref(), Some("Events"));
	assert_eq!(config.ui.theme.as_deref(), Some("plain"));
	assert_eq!(config.ui.width, Some(72));
}

#[test]
fn resolve_fills_defaults() {
	let cli = cli(&[]);
	let config = RawConfig::default().resolve(&cli).expect("resolves");

	assert_eq!(config.table.kind, TableKind::Participants);
	assert_eq!(config.table.key_field, DEFAULT_KEY_FIELD);
	assert_eq!(config.table.threshold, None);
	assert_eq!(config.table.page_size, None);
	assert!(!config.table.descending);
	assert!(config.columns.hidden.is_empty());
	assert_eq!(config.ui.theme, "slate");
	assert_eq!(config.ui.width, DEFAULT_WIDTH);
	assert_eq!(config.view.page_index, 0);
	assert!(config.view.query.is_empty());
}

#[test]
fn view_requests_come_from_the_command_line() {
	let cli = cli(&["--query", "ann", "--page", "3", "--select", "a@x.org", "-F", "city=Pune"]);
	let config = RawConfig::default().resolve(&cli).expect("resolves");

	assert_eq!(config.view.query, "ann");
	assert_eq!(config.view.page_index, 2);
	assert_eq!(config.view.select, vec!["a@x.org"]);
	assert_eq!(config.view.filters[0].field, "city");
}

#[test]
fn column_lists_are_cleaned() {
	let mut config = RawConfig::default();
	config.columns.hidden = Some(vec![" phone ".into(), String::new(), "phone".into()]);
	let resolved = config.resolve(&cli(&[])).expect("resolves");
	assert_eq!(resolved.columns.hidden, vec!["phone"]);
}

#[test]
fn unknown_table_kinds_are_rejected() {
	let mut config = RawConfig::default();
	config.table.kind = Some("sponsors".into());
	let message = config.resolve(&cli(&[])).unwrap_err().to_string();
	assert!(message.contains("sponsors"), "{message}");
}

#[test]
fn unknown_themes_name_the_cli_flag() {
	let cli = cli(&["--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.theme"), "{message}");
	assert!(message.contains("CLI flag `--theme`"), "{message}");
}
