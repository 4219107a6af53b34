use super::ResolvedConfig;
use crate::cli::TableKind;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let table = &config.table;
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Input: {}", config.input.display()),
		format!("  Table: {}", table.kind.as_str()),
	];
	if table.kind == TableKind::Generic {
		lines.push(format!("  Key field: {}", table.key_field));
		if !table.search_fields.is_empty() {
			lines.push(format!("  Search fields: {}", table.search_fields.join(", ")));
		}
	}
	lines.push(format!(
		"  Search field: {}",
		table.search_field.as_deref().unwrap_or("(table default)")
	));
	lines.push(match table.threshold {
		Some(threshold) => format!("  Threshold: {threshold}"),
		None => "  Threshold: (table default)".to_string(),
	});
	lines.push(match table.page_size {
		Some(size) => format!("  Page size: {size}"),
		None => "  Page size: (table default)".to_string(),
	});
	lines.push(match &table.sort {
		Some(column) if table.descending => format!("  Sort: {column} (descending)"),
		Some(column) => format!("  Sort: {column}"),
		None => "  Sort: (original order)".to_string(),
	});
	if !config.columns.hidden.is_empty() {
		lines.push(format!("  Hidden columns: {}", config.columns.hidden.join(", ")));
	}
	if !config.columns.shown.is_empty() {
		lines.push(format!("  Shown columns: {}", config.columns.shown.join(", ")));
	}
	lines.push(format!("  Theme: {}", config.ui.theme));
	lines.push(format!("  Width: {}", config.ui.width));
	if let Some(title) = &config.ui.title {
		lines.push(format!("  Title: {title}"));
	}
	if !config.view.query.is_empty() {
		lines.push(format!("  Query: {}", config.view.query));
	}
	lines.push(format!("  Interactive: {}", bool_to_word(config.view.interactive)));
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
