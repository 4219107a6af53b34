use anyhow::Result;
use serde_json::json;

use crate::workflow::TableReport;

/// Print the final page as text, followed by what the session picked.
pub(crate) fn print_plain(report: &TableReport) {
	print!("{}", report.screen);

	if let Some(session) = &report.session {
		match &session.clicked {
			Some(key) if session.accepted => println!("Opened {key}"),
			_ => println!("Closed (query: '{}')", session.query),
		}
	}
	if !report.selected.is_empty() {
		println!("Selected: {}", report.selected.join(", "));
	}
}

/// Format the report as a JSON string.
pub(crate) fn format_report_json(report: &TableReport) -> Result<String> {
	let summary = &report.summary;
	let rows: Vec<serde_json::Value> = report
		.rows
		.iter()
		.map(|row| {
			json!({
				"key": row.key,
				"selected": row.selected,
				"cells": row.cells,
			})
		})
		.collect();
	let session = report.session.as_ref().map(|session| {
		json!({
			"accepted": session.accepted,
			"clicked": session.clicked,
			"query": session.query,
		})
	});

	let payload = json!({
		"table": report.table.as_str(),
		"label": summary.label(&report.count_label),
		"page": summary.page_index + 1,
		"page_count": summary.page_count,
		"page_size": summary.page_size,
		"total": summary.total,
		"filtered": summary.filtered,
		"query": report.query,
		"search_field": report.search_field,
		"sort": report.sort,
		"columns": report.columns,
		"rows": rows,
		"selected": report.selected,
		"session": session,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the report.
pub(crate) fn print_json(report: &TableReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}
