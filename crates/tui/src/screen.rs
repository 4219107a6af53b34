//! Layout of the full table screen and one-shot text rendering.

use festdesk_table_api::{TableEngine, TableObserver, TableRecord, TableUiDefinition};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::TableState;

use crate::components::table::TABLE_HEADER_ROWS;
use crate::components::{
	FooterContext, PromptContext, PromptQuery, TableContext, render_footer, render_prompt,
	render_table,
};
use crate::style::{PLAIN, Theme};

/// Text shown around a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLabels {
	pub title: String,
	/// Plural noun for rows ("participants").
	pub count_label: String,
	/// Placeholder for the empty search prompt.
	pub hint: String,
}

impl TableLabels {
	#[must_use]
	pub fn new(title: impl Into<String>, count_label: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			count_label: count_label.into(),
			hint: String::new(),
		}
	}

	#[must_use]
	pub fn from_ui(ui: &TableUiDefinition) -> Self {
		Self {
			title: ui.table_title.to_string(),
			count_label: ui.count_label.to_string(),
			hint: ui.hint.to_string(),
		}
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn empty_message(&self) -> String {
		format!("No matching {}", self.count_label)
	}
}

/// Areas of the screen: prompt row, table, footer row.
pub(crate) struct ScreenAreas {
	pub prompt: Rect,
	pub table: Rect,
	pub footer: Rect,
}

pub(crate) fn split_screen(area: Rect) -> ScreenAreas {
	let [prompt, table, footer] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Min(1),
		Constraint::Length(1),
	])
	.areas(area);
	ScreenAreas {
		prompt,
		table,
		footer,
	}
}

/// Label of the engine's active search field.
pub(crate) fn search_field_label<R, O>(engine: &TableEngine<R, O>) -> &str
where
	R: TableRecord,
	O: TableObserver<R>,
{
	engine
		.search_fields()
		.iter()
		.find(|field| field.key == engine.search_field())
		.map_or(engine.search_field(), |field| field.label.as_ref())
}

/// Draw the current page exactly as the interactive screen would, without a
/// cursor, and return the text.
#[must_use]
pub fn render_to_string<R, O>(engine: &TableEngine<R, O>, labels: &TableLabels, width: u16) -> String
where
	R: TableRecord,
	O: TableObserver<R>,
{
	let view = engine.render();
	// Borders, header, separator, one line per row (or the empty message).
	let table_height = 2 + TABLE_HEADER_ROWS + view.rows.len().max(1) as u16;
	let area = Rect::new(0, 0, width, table_height + 2);
	let mut buf = Buffer::empty(area);
	let areas = split_screen(area);
	let theme: &Theme = &PLAIN;

	render_prompt(
		areas.prompt,
		&mut buf,
		PromptContext {
			field_label: search_field_label(engine),
			query: PromptQuery::Text(view.query),
			placeholder: None,
			theme,
		},
	);
	let empty_message = labels.empty_message();
	render_table(
		areas.table,
		&mut buf,
		&mut TableState::default(),
		TableContext {
			view: &view,
			title: &labels.title,
			empty_message: &empty_message,
			theme,
		},
	);
	render_footer(
		areas.footer,
		&mut buf,
		FooterContext {
			summary: &view.summary,
			count_label: &labels.count_label,
			selected_count: view.selected_count,
			status: None,
			theme,
		},
	);
	buffer_to_string(&buf)
}

/// Buffer symbols as text, one line per row, trailing blanks trimmed.
#[must_use]
pub fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::with_capacity(usize::from(buf.area.height));
	for y in buf.area.top()..buf.area.bottom() {
		let mut line = String::new();
		for x in buf.area.left()..buf.area.right() {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_string());
	}
	lines.join("\n")
}

#[cfg(test)]
mod tests {
	use festdesk_table_api::{ColumnDescriptor, Record, SearchField, TableOptions};

	use super::*;

	fn engine(count: usize) -> TableEngine<Record> {
		let options = TableOptions::new("email")
			.with_search_fields(vec![
				SearchField::fixed("email", "Email"),
				SearchField::fixed("name", "Name"),
			])
			.with_page_size(3);
		let mut engine = TableEngine::new(
			options,
			vec![
				ColumnDescriptor::new("name", "Name").width(10),
				ColumnDescriptor::new("email", "Email"),
			],
		)
		.expect("engine");
		engine
			.replace_records(
				(1..=count)
					.map(|index| {
						Record::new()
							.with("name", format!("Guest {index}"))
							.with("email", format!("guest{index}@fest.org"))
					})
					.collect::<Vec<_>>(),
			)
			.expect("records");
		engine
	}

	#[test]
	fn plain_screen_holds_prompt_table_and_footer() {
		let mut engine = engine(5);
		engine.next_page();
		let screen = render_to_string(&engine, &TableLabels::new("Guests", "guests"), 60);
		let lines: Vec<&str> = screen.lines().collect();

		assert_eq!(lines.len(), 2 + 2 + 2 + 2);
		assert_eq!(lines[0], "Email ›");
		assert!(lines[1].contains("Guests"));
		assert!(screen.contains("guest4@fest.org"));
		assert!(screen.contains("guest5@fest.org"));
		assert!(!screen.contains("guest3@fest.org"));
		assert_eq!(
			lines[lines.len() - 1],
			"Showing 4-5 of 5 guests · Page 2 of 2"
		);
	}

	#[test]
	fn plain_screen_renders_empty_state() {
		let engine = engine(0);
		let screen = render_to_string(&engine, &TableLabels::new("Guests", "guests"), 40);
		assert!(screen.contains("No matching guests"), "{screen}");
		assert!(screen.ends_with("No guests"), "{screen}");
	}

	#[test]
	fn field_label_follows_active_search_field() {
		let mut engine = engine(1);
		assert_eq!(search_field_label(&engine), "Email");
		engine.cycle_search_field();
		assert_eq!(search_field_label(&engine), "Name");
	}
}
