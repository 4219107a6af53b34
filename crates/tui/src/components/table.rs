use festdesk_table_api::{Align, ColumnDescriptor, SortDirection, SortState, TableRecord, TableView};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, StatefulWidget, Table, TableState,
	Widget,
};

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
pub(crate) const CHECKBOX_WIDTH: u16 = 3;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Argument bundle for drawing one page of a table.
pub struct TableContext<'v, 'a, R> {
	pub view: &'v TableView<'a, R>,
	pub title: &'v str,
	/// Shown in place of rows when the page is empty.
	pub empty_message: &'v str,
	pub theme: &'v Theme,
}

/// Draw the bordered table for the current page.
pub fn render_table<R: TableRecord>(
	area: Rect,
	buf: &mut Buffer,
	table_state: &mut TableState,
	context: TableContext<'_, '_, R>,
) {
	let TableContext {
		view,
		title,
		empty_message,
		theme,
	} = context;

	let border_style = Style::default().fg(theme.header.fg.unwrap_or(ratatui::style::Color::Reset));
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(border_style)
		.title(title.to_string());
	let inner = block.inner(area);
	block.render(area, buf);

	let header = Row::new(header_cells(view, theme))
		.style(border_style)
		.height(1)
		.bottom_margin(1);

	let rows = view.rows.iter().map(|row| {
		let mut cells = Vec::with_capacity(view.columns.len() + 1);
		cells.push(Cell::from(checkbox(row.selected)));
		cells.extend(
			view.columns
				.iter()
				.map(|column| aligned_cell(column.render(row.record, row.row_index), column.align)),
		);
		let style = if row.selected {
			theme.selected
		} else {
			Style::default()
		};
		Row::new(cells).style(style)
	});

	let table = Table::new(rows, column_constraints(&view.columns))
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	StatefulWidget::render(table, inner, buf, table_state);

	render_header_separator(inner, buf, theme);

	if view.is_empty() && inner.height > TABLE_HEADER_ROWS {
		let message_area = Rect {
			y: inner.y + TABLE_HEADER_ROWS,
			height: inner.height - TABLE_HEADER_ROWS,
			..inner
		};
		Paragraph::new(Span::styled(empty_message.to_string(), theme.empty))
			.alignment(Alignment::Center)
			.render(message_area, buf);
	}
}

/// Width constraints: the checkbox column, then one per visible column.
pub(crate) fn column_constraints<R>(columns: &[&ColumnDescriptor<R>]) -> Vec<Constraint> {
	let mut widths = Vec::with_capacity(columns.len() + 1);
	widths.push(Constraint::Length(CHECKBOX_WIDTH));
	widths.extend(
		columns
			.iter()
			.map(|column| column.width.map_or(Constraint::Fill(1), Constraint::Length)),
	);
	widths
}

fn header_cells<R>(view: &TableView<'_, R>, theme: &Theme) -> Vec<Cell<'static>> {
	let select_all = if view.all_selected {
		"[x]"
	} else if view.selected_count > 0 {
		"[-]"
	} else {
		"[ ]"
	};

	let mut cells = Vec::with_capacity(view.columns.len() + 1);
	cells.push(Cell::from(select_all));
	cells.extend(view.columns.iter().map(|column| {
		let mut spans = vec![Span::raw(column.label.clone())];
		if let Some(indicator) = sort_indicator(view.sort, &column.key) {
			spans.push(Span::styled(indicator, theme.highlight));
		}
		Cell::from(Line::from(spans).alignment(alignment(column.align)))
	}));
	cells
}

fn sort_indicator(sort: &SortState, column: &str) -> Option<&'static str> {
	if !sort.is_sorted_by(column) {
		return None;
	}
	Some(match sort.direction {
		SortDirection::Asc => " ▲",
		SortDirection::Desc => " ▼",
	})
}

fn checkbox(selected: bool) -> &'static str {
	if selected { "[x]" } else { "[ ]" }
}

fn aligned_cell(text: String, align: Align) -> Cell<'static> {
	Cell::from(Line::from(text).alignment(alignment(align)))
}

fn alignment(align: Align) -> Alignment {
	match align {
		Align::Left => Alignment::Left,
		Align::Center => Alignment::Center,
		Align::Right => Alignment::Right,
	}
}

fn render_header_separator(area: Rect, buf: &mut Buffer, theme: &Theme) {
	if area.height <= 1 || area.width <= 2 {
		return;
	}
	let middle = "─".repeat(usize::from(area.width - 2));
	let style = Style::default().fg(theme.header.fg.unwrap_or(ratatui::style::Color::Reset));
	let line = Line::from(vec![Span::raw(" "), Span::styled(middle, style), Span::raw(" ")]);
	buf.set_line(area.x, area.y + 1, &line, area.width);
}

#[cfg(test)]
mod tests {
	use festdesk_table_api::{ColumnDescriptor, Record, TableEngine, TableOptions};

	use super::*;
	use crate::style::PLAIN;
	use crate::screen::buffer_to_string;

	fn engine() -> TableEngine<Record> {
		let mut engine = TableEngine::new(
			TableOptions::new("email"),
			vec![
				ColumnDescriptor::new("email", "Email").width(16),
				ColumnDescriptor::new("score", "Score").width(5).align(Align::Right),
			],
		)
		.expect("engine");
		engine
			.replace_records(vec![
				Record::new().with("email", "ann@fest.org").with("score", 7.0),
				Record::new().with("email", "bob@fest.org").with("score", 12.0),
			])
			.expect("records");
		engine
	}

	fn draw(engine: &TableEngine<Record>) -> String {
		let area = Rect::new(0, 0, 32, 7);
		let mut buf = Buffer::empty(area);
		let view = engine.render();
		render_table(
			area,
			&mut buf,
			&mut TableState::default(),
			TableContext {
				view: &view,
				title: "Guests",
				empty_message: "Nothing here",
				theme: &PLAIN,
			},
		);
		buffer_to_string(&buf)
	}

	#[test]
	fn rows_show_checkboxes_and_aligned_cells() {
		let mut engine = engine();
		engine.toggle_row("bob@fest.org", true);
		let screen = draw(&engine);

		assert!(screen.contains("Guests"), "{screen}");
		assert!(screen.contains("[-] Email"), "{screen}");
		assert!(line_with(&screen, "[ ] ann@fest.org").ends_with('7'), "{screen}");
		assert!(line_with(&screen, "[x] bob@fest.org").ends_with("12"), "{screen}");
	}

	fn line_with<'s>(screen: &'s str, needle: &str) -> &'s str {
		screen
			.lines()
			.find(|line| line.contains(needle))
			.map(|line| line.trim_end().trim_end_matches('│').trim_end())
			.unwrap_or_default()
	}

	#[test]
	fn active_sort_column_carries_an_indicator() {
		let mut engine = engine();
		engine.click_sort("email").expect("sort");
		engine.click_sort("email").expect("sort desc");
		let screen = draw(&engine);
		assert!(screen.contains("Email ▼"), "{screen}");
		assert!(!screen.contains('▲'), "{screen}");
	}

	#[test]
	fn empty_pages_render_a_message() {
		let mut engine = engine();
		engine.set_filter("email", "nobody@fest.org");
		let screen = draw(&engine);
		assert!(screen.contains("Nothing here"), "{screen}");
		assert!(!screen.contains("ann@fest.org"), "{screen}");
	}

	#[test]
	fn widths_follow_descriptors() {
		let engine = engine();
		let constraints = column_constraints(&engine.visible_columns());
		assert_eq!(
			constraints,
			vec![
				Constraint::Length(CHECKBOX_WIDTH),
				Constraint::Length(16),
				Constraint::Length(5),
			]
		);
	}
}
