use festdesk_table_api::PageSummary;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const FOOTER_SEPARATOR: &str = " · ";

/// Argument bundle for the footer row below the table.
pub struct FooterContext<'a> {
	pub summary: &'a PageSummary,
	/// Plural noun for rows ("participants").
	pub count_label: &'a str,
	pub selected_count: usize,
	/// Transient message, drawn right-aligned.
	pub status: Option<&'a str>,
	pub theme: &'a Theme,
}

/// Footer text without styling, e.g.
/// `Showing 1-10 of 25 participants · Page 1 of 3 · 2 selected`.
#[must_use]
pub fn footer_text(summary: &PageSummary, count_label: &str, selected_count: usize) -> String {
	let mut parts = vec![summary.label(count_label)];
	if summary.page_count > 0 {
		parts.push(summary.page_label());
	}
	if selected_count > 0 {
		parts.push(format!("{selected_count} selected"));
	}
	parts.join(FOOTER_SEPARATOR)
}

pub fn render_footer(area: Rect, buf: &mut Buffer, context: FooterContext<'_>) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let text = footer_text(context.summary, context.count_label, context.selected_count);
	let line = Line::from(Span::styled(text, context.theme.empty));
	buf.set_line(area.x, area.y, &line, area.width);

	let Some(status) = context.status.filter(|status| !status.is_empty()) else {
		return;
	};
	let status_width = status.width() as u16;
	let used = line.width() as u16;
	// Keep at least the summary visible; drop the status when both do not fit.
	if used + 3 + status_width > area.width {
		return;
	}
	let x = area.right() - status_width;
	buf.set_line(
		x,
		area.y,
		&Line::from(Span::styled(status.to_string(), context.theme.highlight)),
		status_width,
	);
}
