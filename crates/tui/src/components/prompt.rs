use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

const PROMPT_SEPARATOR: &str = " › ";

/// Where the prompt's query text comes from.
pub enum PromptQuery<'a> {
	/// Live editor; draws its own cursor.
	Editor(&'a QueryInput),
	/// Fixed text, as in one-shot output.
	Text(&'a str),
}

/// Argument bundle for rendering the search prompt row.
pub struct PromptContext<'a> {
	/// Label of the field being searched.
	pub field_label: &'a str,
	pub query: PromptQuery<'a>,
	/// Shown dimmed when the query is empty.
	pub placeholder: Option<&'a str>,
	pub theme: &'a Theme,
}

/// Render `<field> › <query>` on the first row of `area`.
pub fn render_prompt(area: Rect, buf: &mut Buffer, context: PromptContext<'_>) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let PromptContext {
		field_label,
		query,
		placeholder,
		theme,
	} = context;

	let label = Line::from(vec![
		Span::styled(field_label.to_string(), theme.prompt),
		Span::styled(PROMPT_SEPARATOR, theme.prompt),
	]);
	let label_width = (field_label.width() + PROMPT_SEPARATOR.width()) as u16;
	buf.set_line(area.x, area.y, &label, area.width);
	if label_width >= area.width {
		return;
	}

	let input_area = Rect {
		x: area.x + label_width,
		y: area.y,
		width: area.width - label_width,
		height: 1,
	};
	let text = match query {
		PromptQuery::Editor(input) => {
			input.render(input_area, buf);
			input.text()
		}
		PromptQuery::Text(text) => {
			buf.set_line(input_area.x, input_area.y, &Line::raw(text), input_area.width);
			text
		}
	};

	if text.is_empty()
		&& let Some(placeholder) = placeholder
	{
		let line = Line::from(Span::styled(placeholder.to_string(), theme.empty));
		buf.set_line(input_area.x, input_area.y, &line, input_area.width);
	}
}
