use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use tui_textarea::{CursorMove, TextArea};

/// Single-line query editor.
pub struct QueryInput {
	textarea: TextArea<'static>,
}

impl QueryInput {
	#[must_use]
	pub fn new(initial: &str) -> Self {
		let mut textarea = TextArea::new(vec![initial.to_string()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	pub fn set_placeholder(&mut self, placeholder: &str, style: Style) {
		self.textarea.set_placeholder_text(placeholder.to_string());
		self.textarea.set_placeholder_style(style);
	}

	/// Feed a key to the editor; returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if breaks_line(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) {
		Widget::render(&self.textarea, area, buf);
	}
}

fn breaks_line(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
