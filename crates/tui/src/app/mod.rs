mod actions;

#[cfg(test)]
mod tests;

use festdesk_table_api::{TableEngine, TableObserver, TableRecord};
use ratatui::Frame;
use ratatui::layout::Margin;
use ratatui::widgets::TableState;

use crate::components::{
	FooterContext, PromptContext, PromptQuery, TableContext, render_footer, render_prompt,
	render_table,
};
use crate::input::QueryInput;
use crate::screen::{TableLabels, search_field_label, split_screen};
use crate::style::Theme;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOutcome {
	/// `true` when a row was activated with Enter.
	pub accepted: bool,
	/// Natural key of the activated row.
	pub clicked: Option<String>,
	/// Selected keys at exit.
	pub selected: Vec<String>,
	pub query: String,
}

/// Interactive table screen driving one [`TableEngine`].
pub struct App<R, O = ()> {
	engine: TableEngine<R, O>,
	labels: TableLabels,
	theme: Theme,
	input: QueryInput,
	table_state: TableState,
	status: Option<String>,
}

impl<R: TableRecord, O: TableObserver<R>> App<R, O> {
	#[must_use]
	pub fn new(engine: TableEngine<R, O>, labels: TableLabels, theme: Theme) -> Self {
		let mut input = QueryInput::new(engine.query());
		if !labels.hint.is_empty() {
			input.set_placeholder(&labels.hint, theme.empty);
		}
		let mut app = Self {
			engine,
			labels,
			theme,
			input,
			table_state: TableState::default(),
			status: None,
		};
		app.reset_cursor();
		app
	}

	#[must_use]
	pub fn engine(&self) -> &TableEngine<R, O> {
		&self.engine
	}

	pub fn engine_mut(&mut self) -> &mut TableEngine<R, O> {
		&mut self.engine
	}

	#[must_use]
	pub fn into_engine(self) -> TableEngine<R, O> {
		self.engine
	}

	/// Row of the current page under the cursor.
	#[must_use]
	pub fn cursor(&self) -> Option<usize> {
		self.table_state.selected()
	}

	#[must_use]
	pub fn status(&self) -> Option<&str> {
		self.status.as_deref()
	}

	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let areas = split_screen(area);
		let view = self.engine.render();
		let buf = frame.buffer_mut();

		render_prompt(
			areas.prompt,
			buf,
			PromptContext {
				field_label: search_field_label(&self.engine),
				query: PromptQuery::Editor(&self.input),
				placeholder: None,
				theme: &self.theme,
			},
		);
		let empty_message = self.labels.empty_message();
		render_table(
			areas.table,
			buf,
			&mut self.table_state,
			TableContext {
				view: &view,
				title: &self.labels.title,
				empty_message: &empty_message,
				theme: &self.theme,
			},
		);
		render_footer(
			areas.footer,
			buf,
			FooterContext {
				summary: &view.summary,
				count_label: &self.labels.count_label,
				selected_count: view.selected_count,
				status: self.status.as_deref(),
				theme: &self.theme,
			},
		);
	}

	fn page_len(&self) -> usize {
		self.engine.render().rows.len()
	}

	/// Put the cursor on the first row of the page, or nowhere if it is empty.
	fn reset_cursor(&mut self) {
		let selected = (self.page_len() > 0).then_some(0);
		self.table_state.select(selected);
	}

	/// Keep the cursor inside the current page after the view changed.
	fn clamp_cursor(&mut self) {
		let len = self.page_len();
		let selected = match self.table_state.selected() {
			_ if len == 0 => None,
			Some(row) => Some(row.min(len - 1)),
			None => Some(0),
		};
		self.table_state.select(selected);
	}

	fn outcome(&self, accepted: bool, clicked: Option<String>) -> TableOutcome {
		TableOutcome {
			accepted,
			clicked,
			selected: self
				.engine
				.selected_keys()
				.into_iter()
				.map(str::to_string)
				.collect(),
			query: self.input.text().to_string(),
		}
	}
}
