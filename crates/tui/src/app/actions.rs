use festdesk_table_api::{TableEngine, TableObserver, TableRecord};
use log::debug;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, TableOutcome};

impl<R: TableRecord, O: TableObserver<R>> App<R, O> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<TableOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let alt = key.modifiers.contains(KeyModifiers::ALT);
		match key.code {
			KeyCode::Esc => return Some(self.outcome(false, None)),
			KeyCode::Enter => {
				if let Some(clicked) = self.click_cursor() {
					return Some(self.outcome(true, Some(clicked)));
				}
			}
			KeyCode::Tab => {
				let label = self.engine.cycle_search_field().label.to_string();
				self.status = Some(format!("Searching {label}"));
				self.reset_cursor();
			}
			KeyCode::Char('a') if ctrl => self.toggle_all(),
			KeyCode::Char('t') if ctrl => self.toggle_cursor_row(),
			KeyCode::Char('r') if ctrl => {
				self.engine.clear_sort();
				self.status = Some("Original order".to_string());
			}
			KeyCode::Char(digit @ '1'..='9') if alt => {
				self.toggle_column(digit as usize - '1' as usize);
			}
			KeyCode::F(number @ 1..=9) => self.sort_by_visible_column(usize::from(number - 1)),
			KeyCode::Up => self.move_cursor_up(),
			KeyCode::Down => self.move_cursor_down(),
			KeyCode::Left | KeyCode::PageUp => self.change_page(|engine| engine.previous_page()),
			KeyCode::Right | KeyCode::PageDown => self.change_page(|engine| engine.next_page()),
			KeyCode::Home => self.change_page(|engine| engine.first_page()),
			KeyCode::End => self.change_page(|engine| engine.last_page()),
			_ => {
				if self.input.input(key) {
					self.engine.set_query(self.input.text());
					self.status = None;
					self.reset_cursor();
				}
			}
		}
		None
	}

	fn click_cursor(&mut self) -> Option<String> {
		let row = self.table_state.selected()?;
		let key = self.engine.render().rows.get(row)?.key.to_string();
		match self.engine.click_row(row) {
			Ok(_) => Some(key),
			Err(error) => {
				self.status = Some(error.to_string());
				None
			}
		}
	}

	fn toggle_all(&mut self) {
		let checked = !self.engine.is_all_selected();
		self.engine.select_all(checked);
		debug!("select all: {checked}");
	}

	fn toggle_cursor_row(&mut self) {
		let Some(row) = self.table_state.selected() else {
			return;
		};
		let (key, checked) = {
			let view = self.engine.render();
			let Some(page_row) = view.rows.get(row) else {
				return;
			};
			(page_row.key.to_string(), !page_row.selected)
		};
		self.engine.toggle_row(&key, checked);
	}

	fn toggle_column(&mut self, index: usize) {
		let Some(column) = self.engine.columns().get(index) else {
			return;
		};
		let key = column.key.clone();
		let label = column.label.clone();
		self.status = match self.engine.toggle_column(&key) {
			Ok(true) => Some(format!("Showing {label}")),
			Ok(false) => Some(format!("Hiding {label}")),
			Err(error) => Some(error.to_string()),
		};
	}

	fn sort_by_visible_column(&mut self, index: usize) {
		let Some(column) = self.engine.visible_columns().get(index).map(|column| column.key.clone())
		else {
			return;
		};
		self.status = match self.engine.click_sort(&column) {
			Ok(state) => Some(format!("Sorted by {column} {}", state.direction)),
			Err(error) => Some(error.to_string()),
		};
		self.clamp_cursor();
	}

	fn change_page(&mut self, navigate: impl FnOnce(&mut TableEngine<R, O>) -> bool) {
		if navigate(&mut self.engine) {
			self.reset_cursor();
		}
	}

	fn move_cursor_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_cursor_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.page_len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}
}
