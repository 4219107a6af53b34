use festdesk_table_api::{ColumnDescriptor, Record, SearchField, TableEngine, TableOptions};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::screen::buffer_to_string;
use crate::style::PLAIN;

fn app(count: usize) -> App<Record> {
	let options = TableOptions::new("email")
		.with_search_fields(vec![
			SearchField::fixed("email", "Email"),
			SearchField::fixed("name", "Name"),
		])
		.with_page_size(4);
	let mut engine = TableEngine::new(
		options,
		vec![
			ColumnDescriptor::new("name", "Name").width(10),
			ColumnDescriptor::new("email", "Email").width(18),
			ColumnDescriptor::new("city", "City").hide_on_mobile(true),
		],
	)
	.expect("engine");
	engine
		.replace_records(
			(1..=count)
				.map(|index| {
					Record::new()
						.with("name", format!("Guest {index:02}"))
						.with("email", format!("guest{index:02}@fest.org"))
						.with("city", "Pune")
				})
				.collect::<Vec<_>>(),
		)
		.expect("records");
	App::new(engine, TableLabels::new("Guests", "guests"), PLAIN)
}

fn press(app: &mut App<Record>, code: KeyCode) -> Option<TableOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press_with(app: &mut App<Record>, code: KeyCode, modifiers: KeyModifiers) -> Option<TableOutcome> {
	app.handle_key(KeyEvent::new(code, modifiers))
}

fn screen(app: &mut App<Record>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(60, 10)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	buffer_to_string(terminal.backend().buffer())
}

#[test]
fn arrows_page_and_move_the_cursor() {
	let mut app = app(10);
	assert_eq!(app.cursor(), Some(0));

	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Down);
	assert_eq!(app.cursor(), Some(2));

	press(&mut app, KeyCode::Right);
	assert_eq!(app.engine().pagination().page_index(), 1);
	assert_eq!(app.cursor(), Some(0));

	press(&mut app, KeyCode::End);
	assert_eq!(app.engine().pagination().page_index(), 2);
	for _ in 0..5 {
		press(&mut app, KeyCode::Down);
	}
	assert_eq!(app.cursor(), Some(1));

	press(&mut app, KeyCode::Home);
	assert_eq!(app.engine().pagination().page_index(), 0);
}

#[test]
fn typing_searches_and_returns_to_the_first_page() {
	let mut app = app(10);
	press(&mut app, KeyCode::Right);
	for ch in "guest07".chars() {
		press(&mut app, KeyCode::Char(ch));
	}
	assert_eq!(app.engine().query(), "guest07");
	assert_eq!(app.engine().pagination().page_index(), 0);
	assert_eq!(app.engine().render().rows[0].key, "guest07@fest.org");
}

#[test]
fn tab_cycles_the_search_field() {
	let mut app = app(3);
	press(&mut app, KeyCode::Tab);
	assert_eq!(app.engine().search_field(), "name");
	assert_eq!(app.status(), Some("Searching Name"));
	assert!(screen(&mut app).starts_with(" Name ›"));
}

#[test]
fn selection_keys_toggle_rows_and_pages() {
	let mut app = app(6);
	press(&mut app, KeyCode::Down);
	press_with(&mut app, KeyCode::Char('t'), KeyModifiers::CONTROL);
	assert_eq!(app.engine().selected_keys(), vec!["guest02@fest.org"]);

	press_with(&mut app, KeyCode::Char('a'), KeyModifiers::CONTROL);
	assert_eq!(app.engine().selection().len(), 6);
	press_with(&mut app, KeyCode::Char('a'), KeyModifiers::CONTROL);
	assert!(app.engine().selection().is_empty());
}

#[test]
fn function_keys_sort_and_alt_digits_toggle_columns() {
	let mut app = app(3);
	press(&mut app, KeyCode::F(1));
	press(&mut app, KeyCode::F(1));
	assert_eq!(app.engine().render().rows[0].key, "guest03@fest.org");
	assert_eq!(app.status(), Some("Sorted by name desc"));

	press_with(&mut app, KeyCode::Char('3'), KeyModifiers::ALT);
	assert!(app.engine().is_column_visible("city"));
	assert!(screen(&mut app).contains("Pune"));

	press_with(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);
	assert!(app.engine().sort_state().column.is_none());
}

#[test]
fn enter_clicks_the_row_under_the_cursor() {
	let mut app = app(5);
	press_with(&mut app, KeyCode::Char('a'), KeyModifiers::CONTROL);
	press(&mut app, KeyCode::Down);
	let outcome = press(&mut app, KeyCode::Enter).expect("outcome");
	assert!(outcome.accepted);
	assert_eq!(outcome.clicked.as_deref(), Some("guest02@fest.org"));
	assert_eq!(outcome.selected.len(), 5);

	let outcome = press(&mut app, KeyCode::Esc).expect("outcome");
	assert!(!outcome.accepted);
	assert_eq!(outcome.clicked, None);
}

#[test]
fn enter_on_an_empty_page_does_nothing() {
	let mut app = app(0);
	assert_eq!(app.cursor(), None);
	assert_eq!(press(&mut app, KeyCode::Enter), None);
	assert!(screen(&mut app).contains("No matching guests"));
}

#[test]
fn screen_shows_footer_summary() {
	let mut app = app(10);
	press(&mut app, KeyCode::Right);
	let screen = screen(&mut app);
	assert!(
		screen.contains("Showing 5-8 of 10 guests · Page 2 of 3"),
		"{screen}"
	);
	assert!(screen.contains("guest05@fest.org"), "{screen}");
	assert!(!screen.contains("City"), "{screen}");
}
