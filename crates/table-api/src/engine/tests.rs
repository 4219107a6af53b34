use super::*;
use crate::sort::SortDirection;
use crate::value::Record;

fn participant(index: usize) -> Record {
	Record::new()
		.with("name", format!("Person {index:02}"))
		.with("email", format!("person{index:02}@fest.org"))
		.with("event", if index % 2 == 0 { "Hackathon" } else { "Quiz" })
		.with("score", index as f64)
}

fn columns() -> Vec<ColumnDescriptor<Record>> {
	vec![
		ColumnDescriptor::new("name", "Name"),
		ColumnDescriptor::new("email", "Email"),
		ColumnDescriptor::new("event", "Event").hide_on_mobile(true),
		ColumnDescriptor::new("score", "Score"),
		ColumnDescriptor::new("actions", "").sortable(false),
	]
}

fn options() -> TableOptions {
	TableOptions::new("email")
		.with_search_fields(vec![
			SearchField::fixed("name", "Name"),
			SearchField::fixed("email", "Email"),
		])
		.with_search(SearchConfig::new("email"))
}

fn engine_with(count: usize) -> TableEngine<Record> {
	let mut engine = TableEngine::new(options(), columns()).expect("engine");
	engine
		.replace_records((1..=count).map(participant).collect::<Vec<_>>())
		.expect("records");
	engine
}

#[derive(Default)]
struct Recorder {
	sorts: Vec<(String, SortDirection)>,
	selections: Vec<usize>,
	clicks: Vec<String>,
}

impl TableObserver<Record> for Recorder {
	fn on_sort_change(&mut self, column: &str, direction: SortDirection) {
		self.sorts.push((column.to_string(), direction));
	}

	fn on_selection_change(&mut self, keys: &[&str]) {
		self.selections.push(keys.len());
	}

	fn on_row_click(&mut self, record: &Record) {
		self.clicks.push(record.field("email").display().into_owned());
	}
}

#[test]
fn twenty_five_records_paginate_into_three_pages() {
	let mut engine = engine_with(25);
	assert_eq!(engine.page_count(), 3);
	assert_eq!(engine.render().summary.page_index, 0);

	assert!(engine.next_page());
	assert!(engine.next_page());
	let view = engine.render();
	assert_eq!(view.summary.page_index, 2);
	assert!(!view.can_next);
	let names: Vec<String> = view
		.rows
		.iter()
		.map(|row| row.record.field("name").display().into_owned())
		.collect();
	assert_eq!(
		names,
		vec!["Person 21", "Person 22", "Person 23", "Person 24", "Person 25"]
	);
	assert!(!engine.next_page());
}

#[test]
fn pages_concatenate_to_the_sorted_view() {
	let mut engine = engine_with(23);
	engine.set_page_size(4);
	engine.click_sort("score").expect("sort");
	engine.click_sort("score").expect("sort desc");

	let mut seen = Vec::new();
	engine.first_page();
	loop {
		seen.extend(engine.render().rows.iter().map(|row| row.row_index));
		if !engine.next_page() {
			break;
		}
	}
	assert_eq!(seen, (0..23).collect::<Vec<_>>());
	assert_eq!(
		engine.records()[engine.view_positions()[0]].field("score"),
		crate::value::FieldRef::Number(23.0)
	);
}

#[test]
fn page_index_beyond_the_end_is_clamped() {
	let mut engine = engine_with(25);
	engine.set_page_index(9);
	assert_eq!(engine.pagination().page_index(), 2);

	engine
		.replace_records((1..=12).map(participant).collect::<Vec<_>>())
		.expect("shrunk");
	assert_eq!(engine.render().summary.page_index, 1);

	engine.replace_records(Vec::new()).expect("empty");
	let view = engine.render();
	assert_eq!(view.summary.page_index, 0);
	assert!(view.is_empty());
}

#[test]
fn query_change_returns_to_first_page() {
	let mut engine = engine_with(25);
	engine.last_page();
	engine.set_query("person0");
	assert_eq!(engine.pagination().page_index(), 0);

	engine.last_page();
	engine.set_search_field("name").expect("field");
	assert_eq!(engine.pagination().page_index(), 0);
	assert_eq!(
		engine.set_search_field("phone"),
		Err(TableError::unknown_search_field("phone"))
	);
}

#[test]
fn empty_query_keeps_collection_order() {
	let mut engine = engine_with(5);
	engine.set_query("person03");
	engine.set_query("");
	assert_eq!(engine.view_positions(), &[0, 1, 2, 3, 4]);
}

fn contacts() -> Vec<Record> {
	["ann@fest.org", "bob@college.edu", "zed@uni.ac"]
		.into_iter()
		.map(|email| Record::new().with("email", email).with("event", "Quiz"))
		.collect()
}

#[test]
fn selection_survives_filtering() {
	let mut engine = TableEngine::new(options(), columns()).expect("engine");
	engine.replace_records(contacts()).expect("records");
	engine.toggle_row("ann@fest.org", true);

	engine.set_query("bob@");
	assert_eq!(engine.view_positions(), &[1]);
	assert!(engine.selection().contains("ann@fest.org"));

	engine.set_query("");
	assert!(engine.selection().contains("ann@fest.org"));
	assert!(engine.render().rows[0].selected);
}

#[test]
fn select_all_covers_only_the_filtered_view() {
	let records: Vec<Record> = (1..=10)
		.map(|index| {
			participant(index).with("event", if index <= 3 { "Dance" } else { "Quiz" })
		})
		.collect();
	let mut engine = TableEngine::new(options().with_page_size(2), columns()).expect("engine");
	engine.replace_records(records).expect("records");
	engine.set_filter("event", "Dance");
	assert_eq!(engine.view_len(), 3);

	engine.select_all(true);
	assert_eq!(engine.selection().len(), 3);
	assert!(engine.is_all_selected());
	assert_eq!(
		engine.selected_keys(),
		vec!["person01@fest.org", "person02@fest.org", "person03@fest.org"]
	);

	engine.clear_filters();
	assert!(!engine.is_all_selected());
	assert_eq!(engine.selection().len(), 3);

	engine.select_all(false);
	assert!(engine.selection().is_empty());
}

#[test]
fn ghost_keys_are_not_pruned() {
	let mut engine = engine_with(3);
	engine.toggle_row("person02@fest.org", true);
	engine
		.replace_records(vec![participant(1)])
		.expect("records");
	assert_eq!(engine.selected_keys(), vec!["person02@fest.org"]);
	assert!(engine.selected_records().is_empty());
}

#[test]
fn nulls_sort_last_in_both_directions() {
	let mut engine = TableEngine::new(
		TableOptions::new("name"),
		vec![ColumnDescriptor::new("name", "Name"), ColumnDescriptor::new("score", "Score")],
	)
	.expect("engine");
	engine
		.replace_records(vec![
			Record::new().with("name", "Bob").with("score", Value::Null),
			Record::new().with("name", "Ann").with("score", 5.0),
		])
		.expect("records");

	engine.click_sort("score").expect("asc");
	let order: Vec<&str> = engine.render().rows.iter().map(|row| row.key).collect();
	assert_eq!(order, vec!["Ann", "Bob"]);

	engine.click_sort("score").expect("desc");
	assert_eq!(engine.sort_state().direction, SortDirection::Desc);
	let order: Vec<&str> = engine.render().rows.iter().map(|row| row.key).collect();
	assert_eq!(order, vec!["Ann", "Bob"]);
}

#[test]
fn header_clicks_validate_columns() {
	let mut engine = engine_with(3);
	assert_eq!(
		engine.click_sort("actions"),
		Err(TableError::UnsortableColumn {
			column: "actions".into()
		})
	);
	assert_eq!(
		engine.click_sort("missing"),
		Err(TableError::unknown_column("missing"))
	);
}

#[test]
fn observer_receives_interactions() {
	let mut engine = engine_with(12).with_observer(Recorder::default());
	engine.click_sort("name").expect("sort");
	engine.click_sort("name").expect("sort");
	engine.click_sort("email").expect("sort");
	engine.select_all(true);
	engine.toggle_row("person01@fest.org", false);
	engine.toggle_row("person01@fest.org", false);
	engine.next_page();
	let clicked = engine.click_row(0).expect("row").field("email").display().into_owned();

	let recorder = engine.observer();
	assert_eq!(
		recorder.sorts,
		vec![
			("name".to_string(), SortDirection::Asc),
			("name".to_string(), SortDirection::Desc),
			("email".to_string(), SortDirection::Asc),
		]
	);
	assert_eq!(recorder.selections, vec![12, 11]);
	assert_eq!(recorder.clicks, vec![clicked.clone()]);
	assert_eq!(clicked, "person11@fest.org");
	assert!(matches!(
		engine.click_row(5),
		Err(TableError::RowOutOfRange { position: 5, len: 2 })
	));
}

#[test]
fn external_sort_control_only_notifies() {
	let mut engine = TableEngine::new(options().with_sort_control(SortControl::External), columns())
		.expect("engine")
		.with_observer(Recorder::default());
	engine
		.replace_records((1..=3).rev().map(participant).collect::<Vec<_>>())
		.expect("records");

	let proposed = engine.click_sort("score").expect("sort");
	assert_eq!(proposed, SortState::new("score", SortDirection::Asc));
	assert_eq!(engine.sort_state(), &SortState::default());
	assert_eq!(engine.observer().sorts.len(), 1);

	engine.set_sort_state(proposed).expect("apply");
	assert_eq!(engine.view_positions(), &[0, 1, 2]);
}

#[test]
fn duplicate_and_missing_keys_are_rejected() {
	let mut engine = engine_with(2);
	let duplicate = vec![participant(1), participant(1)];
	assert!(matches!(
		engine.replace_records(duplicate),
		Err(TableError::DuplicateKey { first: 0, second: 1, .. })
	));
	assert_eq!(engine.records().len(), 2);

	let missing = vec![participant(1), Record::new().with("name", "anon")];
	assert_eq!(
		engine.replace_records(missing),
		Err(TableError::MissingKey {
			field: "email".into(),
			row: 1
		})
	);
}

#[test]
fn column_visibility_shapes_rendered_cells() {
	let mut engine = engine_with(1);
	assert_eq!(engine.render().headers(), vec!["Name", "Email", "Score", ""]);

	assert_eq!(engine.toggle_column("event"), Ok(true));
	engine.set_column_visible("actions", false).expect("actions");
	let view = engine.render();
	assert_eq!(view.headers(), vec!["Name", "Email", "Event", "Score"]);
	assert_eq!(
		view.cells(),
		vec![vec![
			"Person 01".to_string(),
			"person01@fest.org".to_string(),
			"Quiz".to_string(),
			"1".to_string(),
		]]
	);
	assert!(engine.toggle_column("nope").is_err());
}

#[test]
fn late_columns_are_seeded_without_resetting_toggles() {
	let mut engine = engine_with(1);
	engine.toggle_column("name").expect("name");
	let mut later = columns();
	later.push(ColumnDescriptor::new("team", "Team"));
	later.push(ColumnDescriptor::new("city", "City").hide_on_mobile(true));
	engine.set_columns(later);
	assert!(!engine.is_column_visible("name"));
	assert!(engine.is_column_visible("team"));
	assert!(!engine.is_column_visible("city"));
}

#[test]
fn cycling_search_fields_wraps() {
	let mut engine = engine_with(1);
	assert_eq!(engine.search_field(), "email");
	assert_eq!(engine.cycle_search_field().key, "name");
	assert_eq!(engine.cycle_search_field().key, "email");
}

#[test]
fn invalid_configuration_is_rejected() {
	assert!(matches!(
		TableEngine::new(options().with_threshold(1.5), columns()),
		Err(TableError::InvalidThreshold { .. })
	));
	assert!(matches!(
		TableEngine::new(
			options().with_search(SearchConfig::new("phone")),
			columns()
		),
		Err(TableError::UnknownSearchField { .. })
	));
	assert!(matches!(
		TableEngine::new(
			options().with_sort(SortState::new("actions", SortDirection::Asc)),
			columns()
		),
		Err(TableError::UnsortableColumn { .. })
	));
}

#[test]
fn summary_reflects_filtering() {
	let mut engine = engine_with(25);
	engine.set_filter("event", "Hackathon");
	let summary = engine.render().summary;
	assert_eq!(summary.filtered, 12);
	assert_eq!(summary.total, 25);
	assert_eq!(summary.first_row, 1);
	assert_eq!(summary.last_row, 10);
}
