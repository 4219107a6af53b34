//! Build a table engine from the resolved settings, apply the requested
//! view and optionally hand it to the interactive screen.

use std::path::Path;

use anyhow::{Context, Result};
use festdesk::dataset;
use festdesk_table_api::{
	Align, ColumnDescriptor, PageSummary, Record, SearchConfig, SearchField, SortDirection,
	SortState, TableEngine, TableObserver, TableOptions, TableRecord, Value,
};
use festdesk_tables_participants as participants;
use festdesk_tables_registrations as registrations;
use festdesk_tui::{App, TableLabels, TableOutcome, render_to_string, style};
use log::{debug, info, warn};

use crate::cli::TableKind;
use crate::settings::ResolvedConfig;

/// Count label of generic tables.
const GENERIC_COUNT_LABEL: &str = "rows";

/// Everything printed once a run is over.
#[derive(Debug, Clone)]
pub(crate) struct TableReport {
	pub(crate) table: TableKind,
	pub(crate) summary: PageSummary,
	pub(crate) count_label: String,
	pub(crate) query: String,
	pub(crate) search_field: String,
	pub(crate) sort: SortState,
	/// Keys of the visible columns, in display order.
	pub(crate) columns: Vec<String>,
	pub(crate) rows: Vec<ReportRow>,
	pub(crate) selected: Vec<String>,
	/// Present when the table was browsed interactively.
	pub(crate) session: Option<TableOutcome>,
	/// Plain text rendering of the final page.
	pub(crate) screen: String,
}

/// One row of the final page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportRow {
	pub(crate) key: String,
	pub(crate) selected: bool,
	/// Rendered cell text, aligned with [`TableReport::columns`].
	pub(crate) cells: Vec<String>,
}

/// Writes table interactions to the log.
#[derive(Debug)]
struct EventLog {
	key_field: String,
}

impl<R: TableRecord> TableObserver<R> for EventLog {
	fn on_sort_change(&mut self, column: &str, direction: SortDirection) {
		info!("sorted by {column} {direction}");
	}

	fn on_selection_change(&mut self, keys: &[&str]) {
		debug!("{} rows selected", keys.len());
	}

	fn on_row_click(&mut self, record: &R) {
		info!("opened row {}", record.field(&self.key_field));
	}
}

/// Coordinates loading, configuring and presenting one table.
pub(crate) struct TableWorkflow {
	config: ResolvedConfig,
}

impl TableWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	pub(crate) fn run(self) -> Result<TableReport> {
		let input = self.config.input.as_path();
		match self.config.table.kind {
			TableKind::Participants => {
				let rows: Vec<participants::Participant> = dataset::read_rows(input)?;
				let labels = TableLabels::from_ui(&participants::descriptor().ui);
				self.run_table(rows, participants::options(), participants::columns(), labels)
			}
			TableKind::Registrations => {
				let rows: Vec<registrations::Registration> = dataset::read_rows(input)?;
				let labels = TableLabels::from_ui(&registrations::descriptor().ui);
				self.run_table(rows, registrations::options(), registrations::columns(), labels)
			}
			TableKind::Generic => {
				let records = dataset::read_records(input)?;
				let columns = generic_columns(&records);
				let options = self.generic_options();
				let labels = TableLabels::new(default_title_for(input), GENERIC_COUNT_LABEL);
				self.run_table(records, options, columns, labels)
			}
		}
	}

	/// Search the configured fields, or just the key field.
	fn generic_options(&self) -> TableOptions {
		let table = &self.config.table;
		let mut names = table.search_fields.clone();
		if names.is_empty() {
			names.push(table.key_field.clone());
		}
		let search = SearchConfig::new(names[0].clone());
		let fields = names
			.into_iter()
			.map(|name| SearchField::new(name.clone(), name))
			.collect();
		TableOptions::new(table.key_field.clone())
			.with_search_fields(fields)
			.with_search(search)
	}

	fn run_table<R: TableRecord>(
		&self,
		records: Vec<R>,
		options: TableOptions,
		columns: Vec<ColumnDescriptor<R>>,
		labels: TableLabels,
	) -> Result<TableReport> {
		let config = &self.config;
		let options = self.apply_table_settings(options);
		let key_field = options.key_field.clone();
		let mut engine = TableEngine::new(options, columns)
			.context("invalid table settings")?
			.with_observer(EventLog { key_field });

		let count = records.len();
		engine
			.replace_records(records)
			.with_context(|| format!("cannot load {}", config.input.display()))?;
		info!("loaded {count} rows from {}", config.input.display());

		self.apply_columns(&mut engine)?;
		self.apply_view(&mut engine);

		let labels = match &config.ui.title {
			Some(title) => labels.with_title(title.clone()),
			None => labels,
		};

		let session = if config.view.interactive {
			let theme = style::by_name(&config.ui.theme).unwrap_or_default();
			let mut app = App::new(engine, labels.clone(), theme);
			let outcome = app.run()?;
			engine = app.into_engine();
			Some(outcome)
		} else {
			None
		};

		Ok(TableReport::capture(
			config.table.kind,
			&engine,
			&labels,
			config.ui.width,
			session,
		))
	}

	fn apply_table_settings(&self, mut options: TableOptions) -> TableOptions {
		let table = &self.config.table;
		if let Some(field) = &table.search_field {
			options.search.field = field.clone();
		}
		if let Some(threshold) = table.threshold {
			options = options.with_threshold(threshold);
		}
		if let Some(page_size) = table.page_size {
			options = options.with_page_size(page_size);
		}
		if let Some(column) = &table.sort {
			let direction = if table.descending {
				SortDirection::Desc
			} else {
				SortDirection::Asc
			};
			options = options.with_sort(SortState::new(column.clone(), direction));
		}
		options
	}

	fn apply_columns<R: TableRecord, O: TableObserver<R>>(
		&self,
		engine: &mut TableEngine<R, O>,
	) -> Result<()> {
		let columns = &self.config.columns;
		for key in &columns.hidden {
			engine
				.set_column_visible(key, false)
				.with_context(|| format!("cannot hide column `{key}`"))?;
		}
		for key in &columns.shown {
			engine
				.set_column_visible(key, true)
				.with_context(|| format!("cannot show column `{key}`"))?;
		}
		Ok(())
	}

	/// Filters and query first, so selecting all covers the filtered rows.
	fn apply_view<R: TableRecord, O: TableObserver<R>>(&self, engine: &mut TableEngine<R, O>) {
		let view = &self.config.view;
		for filter in &view.filters {
			engine.set_filter(filter.field.clone(), filter.value.clone());
		}
		engine.set_query(view.query.clone());

		if view.select_all {
			engine.select_all(true);
		}
		for key in &view.select {
			let known = (0..engine.records().len())
				.any(|position| engine.key_of(position) == Some(key.as_str()));
			if known {
				engine.toggle_row(key, true);
			} else {
				warn!("no row with key `{key}` to select");
			}
		}

		engine.set_page_index(view.page_index);
	}
}

impl TableReport {
	fn capture<R: TableRecord, O: TableObserver<R>>(
		table: TableKind,
		engine: &TableEngine<R, O>,
		labels: &TableLabels,
		width: u16,
		session: Option<TableOutcome>,
	) -> Self {
		let view = engine.render();
		let rows = view
			.rows
			.iter()
			.map(|row| ReportRow {
				key: row.key.to_string(),
				selected: row.selected,
				cells: row.cells(&view.columns),
			})
			.collect();

		Self {
			table,
			summary: view.summary,
			count_label: labels.count_label.clone(),
			query: view.query.to_string(),
			search_field: view.search_field.to_string(),
			sort: view.sort.clone(),
			columns: view.columns.iter().map(|column| column.key.clone()).collect(),
			rows,
			selected: engine.selected_keys().into_iter().map(str::to_string).collect(),
			session,
			screen: render_to_string(engine, labels, width),
		}
	}
}

/// One column per field, numbers right-aligned.
fn generic_columns(records: &[Record]) -> Vec<ColumnDescriptor<Record>> {
	dataset::field_names(records)
		.into_iter()
		.map(|name| {
			let numeric = records
				.iter()
				.filter_map(|record| record.get(&name))
				.find(|value| !matches!(value, Value::Null))
				.is_some_and(|value| matches!(value, Value::Number(_)));
			let column = ColumnDescriptor::new(name.clone(), name);
			if numeric {
				column.align(Align::Right)
			} else {
				column
			}
		})
		.collect()
}

fn default_title_for(input: &Path) -> String {
	input
		.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.unwrap_or_else(|| input.display().to_string())
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::PathBuf;

	use tempfile::{TempDir, tempdir};

	use super::*;
	use crate::cli::FilterArg;
	use crate::settings::{ColumnSettings, TableSettings, UiSettings, ViewRequest};

	const PARTICIPANTS: &str = r#"[
		{"name": "Ann Lee", "email": "ann@fest.org", "college": "IIT Bombay", "event": "Dance", "checkedIn": true},
		{"name": "Bob Roy", "email": "bob@fest.org", "college": "NIT Trichy", "event": "Quiz"},
		{"name": "Cara Das", "email": "cara@fest.org", "college": "IIT Delhi", "event": "Dance"}
	]"#;

	fn config_for(dir: &TempDir, name: &str, contents: &str, kind: TableKind) -> ResolvedConfig {
		let input = dir.path().join(name);
		fs::write(&input, contents).expect("write rows");
		ResolvedConfig {
			input,
			table: TableSettings {
				kind,
				key_field: "id".into(),
				search_field: None,
				search_fields: Vec::new(),
				threshold: None,
				page_size: None,
				sort: None,
				descending: false,
			},
			columns: ColumnSettings::default(),
			view: ViewRequest::default(),
			ui: UiSettings {
				title: None,
				theme: "plain".into(),
				width: 100,
			},
		}
	}

	fn run(config: ResolvedConfig) -> TableReport {
		TableWorkflow::from_config(config).run().expect("runs")
	}

	#[test]
	fn participants_load_with_their_table_defaults() {
		let dir = tempdir().expect("temp dir");
		let report = run(config_for(&dir, "people.json", PARTICIPANTS, TableKind::Participants));

		assert_eq!(report.summary.total, 3);
		assert_eq!(report.search_field, "name");
		assert_eq!(report.rows[0].key, "ann@fest.org");
		assert!(report.screen.contains("Showing 1-3 of 3 participants"), "{}", report.screen);
		assert!(report.session.is_none());
	}

	#[test]
	fn filters_query_and_sort_shape_the_page() {
		let dir = tempdir().expect("temp dir");
		let mut config = config_for(&dir, "people.json", PARTICIPANTS, TableKind::Participants);
		config.view.filters = vec![FilterArg {
			field: "event".into(),
			value: Value::Text("Dance".into()),
		}];
		config.table.sort = Some("name".into());
		config.table.descending = true;

		let report = run(config);
		let keys: Vec<&str> = report.rows.iter().map(|row| row.key.as_str()).collect();
		assert_eq!(keys, vec!["cara@fest.org", "ann@fest.org"]);
		assert_eq!(report.summary.filtered, 2);
		assert_eq!(report.sort.direction, SortDirection::Desc);
	}

	#[test]
	fn select_all_follows_the_filtered_rows() {
		let dir = tempdir().expect("temp dir");
		let mut config = config_for(&dir, "people.json", PARTICIPANTS, TableKind::Participants);
		config.view.filters = vec![FilterArg {
			field: "event".into(),
			value: Value::Text("Quiz".into()),
		}];
		config.view.select_all = true;
		config.view.select = vec!["cara@fest.org".into(), "nobody@fest.org".into()];

		let mut selected = run(config).selected;
		selected.sort();
		assert_eq!(selected, vec!["bob@fest.org", "cara@fest.org"]);
	}

	#[test]
	fn hidden_columns_leave_the_report() {
		let dir = tempdir().expect("temp dir");
		let mut config = config_for(&dir, "people.json", PARTICIPANTS, TableKind::Participants);
		config.columns.hidden = vec!["email".into()];
		config.columns.shown = vec!["college".into()];

		let report = run(config);
		assert!(!report.columns.contains(&"email".to_string()));
		assert!(report.columns.contains(&"college".to_string()));
	}

	#[test]
	fn unknown_columns_are_reported() {
		let dir = tempdir().expect("temp dir");
		let mut config = config_for(&dir, "people.json", PARTICIPANTS, TableKind::Participants);
		config.columns.hidden = vec!["shoe_size".into()];

		let error = TableWorkflow::from_config(config).run().unwrap_err();
		assert!(format!("{error:#}").contains("shoe_size"), "{error:#}");
	}

	#[test]
	fn duplicate_keys_fail_to_load() {
		let dir = tempdir().expect("temp dir");
		let rows = r#"[{"name": "Ann", "email": "ann@fest.org"}, {"name": "Ann B", "email": "ann@fest.org"}]"#;
		let config = config_for(&dir, "people.json", rows, TableKind::Participants);

		let error = TableWorkflow::from_config(config).run().unwrap_err();
		assert!(format!("{error:#}").contains("duplicate"), "{error:#}");
	}

	#[test]
	fn generic_tables_take_columns_from_the_data() {
		let dir = tempdir().expect("temp dir");
		let rows = r#"[{"id": "E1", "title": "Battle of Bands", "seats": 200},
		               {"id": "E2", "title": "Hackathon", "seats": 80}]"#;
		let mut config = config_for(&dir, "events.json", rows, TableKind::Generic);
		config.table.search_fields = vec!["title".into()];
		config.table.sort = Some("seats".into());
		config.view.page_index = 0;

		let report = run(config);
		assert_eq!(report.columns, vec!["id", "title", "seats"]);
		assert_eq!(report.search_field, "title");
		assert_eq!(report.rows[0].key, "E2");
		assert!(report.screen.contains("events"), "{}", report.screen);
	}

	#[test]
	fn pages_past_the_end_are_clamped() {
		let dir = tempdir().expect("temp dir");
		let mut config = config_for(&dir, "people.json", PARTICIPANTS, TableKind::Participants);
		config.table.page_size = Some(2);
		config.view.page_index = 9;

		let report = run(config);
		assert_eq!(report.summary.page_count, 2);
		assert_eq!(report.summary.page_index, 1);
		assert_eq!(report.rows.len(), 1);
	}

	#[test]
	fn default_titles_use_the_file_stem() {
		assert_eq!(default_title_for(&PathBuf::from("/tmp/events.json")), "events");
	}
}
