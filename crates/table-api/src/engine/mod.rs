//! The table engine: one instance per mounted table.
//!
//! Every mutation synchronously recomputes the filtered and sorted view and
//! re-validates the page index, so [`TableEngine::render`] is a cheap,
//! read-only snapshot.

mod observer;
mod options;
mod view;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace};

pub use observer::TableObserver;
pub use options::{SortControl, TableOptions};
pub use view::{PageRow, TableView};

use crate::column::ColumnDescriptor;
use crate::descriptors::SearchField;
use crate::error::TableError;
use crate::filter::{EqualityFilter, FilterPipeline};
use crate::pagination::PaginationState;
use crate::search::{SearchConfig, SearchIndex, is_valid_threshold};
use crate::selection::SelectionTracker;
use crate::sort::{SortState, sort_view};
use crate::value::{TableRecord, Value};
use crate::visibility::ColumnVisibility;

/// Search, filter, sort, pagination, selection and column visibility over a
/// caller-supplied record collection.
pub struct TableEngine<R, O = ()> {
	records: Arc<[R]>,
	keys: Vec<String>,
	generation: u64,
	columns: Vec<ColumnDescriptor<R>>,
	key_field: String,
	search_fields: Vec<SearchField>,
	search: SearchConfig,
	pipeline: FilterPipeline,
	index: Option<SearchIndex>,
	sort: SortState,
	sort_control: SortControl,
	pagination: PaginationState,
	selection: SelectionTracker,
	visibility: ColumnVisibility,
	view: Vec<usize>,
	observer: O,
}

impl<R: TableRecord> TableEngine<R, ()> {
	/// Mount an empty table.
	///
	/// # Errors
	///
	/// Fails when the search field is not among `options.search_fields`, the
	/// threshold is outside `0.0..=1.0`, or the initial sort column is not a
	/// sortable column.
	pub fn new(options: TableOptions, columns: Vec<ColumnDescriptor<R>>) -> Result<Self, TableError> {
		let TableOptions {
			key_field,
			mut search_fields,
			search,
			page_size,
			sort,
			sort_control,
		} = options;

		if search_fields.is_empty() {
			search_fields.push(SearchField::new(search.field.clone(), search.field.clone()));
		}
		if !search_fields.iter().any(|field| field.key == search.field) {
			return Err(TableError::unknown_search_field(search.field));
		}
		if !is_valid_threshold(search.threshold) {
			return Err(TableError::InvalidThreshold {
				value: search.threshold,
			});
		}
		if let Some(column) = sort.column.as_deref() {
			sortable_column(&columns, column)?;
		}

		let visibility = ColumnVisibility::seeded(&columns);
		Ok(Self {
			records: Arc::from(Vec::new()),
			keys: Vec::new(),
			generation: 0,
			columns,
			key_field,
			search_fields,
			search,
			pipeline: FilterPipeline::new(),
			index: None,
			sort,
			sort_control,
			pagination: PaginationState::new(page_size),
			selection: SelectionTracker::new(),
			visibility,
			view: Vec::new(),
			observer: (),
		})
	}
}

impl<R: TableRecord, O: TableObserver<R>> TableEngine<R, O> {
	/// Attach an observer, replacing the current one.
	#[must_use]
	pub fn with_observer<P: TableObserver<R>>(self, observer: P) -> TableEngine<R, P> {
		TableEngine {
			records: self.records,
			keys: self.keys,
			generation: self.generation,
			columns: self.columns,
			key_field: self.key_field,
			search_fields: self.search_fields,
			search: self.search,
			pipeline: self.pipeline,
			index: self.index,
			sort: self.sort,
			sort_control: self.sort_control,
			pagination: self.pagination,
			selection: self.selection,
			visibility: self.visibility,
			view: self.view,
			observer,
		}
	}

	#[must_use]
	pub fn observer(&self) -> &O {
		&self.observer
	}

	pub fn observer_mut(&mut self) -> &mut O {
		&mut self.observer
	}

	// Records

	/// Swap in a freshly fetched collection.
	///
	/// Every record must carry a unique, non-null natural key. On error the
	/// previous collection stays mounted. Selection is left untouched.
	///
	/// # Errors
	///
	/// [`TableError::MissingKey`] or [`TableError::DuplicateKey`].
	pub fn replace_records(&mut self, records: impl Into<Arc<[R]>>) -> Result<(), TableError> {
		let records = records.into();
		let keys = natural_keys(&records, &self.key_field)?;
		self.records = records;
		self.keys = keys;
		self.generation += 1;
		debug!(
			"mounted {} records (generation {})",
			self.records.len(),
			self.generation
		);
		self.refresh();
		Ok(())
	}

	#[must_use]
	pub fn records(&self) -> &[R] {
		&self.records
	}

	#[must_use]
	pub fn key_field(&self) -> &str {
		&self.key_field
	}

	/// Natural key of the record at `position` in the collection.
	#[must_use]
	pub fn key_of(&self, position: usize) -> Option<&str> {
		self.keys.get(position).map(String::as_str)
	}

	// Search and filters

	#[must_use]
	pub fn query(&self) -> &str {
		self.pipeline.query()
	}

	/// Replace the search text; a change returns to the first page.
	pub fn set_query(&mut self, query: impl Into<String>) {
		if self.pipeline.set_query(query) {
			self.pagination.reset();
			self.refresh();
		}
	}

	#[must_use]
	pub fn search_field(&self) -> &str {
		&self.search.field
	}

	#[must_use]
	pub fn search_fields(&self) -> &[SearchField] {
		&self.search_fields
	}

	/// Search a different field; a change returns to the first page.
	///
	/// # Errors
	///
	/// [`TableError::UnknownSearchField`] if `field` is not configured.
	pub fn set_search_field(&mut self, field: &str) -> Result<(), TableError> {
		if !self.search_fields.iter().any(|candidate| candidate.key == field) {
			return Err(TableError::unknown_search_field(field));
		}
		if self.search.field != field {
			self.search.field = field.to_string();
			self.pagination.reset();
			self.refresh();
		}
		Ok(())
	}

	/// Move to the next configured search field, wrapping around.
	pub fn cycle_search_field(&mut self) -> &SearchField {
		let current = self
			.search_fields
			.iter()
			.position(|field| field.key == self.search.field)
			.unwrap_or(0);
		let next = (current + 1) % self.search_fields.len();
		let key = self.search_fields[next].key.to_string();
		if self.search.field != key {
			self.search.field = key;
			self.pagination.reset();
			self.refresh();
		}
		&self.search_fields[next]
	}

	#[must_use]
	pub fn threshold(&self) -> f64 {
		self.search.threshold
	}

	/// # Errors
	///
	/// [`TableError::InvalidThreshold`] outside `0.0..=1.0`.
	pub fn set_threshold(&mut self, threshold: f64) -> Result<(), TableError> {
		if !is_valid_threshold(threshold) {
			return Err(TableError::InvalidThreshold { value: threshold });
		}
		self.search.threshold = threshold;
		self.refresh();
		Ok(())
	}

	#[must_use]
	pub fn filters(&self) -> &[EqualityFilter] {
		self.pipeline.filters()
	}

	/// Restrict the view to records whose `field` equals `value`.
	pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<Value>) {
		self.pipeline.set_filter(EqualityFilter::new(field, value));
		self.refresh();
	}

	pub fn remove_filter(&mut self, field: &str) -> bool {
		let removed = self.pipeline.remove_filter(field);
		if removed {
			self.refresh();
		}
		removed
	}

	pub fn clear_filters(&mut self) {
		self.pipeline.clear_filters();
		self.refresh();
	}

	// Sorting

	#[must_use]
	pub fn sort_state(&self) -> &SortState {
		&self.sort
	}

	#[must_use]
	pub fn sort_control(&self) -> SortControl {
		self.sort_control
	}

	/// Handle a header click and notify the observer.
	///
	/// Under [`SortControl::External`] the returned state is only proposed;
	/// the caller applies it with [`set_sort_state`](Self::set_sort_state).
	///
	/// # Errors
	///
	/// Unknown or non-sortable columns.
	pub fn click_sort(&mut self, column: &str) -> Result<SortState, TableError> {
		sortable_column(&self.columns, column)?;
		let next = self.sort.toggled(column);
		self.observer.on_sort_change(column, next.direction);
		if self.sort_control == SortControl::Engine {
			self.sort = next.clone();
			self.refresh();
		}
		Ok(next)
	}

	/// Apply a sort state directly, without notifying.
	///
	/// # Errors
	///
	/// [`TableError::UnknownColumn`] when the column is not declared.
	pub fn set_sort_state(&mut self, state: SortState) -> Result<(), TableError> {
		if let Some(column) = state.column.as_deref()
			&& !self.columns.iter().any(|candidate| candidate.key == column)
		{
			return Err(TableError::unknown_column(column));
		}
		self.sort = state;
		self.refresh();
		Ok(())
	}

	pub fn clear_sort(&mut self) {
		self.sort = SortState::default();
		self.refresh();
	}

	// Pagination

	#[must_use]
	pub fn pagination(&self) -> &PaginationState {
		&self.pagination
	}

	#[must_use]
	pub fn page_count(&self) -> usize {
		self.pagination.page_count(self.view.len())
	}

	pub fn first_page(&mut self) -> bool {
		self.pagination.first()
	}

	pub fn previous_page(&mut self) -> bool {
		self.pagination.previous()
	}

	pub fn next_page(&mut self) -> bool {
		self.pagination.next(self.view.len())
	}

	pub fn last_page(&mut self) -> bool {
		self.pagination.last(self.view.len())
	}

	/// Jump to a page; out-of-range indices land on the last page.
	pub fn set_page_index(&mut self, page_index: usize) {
		self.pagination.set_page_index(page_index);
		self.pagination.clamp(self.view.len());
	}

	/// Change the page size and return to the first page.
	pub fn set_page_size(&mut self, page_size: usize) {
		self.pagination.set_page_size(page_size);
	}

	// Selection

	#[must_use]
	pub fn selection(&self) -> &SelectionTracker {
		&self.selection
	}

	#[must_use]
	pub fn selected_keys(&self) -> Vec<&str> {
		self.selection.keys().collect()
	}

	/// Selected records still present in the collection, in collection order.
	#[must_use]
	pub fn selected_records(&self) -> Vec<&R> {
		self.records
			.iter()
			.zip(&self.keys)
			.filter(|(_, key)| self.selection.contains(key))
			.map(|(record, _)| record)
			.collect()
	}

	/// Select every row of the filtered view, or clear the selection.
	pub fn select_all(&mut self, checked: bool) {
		let view_keys = self.view.iter().map(|&position| self.keys[position].as_str());
		self.selection.select_all(checked, view_keys);
		self.notify_selection();
	}

	/// Add or remove a single key.
	pub fn toggle_row(&mut self, key: &str, checked: bool) {
		if self.selection.toggle(key, checked) {
			self.notify_selection();
		}
	}

	pub fn clear_selection(&mut self) {
		if !self.selection.is_empty() {
			self.selection.clear();
			self.notify_selection();
		}
	}

	#[must_use]
	pub fn is_all_selected(&self) -> bool {
		self.selection
			.is_all_selected(self.view.iter().map(|&position| self.keys[position].as_str()))
	}

	fn notify_selection(&mut self) {
		let keys: Vec<&str> = self.selection.keys().collect();
		self.observer.on_selection_change(&keys);
	}

	// Columns

	#[must_use]
	pub fn columns(&self) -> &[ColumnDescriptor<R>] {
		&self.columns
	}

	#[must_use]
	pub fn column_visibility(&self) -> &ColumnVisibility {
		&self.visibility
	}

	/// Replace the column descriptors, seeding visibility for new keys only.
	pub fn set_columns(&mut self, columns: Vec<ColumnDescriptor<R>>) {
		let added = self.visibility.reconcile(&columns);
		if added > 0 {
			debug!("seeded visibility for {added} new columns");
		}
		self.columns = columns;
	}

	/// Flip a column's visibility and return its new state.
	///
	/// # Errors
	///
	/// [`TableError::UnknownColumn`].
	pub fn toggle_column(&mut self, key: &str) -> Result<bool, TableError> {
		self.visibility
			.toggle(key)
			.ok_or_else(|| TableError::unknown_column(key))
	}

	/// # Errors
	///
	/// [`TableError::UnknownColumn`].
	pub fn set_column_visible(&mut self, key: &str, visible: bool) -> Result<(), TableError> {
		if self.visibility.set(key, visible) {
			Ok(())
		} else {
			Err(TableError::unknown_column(key))
		}
	}

	#[must_use]
	pub fn is_column_visible(&self, key: &str) -> bool {
		self.visibility.is_visible(key)
	}

	#[must_use]
	pub fn visible_columns(&self) -> Vec<&ColumnDescriptor<R>> {
		self.columns
			.iter()
			.filter(|column| self.visibility.is_visible(&column.key))
			.collect()
	}

	// Rows

	/// Positions (into [`records`](Self::records)) of the filtered, sorted view.
	#[must_use]
	pub fn view_positions(&self) -> &[usize] {
		&self.view
	}

	#[must_use]
	pub fn view_len(&self) -> usize {
		self.view.len()
	}

	/// Activate the row at `position` on the current page.
	///
	/// # Errors
	///
	/// [`TableError::RowOutOfRange`] when the page has no such row.
	pub fn click_row(&mut self, position: usize) -> Result<&R, TableError> {
		let range = self.pagination.page_range(self.view.len());
		let Some(&record_index) = self.view[range.clone()].get(position) else {
			return Err(TableError::RowOutOfRange {
				position,
				len: range.len(),
			});
		};
		let record = &self.records[record_index];
		self.observer.on_row_click(record);
		Ok(record)
	}

	/// Snapshot the current page.
	#[must_use]
	pub fn render(&self) -> TableView<'_, R> {
		let len = self.view.len();
		let mut pagination = self.pagination;
		pagination.clamp(len);
		let range = pagination.page_range(len);

		let rows = self.view[range.clone()]
			.iter()
			.enumerate()
			.map(|(offset, &position)| {
				let key = self.keys[position].as_str();
				PageRow {
					record: &self.records[position],
					key,
					row_index: range.start + offset,
					selected: self.selection.contains(key),
				}
			})
			.collect();

		TableView {
			columns: self.visible_columns(),
			rows,
			summary: pagination.summary(len, self.records.len()),
			sort: &self.sort,
			query: self.pipeline.query(),
			search_field: &self.search.field,
			all_selected: self.is_all_selected(),
			selected_count: self.selection.len(),
			can_previous: pagination.can_previous(),
			can_next: pagination.can_next(len),
		}
	}

	/// Recompute the view: search index, filters, sort, then page clamping.
	fn refresh(&mut self) {
		let stale = self
			.index
			.as_ref()
			.is_none_or(|index| !index.is_current(&self.search.field, self.generation));
		if stale {
			self.index = Some(SearchIndex::build(
				&self.records,
				&self.search.field,
				self.generation,
			));
		}

		let mut view = match &self.index {
			Some(index) => self.pipeline.apply(&self.records, index, self.search.threshold),
			None => (0..self.records.len()).collect(),
		};
		if self.sort_control == SortControl::Engine {
			sort_view(&self.records, &mut view, &self.sort);
		}
		trace!(
			"view holds {} of {} records (query '{}')",
			view.len(),
			self.records.len(),
			self.pipeline.query()
		);
		self.view = view;
		self.pagination.clamp(self.view.len());
	}
}

fn sortable_column<'a, R>(
	columns: &'a [ColumnDescriptor<R>],
	column: &str,
) -> Result<&'a ColumnDescriptor<R>, TableError> {
	let descriptor = columns
		.iter()
		.find(|candidate| candidate.key == column)
		.ok_or_else(|| TableError::unknown_column(column))?;
	if !descriptor.sortable {
		return Err(TableError::UnsortableColumn {
			column: column.to_string(),
		});
	}
	Ok(descriptor)
}

fn natural_keys<R: TableRecord>(records: &[R], key_field: &str) -> Result<Vec<String>, TableError> {
	let mut seen: HashMap<String, usize> = HashMap::with_capacity(records.len());
	let mut keys = Vec::with_capacity(records.len());
	for (row, record) in records.iter().enumerate() {
		let value = record.field(key_field);
		if value.is_null() {
			return Err(TableError::MissingKey {
				field: key_field.to_string(),
				row,
			});
		}
		let key = value.display().into_owned();
		if let Some(&first) = seen.get(&key) {
			return Err(TableError::DuplicateKey {
				field: key_field.to_string(),
				key,
				first,
				second: row,
			});
		}
		seen.insert(key.clone(), row);
		keys.push(key);
	}
	Ok(keys)
}
