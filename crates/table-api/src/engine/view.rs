use crate::column::ColumnDescriptor;
use crate::pagination::PageSummary;
use crate::sort::SortState;
use crate::value::TableRecord;

/// One row of the rendered page.
#[derive(Debug)]
pub struct PageRow<'a, R> {
	pub record: &'a R,
	pub key: &'a str,
	/// Position within the filtered/sorted view (not the page).
	pub row_index: usize,
	pub selected: bool,
}

impl<R> Clone for PageRow<'_, R> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<R> Copy for PageRow<'_, R> {}

impl<R: TableRecord> PageRow<'_, R> {
	/// Render this row's cells for `columns`.
	#[must_use]
	pub fn cells(&self, columns: &[&ColumnDescriptor<R>]) -> Vec<String> {
		columns
			.iter()
			.map(|column| column.render(self.record, self.row_index))
			.collect()
	}
}

/// Snapshot of everything needed to draw the table once.
#[derive(Debug)]
pub struct TableView<'a, R> {
	pub columns: Vec<&'a ColumnDescriptor<R>>,
	pub rows: Vec<PageRow<'a, R>>,
	pub summary: PageSummary,
	pub sort: &'a SortState,
	pub query: &'a str,
	pub search_field: &'a str,
	pub all_selected: bool,
	pub selected_count: usize,
	pub can_previous: bool,
	pub can_next: bool,
}

impl<R: TableRecord> TableView<'_, R> {
	/// True when the page has no rows; draw an empty state instead.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	#[must_use]
	pub fn headers(&self) -> Vec<&str> {
		self.columns.iter().map(|column| column.label.as_str()).collect()
	}

	/// Cell text for every row on the page.
	#[must_use]
	pub fn cells(&self) -> Vec<Vec<String>> {
		self.rows.iter().map(|row| row.cells(&self.columns)).collect()
	}
}
