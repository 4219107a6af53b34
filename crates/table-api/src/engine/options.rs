use crate::descriptors::{SearchField, TableDescriptor};
use crate::pagination::PaginationState;
use crate::search::SearchConfig;
use crate::sort::SortState;

/// Who owns the ordering of the rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortControl {
	/// The engine sorts the filtered view itself.
	#[default]
	Engine,
	/// The caller sorts (e.g. server side); header clicks only notify.
	External,
}

/// Mount-time configuration of a [`TableEngine`](super::TableEngine).
#[derive(Debug, Clone)]
pub struct TableOptions {
	pub key_field: String,
	pub search_fields: Vec<SearchField>,
	pub search: SearchConfig,
	pub page_size: usize,
	pub sort: SortState,
	pub sort_control: SortControl,
}

impl TableOptions {
	/// Options keyed by `key_field`, searching it with the default threshold.
	#[must_use]
	pub fn new(key_field: impl Into<String>) -> Self {
		let key_field = key_field.into();
		Self {
			search: SearchConfig::new(key_field.clone()),
			search_fields: Vec::new(),
			key_field,
			page_size: PaginationState::DEFAULT_PAGE_SIZE,
			sort: SortState::default(),
			sort_control: SortControl::Engine,
		}
	}

	/// Options matching a static table descriptor.
	#[must_use]
	pub fn from_descriptor(descriptor: &TableDescriptor) -> Self {
		Self {
			key_field: descriptor.key_field.to_string(),
			search_fields: descriptor.search_fields.to_vec(),
			search: SearchConfig::new(descriptor.default_search_field),
			page_size: descriptor.default_page_size,
			sort: SortState::default(),
			sort_control: SortControl::Engine,
		}
	}

	#[must_use]
	pub fn with_search_fields(mut self, fields: Vec<SearchField>) -> Self {
		self.search_fields = fields;
		self
	}

	#[must_use]
	pub fn with_search(mut self, search: SearchConfig) -> Self {
		self.search = search;
		self
	}

	#[must_use]
	pub fn with_threshold(mut self, threshold: f64) -> Self {
		self.search.threshold = threshold;
		self
	}

	#[must_use]
	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	#[must_use]
	pub fn with_sort(mut self, sort: SortState) -> Self {
		self.sort = sort;
		self
	}

	#[must_use]
	pub fn with_sort_control(mut self, control: SortControl) -> Self {
		self.sort_control = control;
		self
	}
}
