//! Candidate selection ahead of sorting: fuzzy search, then equality filters.

use crate::search::SearchIndex;
use crate::value::{TableRecord, Value};

/// Keep only records whose `field` equals `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualityFilter {
	pub field: String,
	pub value: Value,
}

impl EqualityFilter {
	#[must_use]
	pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
		Self {
			field: field.into(),
			value: value.into(),
		}
	}

	#[must_use]
	pub fn accepts<R: TableRecord>(&self, record: &R) -> bool {
		record.field(&self.field).matches(&self.value)
	}
}

/// Search text plus the structural filters applied on top of it.
#[derive(Debug, Clone, Default)]
pub struct FilterPipeline {
	query: String,
	filters: Vec<EqualityFilter>,
}

impl FilterPipeline {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Whether the search step is bypassed.
	#[must_use]
	pub fn has_query(&self) -> bool {
		!self.query.trim().is_empty()
	}

	/// Replace the search text. Returns `true` if it changed.
	pub fn set_query(&mut self, query: impl Into<String>) -> bool {
		let query = query.into();
		if query == self.query {
			return false;
		}
		self.query = query;
		true
	}

	#[must_use]
	pub fn filters(&self) -> &[EqualityFilter] {
		&self.filters
	}

	/// Add a filter, replacing any existing filter on the same field.
	pub fn set_filter(&mut self, filter: EqualityFilter) {
		match self
			.filters
			.iter_mut()
			.find(|existing| existing.field == filter.field)
		{
			Some(existing) => *existing = filter,
			None => self.filters.push(filter),
		}
	}

	/// Remove the filter on `field`. Returns `true` if one was present.
	pub fn remove_filter(&mut self, field: &str) -> bool {
		let before = self.filters.len();
		self.filters.retain(|filter| filter.field != field);
		before != self.filters.len()
	}

	pub fn clear_filters(&mut self) {
		self.filters.clear();
	}

	/// Positions of the records that pass search and every filter.
	///
	/// With a blank query the result keeps collection order; otherwise it
	/// follows the index's match ranking. `index` must have been built over
	/// `records`.
	#[must_use]
	pub fn apply<R: TableRecord>(
		&self,
		records: &[R],
		index: &SearchIndex,
		threshold: f64,
	) -> Vec<usize> {
		let candidates: Vec<usize> = if self.has_query() {
			index
				.query(&self.query, threshold)
				.into_iter()
				.map(|hit| hit.index)
				.collect()
		} else {
			(0..records.len()).collect()
		};

		if self.filters.is_empty() {
			return candidates;
		}

		candidates
			.into_iter()
			.filter(|&position| {
				records
					.get(position)
					.is_some_and(|record| self.filters.iter().all(|filter| filter.accepts(record)))
			})
			.collect()
	}
}
