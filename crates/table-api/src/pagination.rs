use std::ops::Range;

use log::debug;
use serde::Serialize;

/// Page window over the sorted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
	page_index: usize,
	page_size: usize,
}

impl Default for PaginationState {
	fn default() -> Self {
		Self::new(Self::DEFAULT_PAGE_SIZE)
	}
}

impl PaginationState {
	pub const DEFAULT_PAGE_SIZE: usize = 10;

	/// Start on the first page. A zero `page_size` is treated as one.
	#[must_use]
	pub fn new(page_size: usize) -> Self {
		Self {
			page_index: 0,
			page_size: page_size.max(1),
		}
	}

	#[must_use]
	pub fn page_index(&self) -> usize {
		self.page_index
	}

	#[must_use]
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	#[must_use]
	pub fn page_count(&self, len: usize) -> usize {
		len.div_ceil(self.page_size)
	}

	/// Pull the page index back into range for a view of `len` rows.
	///
	/// Returns `true` if the index moved.
	pub fn clamp(&mut self, len: usize) -> bool {
		let last = self.page_count(len).saturating_sub(1);
		if self.page_index > last {
			debug!("clamping page index {} to {last} ({len} rows)", self.page_index);
			self.page_index = last;
			return true;
		}
		false
	}

	/// Change the page size and return to the first page.
	pub fn set_page_size(&mut self, page_size: usize) {
		self.page_size = page_size.max(1);
		self.page_index = 0;
	}

	/// Jump to `page_index`; out-of-range values are clamped on the next render.
	pub fn set_page_index(&mut self, page_index: usize) {
		self.page_index = page_index;
	}

	pub fn reset(&mut self) {
		self.page_index = 0;
	}

	#[must_use]
	pub fn can_previous(&self) -> bool {
		self.page_index > 0
	}

	#[must_use]
	pub fn can_next(&self, len: usize) -> bool {
		self.page_index + 1 < self.page_count(len)
	}

	pub fn first(&mut self) -> bool {
		if !self.can_previous() {
			return false;
		}
		self.page_index = 0;
		true
	}

	pub fn previous(&mut self) -> bool {
		if !self.can_previous() {
			return false;
		}
		self.page_index -= 1;
		true
	}

	pub fn next(&mut self, len: usize) -> bool {
		if !self.can_next(len) {
			return false;
		}
		self.page_index += 1;
		true
	}

	pub fn last(&mut self, len: usize) -> bool {
		if !self.can_next(len) {
			return false;
		}
		self.page_index = self.page_count(len) - 1;
		true
	}

	/// Slice bounds of the current page; empty when out of range.
	#[must_use]
	pub fn page_range(&self, len: usize) -> Range<usize> {
		let start = self.page_index.saturating_mul(self.page_size);
		if start >= len {
			return len..len;
		}
		let end = start.saturating_add(self.page_size).min(len);
		start..end
	}

	#[must_use]
	pub fn summary(&self, len: usize, total: usize) -> PageSummary {
		let range = self.page_range(len);
		PageSummary {
			page_index: self.page_index,
			page_count: self.page_count(len),
			page_size: self.page_size,
			first_row: if range.is_empty() { 0 } else { range.start + 1 },
			last_row: range.end,
			filtered: len,
			total,
		}
	}
}

/// Footer figures for a rendered page. Row numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
	pub page_index: usize,
	pub page_count: usize,
	pub page_size: usize,
	pub first_row: usize,
	pub last_row: usize,
	pub filtered: usize,
	pub total: usize,
}

impl PageSummary {
	/// "Showing 11-20 of 25" style label.
	#[must_use]
	pub fn label(&self, count_label: &str) -> String {
		if self.filtered == 0 {
			return format!("No {count_label}");
		}
		let mut label = format!(
			"Showing {}-{} of {} {count_label}",
			self.first_row, self.last_row, self.filtered
		);
		if self.filtered != self.total {
			label.push_str(&format!(" (filtered from {})", self.total));
		}
		label
	}

	/// "Page 2 of 3"; an empty view reads as page 1 of 1.
	#[must_use]
	pub fn page_label(&self) -> String {
		format!(
			"Page {} of {}",
			self.page_index + 1,
			self.page_count.max(1)
		)
	}
}
