use std::fmt;
use std::sync::Arc;

use crate::value::TableRecord;

/// Injected cell renderer: `(record, row_index) -> display text`.
pub type CellRenderer<R> = Arc<dyn Fn(&R, usize) -> String + Send + Sync>;

/// Horizontal alignment hint for a column's cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Align {
	#[default]
	Left,
	Center,
	Right,
}

/// Static description of one table column.
pub struct ColumnDescriptor<R> {
	pub key: String,
	pub label: String,
	pub width: Option<u16>,
	pub sortable: bool,
	/// Columns flagged here start hidden.
	pub hide_on_mobile: bool,
	pub align: Align,
	render: Option<CellRenderer<R>>,
}

impl<R> ColumnDescriptor<R> {
	/// Create a sortable, visible, left-aligned column that renders the raw field.
	#[must_use]
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			width: None,
			sortable: true,
			hide_on_mobile: false,
			align: Align::Left,
			render: None,
		}
	}

	#[must_use]
	pub fn width(mut self, width: u16) -> Self {
		self.width = Some(width);
		self
	}

	#[must_use]
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	#[must_use]
	pub fn hide_on_mobile(mut self, hide: bool) -> Self {
		self.hide_on_mobile = hide;
		self
	}

	#[must_use]
	pub fn align(mut self, align: Align) -> Self {
		self.align = align;
		self
	}

	/// Replace the default field renderer.
	#[must_use]
	pub fn render_with<F>(mut self, render: F) -> Self
	where
		F: Fn(&R, usize) -> String + Send + Sync + 'static,
	{
		self.render = Some(Arc::new(render));
		self
	}

	/// Whether the column is visible before the user toggles anything.
	#[must_use]
	pub fn default_visible(&self) -> bool {
		!self.hide_on_mobile
	}
}

impl<R: TableRecord> ColumnDescriptor<R> {
	/// Render the cell for `record` at `row_index` within the filtered view.
	#[must_use]
	pub fn render(&self, record: &R, row_index: usize) -> String {
		match &self.render {
			Some(render) => render(record, row_index),
			None => record.field(&self.key).display().into_owned(),
		}
	}
}

impl<R> Clone for ColumnDescriptor<R> {
	fn clone(&self) -> Self {
		Self {
			key: self.key.clone(),
			label: self.label.clone(),
			width: self.width,
			sortable: self.sortable,
			hide_on_mobile: self.hide_on_mobile,
			align: self.align,
			render: self.render.clone(),
		}
	}
}

impl<R> fmt::Debug for ColumnDescriptor<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ColumnDescriptor")
			.field("key", &self.key)
			.field("label", &self.label)
			.field("width", &self.width)
			.field("sortable", &self.sortable)
			.field("hide_on_mobile", &self.hide_on_mobile)
			.field("align", &self.align)
			.field("custom_render", &self.render.is_some())
			.finish()
	}
}
