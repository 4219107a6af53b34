use std::borrow::Cow;

/// A field users can pick as the search target, with its menu label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchField {
	pub key: Cow<'static, str>,
	pub label: Cow<'static, str>,
}

impl SearchField {
	#[must_use]
	pub const fn fixed(key: &'static str, label: &'static str) -> Self {
		Self {
			key: Cow::Borrowed(key),
			label: Cow::Borrowed(label),
		}
	}

	#[must_use]
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: Cow::Owned(key.into()),
			label: Cow::Owned(label.into()),
		}
	}
}

/// Labels shown around a table.
#[derive(Debug, Clone, Copy)]
pub struct TableUiDefinition {
	pub tab_label: &'static str,
	pub table_title: &'static str,
	pub hint: &'static str,
	/// Plural noun used in summaries ("participants").
	pub count_label: &'static str,
}

/// Static configuration of one dashboard table.
#[derive(Debug)]
pub struct TableDescriptor {
	pub id: &'static str,
	pub ui: TableUiDefinition,
	/// Field whose value identifies a record for selection.
	pub key_field: &'static str,
	pub search_fields: &'static [SearchField],
	pub default_search_field: &'static str,
	pub default_page_size: usize,
}

impl TableDescriptor {
	#[must_use]
	pub fn search_field(&self, key: &str) -> Option<&SearchField> {
		self.search_fields.iter().find(|field| field.key == key)
	}
}
