use indexmap::IndexMap;

use crate::column::ColumnDescriptor;

/// Which declared columns are currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
	visible: IndexMap<String, bool>,
}

impl ColumnVisibility {
	/// Seed every column from its `hide_on_mobile` hint.
	#[must_use]
	pub fn seeded<R>(columns: &[ColumnDescriptor<R>]) -> Self {
		let mut visibility = Self::default();
		visibility.reconcile(columns);
		visibility
	}

	/// Add entries for columns that have none yet.
	///
	/// Existing entries are never touched, so user toggles survive a change
	/// of column descriptors. Returns the number of entries added.
	pub fn reconcile<R>(&mut self, columns: &[ColumnDescriptor<R>]) -> usize {
		let mut added = 0;
		for column in columns {
			if !self.visible.contains_key(&column.key) {
				self.visible
					.insert(column.key.clone(), column.default_visible());
				added += 1;
			}
		}
		added
	}

	/// Unknown keys read as hidden.
	#[must_use]
	pub fn is_visible(&self, key: &str) -> bool {
		self.visible.get(key).copied().unwrap_or(false)
	}

	/// Flip a known column and return its new state.
	pub fn toggle(&mut self, key: &str) -> Option<bool> {
		let entry = self.visible.get_mut(key)?;
		*entry = !*entry;
		Some(*entry)
	}

	/// Returns `false` if the key is unknown.
	pub fn set(&mut self, key: &str, visible: bool) -> bool {
		match self.visible.get_mut(key) {
			Some(entry) => {
				*entry = visible;
				true
			}
			None => false,
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
		self.visible.iter().map(|(key, visible)| (key.as_str(), *visible))
	}
}
