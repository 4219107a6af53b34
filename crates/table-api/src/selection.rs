use indexmap::IndexSet;
use log::debug;

/// Natural keys of the selected rows.
///
/// Selection is independent of paging and filtering: keys stay selected
/// while their rows are hidden, and keys of rows that left the collection are
/// kept until cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
	keys: IndexSet<String>,
}

impl SelectionTracker {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Select every key of the filtered view, or clear everything.
	pub fn select_all<I, K>(&mut self, checked: bool, view_keys: I)
	where
		I: IntoIterator<Item = K>,
		K: Into<String>,
	{
		if checked {
			self.keys.extend(view_keys.into_iter().map(Into::into));
		} else {
			self.keys.clear();
		}
		debug!("select all ({checked}): {} keys selected", self.keys.len());
	}

	/// Add or remove one key. Returns `true` if the selection changed.
	pub fn toggle(&mut self, key: &str, checked: bool) -> bool {
		if checked {
			self.keys.insert(key.to_string())
		} else {
			self.keys.shift_remove(key)
		}
	}

	/// True when the view is non-empty and all of its keys are selected.
	#[must_use]
	pub fn is_all_selected<'a, I>(&self, view_keys: I) -> bool
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut any = false;
		for key in view_keys {
			if !self.keys.contains(key) {
				return false;
			}
			any = true;
		}
		any
	}

	#[must_use]
	pub fn contains(&self, key: &str) -> bool {
		self.keys.contains(key)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	pub fn clear(&mut self) {
		self.keys.clear();
	}

	/// Selected keys in selection order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.keys.iter().map(String::as_str)
	}

	/// Drop keys for which `present` is false. Never called by the engine.
	pub fn retain_present<F>(&mut self, mut present: F) -> usize
	where
		F: FnMut(&str) -> bool,
	{
		let before = self.keys.len();
		self.keys.retain(|key| present(key));
		before - self.keys.len()
	}
}
