//! Single-column ordering of the filtered view.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use unicase::UniCase;

use crate::value::{FieldRef, TableRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	#[default]
	Asc,
	Desc,
}

impl SortDirection {
	#[must_use]
	pub fn flipped(self) -> Self {
		match self {
			SortDirection::Asc => SortDirection::Desc,
			SortDirection::Desc => SortDirection::Asc,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			SortDirection::Asc => "asc",
			SortDirection::Desc => "desc",
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Active sort column and direction. `column == None` keeps filter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
	pub column: Option<String>,
	pub direction: SortDirection,
}

impl SortState {
	#[must_use]
	pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			column: Some(column.into()),
			direction,
		}
	}

	#[must_use]
	pub fn is_sorted_by(&self, column: &str) -> bool {
		self.column.as_deref() == Some(column)
	}

	/// State after a header click on `column`: the active column flips
	/// direction, any other column becomes active ascending.
	#[must_use]
	pub fn toggled(&self, column: &str) -> Self {
		if self.is_sorted_by(column) {
			Self {
				column: self.column.clone(),
				direction: self.direction.flipped(),
			}
		} else {
			Self::new(column, SortDirection::Asc)
		}
	}
}

/// Compare two field values for `direction`.
///
/// Nulls sink to the end in both directions; only the ordering between
/// non-null values is reversed for [`SortDirection::Desc`].
#[must_use]
pub fn compare_fields(a: FieldRef<'_>, b: FieldRef<'_>, direction: SortDirection) -> Ordering {
	match (a.is_null(), b.is_null()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => {
			let ordering = compare_present(a, b);
			match direction {
				SortDirection::Asc => ordering,
				SortDirection::Desc => ordering.reverse(),
			}
		}
	}
}

/// Columns mixing kinds group numbers first, then booleans, then text.
fn kind_rank(value: FieldRef<'_>) -> u8 {
	match value {
		FieldRef::Number(_) => 0,
		FieldRef::Bool(_) => 1,
		FieldRef::Text(_) => 2,
		FieldRef::Null => 3,
	}
}

fn compare_present(a: FieldRef<'_>, b: FieldRef<'_>) -> Ordering {
	match (a, b) {
		(FieldRef::Text(a), FieldRef::Text(b)) => compare_text(a, b),
		(FieldRef::Number(a), FieldRef::Number(b)) => a.total_cmp(&b),
		(FieldRef::Bool(a), FieldRef::Bool(b)) => a.cmp(&b),
		_ => kind_rank(a).cmp(&kind_rank(b)),
	}
}

/// Case-insensitive ordering with a code-point tiebreak.
fn compare_text(a: &str, b: &str) -> Ordering {
	UniCase::new(a)
		.cmp(&UniCase::new(b))
		.then_with(|| a.cmp(b))
}

/// Reorder `view` (positions into `records`) according to `state`.
///
/// The sort is stable, so equal keys keep their filtered order.
pub fn sort_view<R: TableRecord>(records: &[R], view: &mut [usize], state: &SortState) {
	let Some(column) = state.column.as_deref() else {
		return;
	};
	view.sort_by(|&a, &b| {
		let left = records.get(a).map_or(FieldRef::Null, |record| record.field(column));
		let right = records.get(b).map_or(FieldRef::Null, |record| record.field(column));
		compare_fields(left, right, state.direction)
	});
}
