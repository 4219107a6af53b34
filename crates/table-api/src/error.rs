use thiserror::Error;

/// Errors raised by [`TableEngine`](crate::TableEngine) operations.
///
/// Deriving a page never fails; these only guard the configuration and
/// ingestion entry points.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
	/// No column with this key has been declared.
	#[error("unknown column '{column}'")]
	UnknownColumn { column: String },

	/// The column exists but was declared without sorting support.
	#[error("column '{column}' is not sortable")]
	UnsortableColumn { column: String },

	/// The field is not one of the table's configured search fields.
	#[error("'{field}' is not a search field for this table")]
	UnknownSearchField { field: String },

	/// Fuzziness outside of the `0.0..=1.0` range.
	#[error("search threshold {value} must be between 0.0 and 1.0")]
	InvalidThreshold { value: f64 },

	/// Two records in the same collection share a natural key.
	#[error("duplicate {field} '{key}' at rows {first} and {second}")]
	DuplicateKey {
		field: String,
		key: String,
		first: usize,
		second: usize,
	},

	/// A record has no value for the natural key field.
	#[error("row {row} has no value for key field '{field}'")]
	MissingKey { field: String, row: usize },

	/// A row position outside of the current page.
	#[error("row {position} is outside of the current page ({len} rows)")]
	RowOutOfRange { position: usize, len: usize },
}

impl TableError {
	pub fn unknown_column(column: impl Into<String>) -> Self {
		Self::UnknownColumn {
			column: column.into(),
		}
	}

	pub fn unknown_search_field(field: impl Into<String>) -> Self {
		Self::UnknownSearchField {
			field: field.into(),
		}
	}
}
