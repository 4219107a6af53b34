use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Owned scalar stored in a [`Record`] or used as a filter operand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Number(f64),
	Text(String),
}

impl Value {
	/// Borrow the value as a [`FieldRef`].
	#[must_use]
	pub fn as_field(&self) -> FieldRef<'_> {
		match self {
			Value::Null => FieldRef::Null,
			Value::Bool(value) => FieldRef::Bool(*value),
			Value::Number(value) => FieldRef::Number(*value),
			Value::Text(value) => FieldRef::Text(value),
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Text(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Text(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Number(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.as_field().fmt(f)
	}
}

/// Borrowed view of a single field of a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
	Null,
	Bool(bool),
	Number(f64),
	Text(&'a str),
}

impl<'a> FieldRef<'a> {
	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, FieldRef::Null)
	}

	/// String form used for indexing, natural keys and default cell text.
	///
	/// Null renders as the empty string; integral numbers drop the fraction.
	#[must_use]
	pub fn display(&self) -> Cow<'a, str> {
		match *self {
			FieldRef::Null => Cow::Borrowed(""),
			FieldRef::Text(text) => Cow::Borrowed(text),
			FieldRef::Bool(value) => Cow::Borrowed(if value { "true" } else { "false" }),
			FieldRef::Number(value) => Cow::Owned(format_number(value)),
		}
	}

	/// Equality used by structural filters.
	#[must_use]
	pub fn matches(&self, operand: &Value) -> bool {
		match (*self, operand) {
			(FieldRef::Null, Value::Null) => true,
			(FieldRef::Bool(a), Value::Bool(b)) => a == *b,
			(FieldRef::Number(a), Value::Number(b)) => a == *b,
			(FieldRef::Text(a), Value::Text(b)) => a == b,
			_ => false,
		}
	}

	#[must_use]
	pub fn to_value(&self) -> Value {
		match *self {
			FieldRef::Null => Value::Null,
			FieldRef::Bool(value) => Value::Bool(value),
			FieldRef::Number(value) => Value::Number(value),
			FieldRef::Text(text) => Value::Text(text.to_string()),
		}
	}
}

impl fmt::Display for FieldRef<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.display())
	}
}

impl<'a> From<&'a str> for FieldRef<'a> {
	fn from(value: &'a str) -> Self {
		FieldRef::Text(value)
	}
}

impl<'a> From<Option<&'a str>> for FieldRef<'a> {
	fn from(value: Option<&'a str>) -> Self {
		value.map_or(FieldRef::Null, FieldRef::Text)
	}
}

impl From<f64> for FieldRef<'_> {
	fn from(value: f64) -> Self {
		FieldRef::Number(value)
	}
}

impl From<Option<f64>> for FieldRef<'_> {
	fn from(value: Option<f64>) -> Self {
		value.map_or(FieldRef::Null, FieldRef::Number)
	}
}

impl From<bool> for FieldRef<'_> {
	fn from(value: bool) -> Self {
		FieldRef::Bool(value)
	}
}

fn format_number(value: f64) -> String {
	if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
		format!("{}", value as i64)
	} else {
		value.to_string()
	}
}

/// A row the table engine can read fields from.
///
/// Fields that do not exist read as [`FieldRef::Null`].
pub trait TableRecord {
	fn field(&self, key: &str) -> FieldRef<'_>;
}

impl<T> TableRecord for &T
where
	T: TableRecord + ?Sized,
{
	fn field(&self, key: &str) -> FieldRef<'_> {
		<T as TableRecord>::field(*self, key)
	}
}

/// Schemaless record: an ordered mapping from field name to [`Value`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
	fields: IndexMap<String, Value>,
}

impl Record {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Set a field, returning the record for chaining.
	#[must_use]
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
		self.fields.insert(key.into(), value.into());
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.fields.get(key)
	}

	/// Iterate fields in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.fields.iter().map(|(key, value)| (key.as_str(), value))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl TableRecord for Record {
	fn field(&self, key: &str) -> FieldRef<'_> {
		self.fields.get(key).map_or(FieldRef::Null, Value::as_field)
	}
}

impl FromIterator<(String, Value)> for Record {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self {
			fields: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numbers_display_without_trailing_fraction() {
		assert_eq!(FieldRef::Number(5.0).display(), "5");
		assert_eq!(FieldRef::Number(2.5).display(), "2.5");
		assert_eq!(FieldRef::Null.display(), "");
		assert_eq!(FieldRef::Bool(true).display(), "true");
	}

	#[test]
	fn missing_fields_read_as_null() {
		let record = Record::new().with("name", "Ann");
		assert_eq!(record.field("name"), FieldRef::Text("Ann"));
		assert!(record.field("score").is_null());
	}

	#[test]
	fn filter_equality_is_type_strict() {
		assert!(FieldRef::Text("5").matches(&Value::from("5")));
		assert!(!FieldRef::Text("5").matches(&Value::Number(5.0)));
		assert!(FieldRef::Null.matches(&Value::Null));
	}

	#[test]
	fn records_deserialize_from_json_objects() {
		let record: Record =
			serde_json::from_str(r#"{"name":"Bob","score":null,"paid":true,"age":21}"#)
				.expect("record");
		assert_eq!(record.len(), 4);
		assert!(record.field("score").is_null());
		assert_eq!(record.field("paid"), FieldRef::Bool(true));
		assert_eq!(record.field("age"), FieldRef::Number(21.0));
		let keys: Vec<&str> = record.iter().map(|(key, _)| key).collect();
		assert_eq!(keys, vec!["name", "score", "paid", "age"]);
	}
}
