//! Load table rows from JSON exports.
//!
//! Files hold either a bare array of row objects or an API envelope of the
//! form `{ "data": [...] }`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use festdesk_table_api::{Record, Value};
use serde::de::DeserializeOwned;
use serde_json::Value as Json;

/// Read typed rows from `path`.
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
	let rows = read_array(path)?;
	rows.into_iter()
		.enumerate()
		.map(|(index, row)| {
			serde_json::from_value(row)
				.with_context(|| format!("row {index} of {} is malformed", path.display()))
		})
		.collect()
}

/// Read schemaless records from `path`.
///
/// Nested arrays and objects are kept as their JSON text.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
	read_array(path)?
		.into_iter()
		.enumerate()
		.map(|(index, row)| match row {
			Json::Object(fields) => Ok(record_from_object(fields)),
			other => bail!(
				"row {index} of {} is not an object: {other}",
				path.display()
			),
		})
		.collect()
}

/// Field names in first-seen order across all records.
pub fn field_names(records: &[Record]) -> Vec<String> {
	let mut names: Vec<String> = Vec::new();
	for record in records {
		for (key, _) in record.iter() {
			if !names.iter().any(|name| name == key) {
				names.push(key.to_string());
			}
		}
	}
	names
}

fn read_array(path: &Path) -> Result<Vec<Json>> {
	let text = fs::read_to_string(path)
		.with_context(|| format!("failed to read {}", path.display()))?;
	let document: Json = serde_json::from_str(&text)
		.with_context(|| format!("{} is not valid JSON", path.display()))?;
	match document {
		Json::Array(rows) => Ok(rows),
		Json::Object(mut envelope) => match envelope.remove("data") {
			Some(Json::Array(rows)) => Ok(rows),
			_ => bail!("{} has no `data` array", path.display()),
		},
		_ => bail!("{} must hold an array of rows", path.display()),
	}
}

fn record_from_object(fields: serde_json::Map<String, Json>) -> Record {
	let mut record = Record::new();
	for (key, value) in fields {
		record.insert(key, scalar(value));
	}
	record
}

fn scalar(value: Json) -> Value {
	match value {
		Json::Null => Value::Null,
		Json::Bool(flag) => Value::Bool(flag),
		Json::Number(number) => number.as_f64().map_or(Value::Null, Value::Number),
		Json::String(text) => Value::Text(text),
		nested @ (Json::Array(_) | Json::Object(_)) => Value::Text(nested.to_string()),
	}
}
