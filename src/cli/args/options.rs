use clap::ValueEnum;
use festdesk_table_api::Value;

/// Built-in table layouts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum TableKind {
	#[default]
	Participants,
	Registrations,
	/// Any JSON rows; columns come from the data.
	Generic,
}

impl TableKind {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			TableKind::Participants => "participants",
			TableKind::Registrations => "registrations",
			TableKind::Generic => "generic",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// An exact-match filter given as `FIELD=VALUE`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FilterArg {
	pub(crate) field: String,
	pub(crate) value: Value,
}

/// Parse `FIELD=VALUE`.
///
/// `true`, `false`, `null` and numbers are typed; wrap a value in double
/// quotes to compare it as text.
pub(crate) fn parse_filter(input: &str) -> Result<FilterArg, String> {
	let (field, raw) = input
		.split_once('=')
		.ok_or_else(|| format!("expected FIELD=VALUE, got `{input}`"))?;
	let field = field.trim();
	if field.is_empty() {
		return Err(format!("missing field name in `{input}`"));
	}
	Ok(FilterArg {
		field: field.to_string(),
		value: typed_value(raw.trim()),
	})
}

fn typed_value(raw: &str) -> Value {
	if let Some(text) = raw.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
		return Value::Text(text.to_string());
	}
	match raw {
		"true" => Value::Bool(true),
		"false" => Value::Bool(false),
		"null" => Value::Null,
		_ => match raw.parse::<f64>() {
			Ok(number) if number.is_finite() => Value::Number(number),
			_ => Value::Text(raw.to_string()),
		},
	}
}
