use std::path::Path;

use dotconf::config::{Config, ConfigError, MapEntry, MapValue, OptValue, Schema, Shape, Value};
use thiserror::Error;

/// CLI-level result type.
pub type CliResult<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command-line shell.
#[derive(Debug, Error)]
pub enum CliError {
	/// Engine-level structural error.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Document IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document JSON parse or serialize failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}

/// Load a JSON document from disk as an untyped configuration handle.
pub fn load_document(path: &Path) -> CliResult<Config> {
	let text = std::fs::read_to_string(path)?;
	let json: serde_json::Value = serde_json::from_str(&text)?;
	Ok(Config::untyped(value_from_json(&json)))
}

/// Materialize a JSON value as an untyped value tree.
///
/// Objects become dynamically-typed maps, arrays become lists, and null
/// becomes an empty dynamic cell.
pub fn value_from_json(json: &serde_json::Value) -> Value {
	match json {
		serde_json::Value::Null => Value::Opt(OptValue::none(Shape::Dyn)),
		serde_json::Value::Bool(v) => Value::Bool(*v),
		serde_json::Value::Number(n) => {
			if let Some(v) = n.as_i64() {
				Value::I64(v)
			} else if let Some(v) = n.as_u64() {
				Value::U64(v)
			} else {
				Value::F64(n.as_f64().unwrap_or(0.0))
			}
		}
		serde_json::Value::String(v) => Value::Str(v.clone()),
		serde_json::Value::Array(items) => Value::List(items.iter().map(value_from_json).collect()),
		serde_json::Value::Object(fields) => Value::Map(MapValue {
			value_shape: Shape::Dyn,
			entries: fields
				.iter()
				.map(|(key, value)| MapEntry {
					key: key.clone(),
					value: value_from_json(value),
				})
				.collect(),
		}),
	}
}

/// Render a value tree as JSON.
pub fn value_to_json(schema: &Schema, value: &Value) -> serde_json::Value {
	use serde_json::{Map, Value as JsonValue, json};

	match value {
		Value::Str(v) => json!(v),
		Value::Bool(v) => json!(v),
		Value::I64(v) => json!(v),
		Value::U64(v) => json!(v),
		Value::F32(v) => json!(v),
		Value::F64(v) => json!(v),
		Value::C64(v) => json!([v.re, v.im]),
		Value::C128(v) => json!([v.re, v.im]),
		Value::Bytes(v) => JsonValue::Array(v.iter().map(|byte| json!(byte)).collect()),
		Value::List(items) => JsonValue::Array(items.iter().map(|item| value_to_json(schema, item)).collect()),
		Value::Record(instance) => {
			let shape = schema.record(instance.record);
			let fields: Map<String, JsonValue> = shape
				.fields
				.iter()
				.zip(&instance.fields)
				.map(|(field, value)| (field.name.to_string(), value_to_json(schema, value)))
				.collect();
			JsonValue::Object(fields)
		}
		Value::Map(map) => {
			let entries: Map<String, JsonValue> = map
				.entries
				.iter()
				.map(|entry| (entry.key.clone(), value_to_json(schema, &entry.value)))
				.collect();
			JsonValue::Object(entries)
		}
		Value::Opt(cell) => match &cell.inner {
			Some(inner) => value_to_json(schema, inner),
			None => JsonValue::Null,
		},
	}
}

/// Parse a command-line value argument: JSON literal first, plain string
/// fallback.
pub fn parse_value_arg(text: &str) -> Value {
	match serde_json::from_str::<serde_json::Value>(text) {
		Ok(json) => value_from_json(&json),
		Err(_) => Value::Str(text.to_owned()),
	}
}

/// Print a serializable payload as pretty JSON on stdout.
pub fn emit_json<T: serde::Serialize>(payload: &T) -> CliResult<()> {
	let text = serde_json::to_string_pretty(payload)?;
	println!("{text}");
	Ok(())
}
