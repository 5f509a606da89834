use crate::config::error::{ConfigError, Result};
use crate::config::value::{Complex32, Complex64, Value};

/// Project a resolved leaf value to its canonical text.
///
/// `key` is the full original dotted key, carried into the error when the
/// value has no text form.
pub(crate) fn project_string(value: &Value, key: &str) -> Result<String> {
	scalar_text(value).ok_or_else(|| ConfigError::UnhandledKind {
		key: key.to_owned(),
		kind: value.kind(),
	})
}

/// Canonical text of a scalar-projectable value, `None` otherwise.
///
/// Shared with the coercion layer so converting a number to a string
/// field and projecting that number can never disagree. Float text is
/// Rust's `Display`, the shortest decimal that round-trips at the
/// value's own precision.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
	match value {
		Value::Str(v) => Some(v.clone()),
		Value::Bool(v) => Some(v.to_string()),
		Value::I64(v) => Some(v.to_string()),
		Value::U64(v) => Some(v.to_string()),
		Value::F32(v) => Some(v.to_string()),
		Value::F64(v) => Some(v.to_string()),
		Value::C64(v) => Some(complex32_text(*v)),
		Value::C128(v) => Some(complex64_text(*v)),
		Value::Bytes(v) => Some(String::from_utf8_lossy(v).into_owned()),
		Value::List(_) | Value::Record(_) | Value::Map(_) | Value::Opt(_) => None,
	}
}

fn complex32_text(v: Complex32) -> String {
	complex_text(v.re.to_string(), v.im.to_string())
}

fn complex64_text(v: Complex64) -> String {
	complex_text(v.re.to_string(), v.im.to_string())
}

fn complex_text(re: String, im: String) -> String {
	if im.starts_with('-') {
		format!("({re}{im}i)")
	} else {
		format!("({re}+{im}i)")
	}
}
