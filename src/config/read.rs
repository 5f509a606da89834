use crate::config::error::{ConfigError, Result};
use crate::config::schema::Schema;
use crate::config::value::Value;

/// Resolve `segments` against `value`, returning the addressed sub-value.
///
/// An exhausted path addresses `value` itself, so whole subtrees are
/// readable. Indirections are transparent and consume no segment; every
/// record and map layer consumes exactly one and prefixes it onto errors
/// unwinding from below.
pub(crate) fn resolve<'a>(schema: &Schema, segments: &[&str], value: &'a Value) -> Result<&'a Value> {
	let Some((&name, rest)) = segments.split_first() else {
		return Ok(value);
	};

	match value {
		Value::Opt(cell) => match &cell.inner {
			Some(inner) => resolve(schema, segments, inner),
			None => Err(ConfigError::NoSuchKey { key: name.to_owned() }),
		},
		Value::Record(instance) => {
			let shape = schema.record(instance.record);
			let Some(index) = shape
				.fields
				.iter()
				.position(|field| field.name.eq_ignore_ascii_case(name))
			else {
				return Err(ConfigError::NoSuchKey { key: name.to_owned() });
			};
			resolve(schema, rest, &instance.fields[index]).map_err(|err| err.prefixed(name))
		}
		Value::Map(map) => {
			// First case-insensitive match wins when keys collide.
			let Some(entry) = map.entries.iter().find(|entry| entry.key.eq_ignore_ascii_case(name)) else {
				return Err(ConfigError::NoSuchKey { key: name.to_owned() });
			};
			resolve(schema, rest, &entry.value).map_err(|err| err.prefixed(name))
		}
		other => Err(ConfigError::UnhandledKind {
			key: name.to_owned(),
			kind: other.kind(),
		}),
	}
}
