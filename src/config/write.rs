use crate::config::coerce::coerce;
use crate::config::error::{ConfigError, Result};
use crate::config::schema::{Schema, Shape};
use crate::config::value::{MapEntry, MapValue, OptValue, RecordValue, Value};

/// Rebuild `current` with the value at `segments` replaced by `new_value`.
///
/// Returns the updated subtree for the caller to splice into its parent.
/// `current` itself is never mutated, which is what makes a failed
/// top-level write commit nothing: unchanged siblings are cloned into
/// the rebuilt containers and freshly allocated sub-values are simply
/// discarded on error.
///
/// An exhausted path yields `new_value` as the replacement for this
/// position; coercion to the statically expected shape happens at the
/// record or map layer directly above.
pub(crate) fn write_value(schema: &Schema, segments: &[&str], current: &Value, new_value: Value) -> Result<Value> {
	let Some((&name, rest)) = segments.split_first() else {
		return Ok(new_value);
	};

	match current {
		Value::Opt(cell) => {
			let updated = match &cell.inner {
				Some(inner) => write_value(schema, segments, inner, new_value)?,
				None => {
					// A dynamic cell has no zero inner value to descend into.
					if matches!(cell.inner_shape, Shape::Dyn) {
						return Err(ConfigError::UnhandledKind {
							key: name.to_owned(),
							kind: current.kind(),
						});
					}
					let zero = schema.zero_value(&cell.inner_shape);
					write_value(schema, segments, &zero, new_value)?
				}
			};
			Ok(Value::Opt(OptValue {
				inner_shape: cell.inner_shape.clone(),
				inner: Some(Box::new(updated)),
			}))
		}
		Value::Record(instance) => {
			let shape = schema.record(instance.record);
			let Some(index) = shape
				.fields
				.iter()
				.position(|field| field.name.eq_ignore_ascii_case(name))
			else {
				return Err(ConfigError::NoSuchKey { key: name.to_owned() });
			};
			let field_shape = &shape.fields[index].shape;

			let updated = write_value(schema, rest, &instance.fields[index], new_value).map_err(|err| err.prefixed(name))?;
			let Some(coerced) = coerce(updated, field_shape) else {
				return Err(ConfigError::IncompatibleType {
					key: name.to_owned(),
					target: schema.shape_name(field_shape),
				});
			};

			let mut fields = instance.fields.clone();
			fields[index] = coerced;
			Ok(Value::Record(RecordValue {
				record: instance.record,
				fields,
			}))
		}
		Value::Map(map) => {
			if let Some(index) = map.entries.iter().position(|entry| entry.key.eq_ignore_ascii_case(name)) {
				let updated = write_value(schema, rest, &map.entries[index].value, new_value).map_err(|err| err.prefixed(name))?;
				let Some(coerced) = coerce(updated, &map.value_shape) else {
					return Err(ConfigError::IncompatibleType {
						key: name.to_owned(),
						target: schema.shape_name(&map.value_shape),
					});
				};

				// Store back under the matched entry's original casing.
				let mut entries = map.entries.clone();
				entries[index].value = coerced;
				return Ok(Value::Map(MapValue {
					value_shape: map.value_shape.clone(),
					entries,
				}));
			}

			let zero = schema.zero_value(&map.value_shape);
			let updated = write_value(schema, rest, &zero, new_value).map_err(|err| err.prefixed(name))?;
			let Some(coerced) = coerce(updated, &map.value_shape) else {
				return Err(ConfigError::IncompatibleType {
					key: name.to_owned(),
					target: schema.shape_name(&map.value_shape),
				});
			};

			// New entries keep the exact requested casing; nothing existed
			// to normalize against.
			let mut entries = map.entries.clone();
			entries.push(MapEntry {
				key: name.to_owned(),
				value: coerced,
			});
			Ok(Value::Map(MapValue {
				value_shape: map.value_shape.clone(),
				entries,
			}))
		}
		other => Err(ConfigError::UnhandledKind {
			key: name.to_owned(),
			kind: other.kind(),
		}),
	}
}
