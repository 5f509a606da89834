use crate::config::render::scalar_text;
use crate::config::schema::Shape;
use crate::config::value::{Complex32, Complex64, Value};

/// Convert `value` into the shape required at its destination.
///
/// The single conversion point for the record-field and map-entry write
/// sites, so both container kinds coerce identically. Returns `None`
/// when no conversion exists; the caller raises `IncompatibleType` with
/// its own segment context.
///
/// Conversions beyond exact kind matches: numeric kinds convert among
/// each other (floats truncate toward zero into integers, signed and
/// unsigned reject out-of-range values), complex kinds widen and narrow,
/// strings parse into numerics and booleans, scalars format into
/// strings, and bytes exchange with strings through UTF-8.
pub(crate) fn coerce(value: Value, target: &Shape) -> Option<Value> {
	match target {
		Shape::Dyn => Some(value),
		Shape::Str => scalar_text(&value).map(Value::Str),
		Shape::Bool => to_bool(&value).map(Value::Bool),
		Shape::I64 => to_i64(&value).map(Value::I64),
		Shape::U64 => to_u64(&value).map(Value::U64),
		Shape::F32 => to_f64(&value).map(|v| Value::F32(v as f32)),
		Shape::F64 => to_f64(&value).map(Value::F64),
		Shape::C64 => match value {
			Value::C64(v) => Some(Value::C64(v)),
			Value::C128(v) => Some(Value::C64(Complex32::new(v.re as f32, v.im as f32))),
			_ => None,
		},
		Shape::C128 => match value {
			Value::C128(v) => Some(Value::C128(v)),
			Value::C64(v) => Some(Value::C128(Complex64::new(f64::from(v.re), f64::from(v.im)))),
			_ => None,
		},
		Shape::Bytes => match value {
			Value::Bytes(v) => Some(Value::Bytes(v)),
			Value::Str(v) => Some(Value::Bytes(v.into_bytes())),
			_ => None,
		},
		Shape::List(_) => match value {
			Value::List(items) => Some(Value::List(items)),
			_ => None,
		},
		Shape::Record(id) => match value {
			Value::Record(instance) if instance.record == *id => Some(Value::Record(instance)),
			_ => None,
		},
		Shape::Map(value_shape) => match value {
			Value::Map(map) if map.value_shape == **value_shape => Some(Value::Map(map)),
			_ => None,
		},
		Shape::Opt(inner) => match value {
			Value::Opt(cell) if cell.inner_shape == **inner => Some(Value::Opt(cell)),
			_ => None,
		},
	}
}

fn to_bool(value: &Value) -> Option<bool> {
	match value {
		Value::Bool(v) => Some(*v),
		Value::Str(v) => v.parse().ok(),
		_ => None,
	}
}

fn to_i64(value: &Value) -> Option<i64> {
	match value {
		Value::I64(v) => Some(*v),
		Value::U64(v) => i64::try_from(*v).ok(),
		Value::F32(v) => Some(*v as i64),
		Value::F64(v) => Some(*v as i64),
		Value::Str(v) => v.parse().ok(),
		_ => None,
	}
}

fn to_u64(value: &Value) -> Option<u64> {
	match value {
		Value::U64(v) => Some(*v),
		Value::I64(v) => u64::try_from(*v).ok(),
		Value::F32(v) => Some(*v as u64),
		Value::F64(v) => Some(*v as u64),
		Value::Str(v) => v.parse().ok(),
		_ => None,
	}
}

fn to_f64(value: &Value) -> Option<f64> {
	match value {
		Value::I64(v) => Some(*v as f64),
		Value::U64(v) => Some(*v as f64),
		Value::F32(v) => Some(f64::from(*v)),
		Value::F64(v) => Some(*v),
		Value::Str(v) => v.parse().ok(),
		_ => None,
	}
}
