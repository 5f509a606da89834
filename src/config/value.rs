use crate::config::schema::{RecordId, Shape};

/// Complex scalar with 32-bit float components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex32 {
	/// Real component.
	pub re: f32,
	/// Imaginary component.
	pub im: f32,
}

impl Complex32 {
	/// Additive zero.
	pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

	/// Build a complex value from its components.
	pub const fn new(re: f32, im: f32) -> Self {
		Self { re, im }
	}
}

/// Complex scalar with 64-bit float components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex64 {
	/// Real component.
	pub re: f64,
	/// Imaginary component.
	pub im: f64,
}

impl Complex64 {
	/// Additive zero.
	pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

	/// Build a complex value from its components.
	pub const fn new(re: f64, im: f64) -> Self {
		Self { re, im }
	}
}

/// Runtime value held in a configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// UTF-8 string scalar.
	Str(String),
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar.
	U64(u64),
	/// 32-bit float scalar.
	F32(f32),
	/// 64-bit float scalar.
	F64(f64),
	/// Complex scalar, 32-bit components.
	C64(Complex32),
	/// Complex scalar, 64-bit components.
	C128(Complex64),
	/// Opaque byte payload. Stored as a leaf; never traversed by key.
	Bytes(Vec<u8>),
	/// Value sequence. Stored as a leaf; never traversed by key.
	List(Vec<Value>),
	/// Record instance with fields in declaration order.
	Record(RecordValue),
	/// String-keyed extensible map.
	Map(MapValue),
	/// Optional indirection, typed or dynamic.
	Opt(OptValue),
}

impl Value {
	/// Kind label used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Str(_) => "string",
			Value::Bool(_) => "bool",
			Value::I64(_) => "i64",
			Value::U64(_) => "u64",
			Value::F32(_) => "f32",
			Value::F64(_) => "f64",
			Value::C64(_) => "c64",
			Value::C128(_) => "c128",
			Value::Bytes(_) => "bytes",
			Value::List(_) => "list",
			Value::Record(_) => "record",
			Value::Map(_) => "map",
			Value::Opt(_) => "option",
		}
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Str(v.to_owned())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Str(v)
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::I64(v)
	}
}

impl From<u64> for Value {
	fn from(v: u64) -> Self {
		Value::U64(v)
	}
}

impl From<f32> for Value {
	fn from(v: f32) -> Self {
		Value::F32(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::F64(v)
	}
}

/// Record instance.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
	/// Shape id in the owning [`Schema`](super::Schema).
	pub record: RecordId,
	/// Field values parallel to the shape's declaration order.
	pub fields: Vec<Value>,
}

/// Map instance. Entries are insertion-ordered and unique by key.
#[derive(Debug, Clone, PartialEq)]
pub struct MapValue {
	/// Homogeneous shape required of every entry value.
	pub value_shape: Shape,
	/// Entries in insertion order.
	pub entries: Vec<MapEntry>,
}

impl MapValue {
	/// Build an empty map with the given value shape.
	pub fn empty(value_shape: Shape) -> Self {
		Self {
			value_shape,
			entries: Vec::new(),
		}
	}
}

/// One map entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEntry {
	/// Entry key with its original casing.
	pub key: String,
	/// Entry value.
	pub value: Value,
}

/// Optional indirection cell.
///
/// `inner_shape` is the shape a write may auto-vivify when the cell is
/// empty. A `Dyn` cell has no materializable zero inner value and cannot
/// be descended through while empty.
#[derive(Debug, Clone, PartialEq)]
pub struct OptValue {
	/// Shape of the wrapped value.
	pub inner_shape: Shape,
	/// Wrapped value, if present.
	pub inner: Option<Box<Value>>,
}

impl OptValue {
	/// Build an empty cell of the given inner shape.
	pub fn none(inner_shape: Shape) -> Self {
		Self {
			inner_shape,
			inner: None,
		}
	}

	/// Build a filled cell of the given inner shape.
	pub fn some(inner_shape: Shape, inner: Value) -> Self {
		Self {
			inner_shape,
			inner: Some(Box::new(inner)),
		}
	}
}
