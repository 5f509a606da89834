use crate::config::error::SchemaError;
use crate::config::value::{Complex32, Complex64, MapValue, OptValue, RecordValue, Value};

/// Index of a record shape inside a [`Schema`] registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub usize);

/// Closed kind descriptor for the statically expected type at a position.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
	/// UTF-8 string scalar.
	Str,
	/// Boolean scalar.
	Bool,
	/// Signed 64-bit integer scalar.
	I64,
	/// Unsigned 64-bit integer scalar.
	U64,
	/// 32-bit float scalar.
	F32,
	/// 64-bit float scalar.
	F64,
	/// Complex scalar with 32-bit components.
	C64,
	/// Complex scalar with 64-bit components.
	C128,
	/// Opaque byte payload.
	Bytes,
	/// Sequence with a fixed element shape. Not traversable by key.
	List(Box<Shape>),
	/// Named-field record shape from the registry.
	Record(RecordId),
	/// String-keyed extensible map with a homogeneous value shape.
	Map(Box<Shape>),
	/// Typed optional indirection.
	Opt(Box<Shape>),
	/// Dynamically-typed indirection accepting any value.
	Dyn,
}

/// One declared record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
	/// Field name as declared.
	pub name: Box<str>,
	/// Statically expected shape of the field's value.
	pub shape: Shape,
}

impl FieldShape {
	/// Build a field declaration.
	pub fn new(name: &str, shape: Shape) -> Self {
		Self {
			name: name.into(),
			shape,
		}
	}
}

/// One record declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordShape {
	/// Record type name, used in diagnostics.
	pub name: Box<str>,
	/// Field declarations in source order.
	pub fields: Vec<FieldShape>,
}

/// Registry of record shapes referenced by [`Shape::Record`] indices.
///
/// Index-based references let records mention themselves (for example a
/// record holding a map of itself) without reference-counted cycles.
/// Engine operations assume a well-formed registry and index the table
/// directly; [`Schema::validate`] checks hand-built registries up front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
	/// Record declarations; [`RecordId`] indexes into this table.
	pub records: Vec<RecordShape>,
}

impl Schema {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a fully-declared record, returning its id.
	pub fn add_record(&mut self, name: &str, fields: Vec<FieldShape>) -> RecordId {
		let id = RecordId(self.records.len());
		self.records.push(RecordShape { name: name.into(), fields });
		id
	}

	/// Reserve an id for a record so its own fields may reference it.
	pub fn declare_record(&mut self, name: &str) -> RecordId {
		self.add_record(name, Vec::new())
	}

	/// Fill in the fields of a previously declared record.
	pub fn define_record(&mut self, id: RecordId, fields: Vec<FieldShape>) {
		self.records[id.0].fields = fields;
	}

	/// Look up a record shape by id.
	pub fn record(&self, id: RecordId) -> &RecordShape {
		&self.records[id.0]
	}

	/// Construct the zero value of a shape.
	///
	/// Record zeros are built recursively with every field zeroed; maps
	/// and lists start empty; indirections start unfilled.
	pub fn zero_value(&self, shape: &Shape) -> Value {
		match shape {
			Shape::Str => Value::Str(String::new()),
			Shape::Bool => Value::Bool(false),
			Shape::I64 => Value::I64(0),
			Shape::U64 => Value::U64(0),
			Shape::F32 => Value::F32(0.0),
			Shape::F64 => Value::F64(0.0),
			Shape::C64 => Value::C64(Complex32::ZERO),
			Shape::C128 => Value::C128(Complex64::ZERO),
			Shape::Bytes => Value::Bytes(Vec::new()),
			Shape::List(_) => Value::List(Vec::new()),
			Shape::Record(id) => {
				let fields = self
					.record(*id)
					.fields
					.iter()
					.map(|field| self.zero_value(&field.shape))
					.collect();
				Value::Record(RecordValue { record: *id, fields })
			}
			Shape::Map(value_shape) => Value::Map(MapValue::empty((**value_shape).clone())),
			Shape::Opt(inner) => Value::Opt(OptValue::none((**inner).clone())),
			Shape::Dyn => Value::Opt(OptValue::none(Shape::Dyn)),
		}
	}

	/// Canonical human-readable name of a shape, used in error text.
	pub fn shape_name(&self, shape: &Shape) -> String {
		match shape {
			Shape::Str => "string".to_owned(),
			Shape::Bool => "bool".to_owned(),
			Shape::I64 => "i64".to_owned(),
			Shape::U64 => "u64".to_owned(),
			Shape::F32 => "f32".to_owned(),
			Shape::F64 => "f64".to_owned(),
			Shape::C64 => "c64".to_owned(),
			Shape::C128 => "c128".to_owned(),
			Shape::Bytes => "bytes".to_owned(),
			Shape::List(elem) => format!("list<{}>", self.shape_name(elem)),
			Shape::Record(id) => self.record(*id).name.to_string(),
			Shape::Map(value_shape) => format!("map<{}>", self.shape_name(value_shape)),
			Shape::Opt(inner) => format!("option<{}>", self.shape_name(inner)),
			Shape::Dyn => "dyn".to_owned(),
		}
	}

	/// Check the registry for dangling ids and impossible recursive shapes.
	///
	/// A record that contains itself through direct record fields (no
	/// intervening map, list, or indirection) has no finite zero value
	/// and is rejected.
	pub fn validate(&self) -> std::result::Result<(), SchemaError> {
		for record in &self.records {
			for field in &record.fields {
				self.check_refs(&field.shape)?;
			}
		}

		for (index, record) in self.records.iter().enumerate() {
			let mut visiting = vec![false; self.records.len()];
			if self.contains_directly(RecordId(index), RecordId(index), &mut visiting) {
				return Err(SchemaError::RecordCycle {
					name: record.name.to_string(),
				});
			}
		}

		Ok(())
	}

	fn check_refs(&self, shape: &Shape) -> std::result::Result<(), SchemaError> {
		match shape {
			Shape::Record(id) => {
				if id.0 >= self.records.len() {
					return Err(SchemaError::UnknownRecord { index: id.0 });
				}
				Ok(())
			}
			Shape::List(elem) | Shape::Map(elem) | Shape::Opt(elem) => self.check_refs(elem),
			_ => Ok(()),
		}
	}

	// Direct containment only: map/list/opt/dyn layers break the chain
	// because their zeros do not instantiate the referenced record.
	fn contains_directly(&self, from: RecordId, needle: RecordId, visiting: &mut [bool]) -> bool {
		for field in &self.record(from).fields {
			if let Shape::Record(id) = field.shape {
				if id == needle {
					return true;
				}
				if !visiting[id.0] {
					visiting[id.0] = true;
					if self.contains_directly(id, needle, visiting) {
						return true;
					}
				}
			}
		}
		false
	}
}

#[cfg(test)]
mod tests;
