use crate::config::error::Result;
use crate::config::path::KeyPath;
use crate::config::read::resolve;
use crate::config::render::project_string;
use crate::config::schema::Schema;
use crate::config::value::Value;
use crate::config::write::write_value;

/// Read access to a keyed configuration.
pub trait Reader {
	/// Resolve a dotted key to its raw value.
	fn read(&self, key: &str) -> Result<Value>;

	/// Resolve a dotted key and project the result to canonical text.
	fn read_string(&self, key: &str) -> Result<String>;
}

/// Write access to a keyed configuration.
pub trait Writer {
	/// Resolve a dotted key, coerce `value` to the destination shape, and
	/// commit it. A failed write commits nothing.
	fn write(&mut self, key: &str, value: Value) -> Result<()>;
}

/// Combined read and write access.
pub trait ReadWriter: Reader + Writer {}

impl<T: Reader + Writer> ReadWriter for T {}

impl<T: Reader + ?Sized> Reader for &T {
	fn read(&self, key: &str) -> Result<Value> {
		(**self).read(key)
	}

	fn read_string(&self, key: &str) -> Result<String> {
		(**self).read_string(key)
	}
}

impl<T: Reader + ?Sized> Reader for &mut T {
	fn read(&self, key: &str) -> Result<Value> {
		(**self).read(key)
	}

	fn read_string(&self, key: &str) -> Result<String> {
		(**self).read_string(key)
	}
}

impl<T: Writer + ?Sized> Writer for &mut T {
	fn write(&mut self, key: &str, value: Value) -> Result<()> {
		(**self).write(key, value)
	}
}

/// Configuration handle owning one root value and its shape registry.
///
/// Reads never mutate. A successful write replaces the held root with
/// the rebuilt tree; a failed write leaves it untouched. The handle is
/// deliberately not synchronized: concurrent writers must serialize
/// externally, which Rust's borrow rules already force for a single
/// `Config`.
#[derive(Debug, Clone)]
pub struct Config {
	schema: Schema,
	root: Value,
}

impl Config {
	/// Wrap an existing root value and its shape registry.
	pub fn new(schema: Schema, root: Value) -> Self {
		Self { schema, root }
	}

	/// Wrap a root value that references no record shapes.
	pub fn untyped(root: Value) -> Self {
		Self::new(Schema::new(), root)
	}

	/// Current root value.
	pub fn root(&self) -> &Value {
		&self.root
	}

	/// Shape registry backing record lookups.
	pub fn schema(&self) -> &Schema {
		&self.schema
	}

	/// Consume the handle, returning the root value.
	pub fn into_root(self) -> Value {
		self.root
	}
}

impl Reader for Config {
	fn read(&self, key: &str) -> Result<Value> {
		let path = KeyPath::parse(key);
		resolve(&self.schema, &path.segments, &self.root).map(Value::clone)
	}

	fn read_string(&self, key: &str) -> Result<String> {
		let path = KeyPath::parse(key);
		let value = resolve(&self.schema, &path.segments, &self.root)?;
		project_string(value, key)
	}
}

impl Writer for Config {
	fn write(&mut self, key: &str, value: Value) -> Result<()> {
		let path = KeyPath::parse(key);
		let next = write_value(&self.schema, &path.segments, &self.root, value)?;
		self.root = next;
		Ok(())
	}
}
