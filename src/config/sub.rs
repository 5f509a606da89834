use crate::config::error::Result;
use crate::config::store::{Reader, Writer};
use crate::config::value::Value;

/// Namespace decorator prefixing every forwarded key with a fixed prefix.
///
/// Enables abstractions such as profiles, where `my.key` becomes for
/// example `profiles.default.my.key`, without the resolver engine
/// knowing about prefixes. Decorators nest, and wrap owned handles or
/// borrowed ones alike.
#[derive(Debug)]
pub struct Sub<T> {
	inner: T,
	prefix: String,
}

impl<T> Sub<T> {
	/// Wrap `inner`, prefixing every forwarded key with `prefix`.
	pub fn new(inner: T, prefix: impl Into<String>) -> Self {
		Self {
			inner,
			prefix: prefix.into(),
		}
	}

	/// Consume the decorator, returning the wrapped value.
	pub fn into_inner(self) -> T {
		self.inner
	}

	fn resolve(&self, key: &str) -> String {
		format!("{}.{}", self.prefix, key)
	}
}

impl<T: Reader> Reader for Sub<T> {
	fn read(&self, key: &str) -> Result<Value> {
		self.inner.read(&self.resolve(key))
	}

	fn read_string(&self, key: &str) -> Result<String> {
		self.inner.read_string(&self.resolve(key))
	}
}

impl<T: Writer> Writer for Sub<T> {
	fn write(&mut self, key: &str, value: Value) -> Result<()> {
		let key = self.resolve(key);
		self.inner.write(&key, value)
	}
}
