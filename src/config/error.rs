use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Structural errors raised while traversing or mutating a value tree.
///
/// Every variant carries a dotted key path. Errors are constructed with
/// only the local segment at the point of failure; each enclosing
/// Record/Map recursion frame prepends its own consumed segment via
/// [`ConfigError::prefixed`] as the error unwinds, so the surfaced key
/// spells the full path from the original call to the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	/// No case-insensitively matching record field or map key.
	#[error("no such configuration key {key:?}")]
	NoSuchKey {
		/// Accumulated dotted key of the failing lookup.
		key: String,
	},
	/// Traversal or projection reached a kind it cannot handle.
	#[error("configuration key {key:?} has an unhandled kind {kind:?}")]
	UnhandledKind {
		/// Accumulated dotted key at the offending value.
		key: String,
		/// Kind label of the offending value.
		kind: &'static str,
	},
	/// A written value cannot be converted to the destination shape.
	#[error("configuration key {key:?} has an incompatible type {target:?}")]
	IncompatibleType {
		/// Accumulated dotted key of the destination.
		key: String,
		/// Canonical name of the required destination shape.
		target: String,
	},
}

impl ConfigError {
	/// Accumulated dotted key path carried by this error.
	pub fn key(&self) -> &str {
		match self {
			Self::NoSuchKey { key } | Self::UnhandledKind { key, .. } | Self::IncompatibleType { key, .. } => key,
		}
	}

	/// Return the same error with `segment` prepended to its key path.
	#[must_use]
	pub fn prefixed(self, segment: &str) -> Self {
		match self {
			Self::NoSuchKey { key } => Self::NoSuchKey { key: join_key(segment, &key) },
			Self::UnhandledKind { key, kind } => Self::UnhandledKind {
				key: join_key(segment, &key),
				kind,
			},
			Self::IncompatibleType { key, target } => Self::IncompatibleType {
				key: join_key(segment, &key),
				target,
			},
		}
	}
}

fn join_key(segment: &str, rest: &str) -> String {
	format!("{segment}.{rest}")
}

/// Shape-registry defects detected by [`Schema::validate`](super::Schema::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
	/// A shape references a record index outside the registry.
	#[error("shape references unknown record index {index}")]
	UnknownRecord {
		/// Offending record index.
		index: usize,
	},
	/// A record contains itself without an intervening indirection.
	#[error("record {name:?} contains itself without indirection")]
	RecordCycle {
		/// Name of the cyclic record.
		name: String,
	},
}
