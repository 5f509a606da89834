mod coerce;
mod error;
mod path;
mod read;
mod render;
mod schema;
mod store;
mod sub;
mod value;
mod write;

/// Error and result aliases.
pub use error::{ConfigError, Result, SchemaError};
/// Dotted key path parser.
pub use path::KeyPath;
/// Shape registry and kind descriptors.
pub use schema::{FieldShape, RecordId, RecordShape, Schema, Shape};
/// Configuration handle and access traits.
pub use store::{Config, ReadWriter, Reader, Writer};
/// Namespace decorator.
pub use sub::Sub;
/// Runtime value types.
pub use value::{Complex32, Complex64, MapEntry, MapValue, OptValue, RecordValue, Value};
