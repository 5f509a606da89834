use dotconf::config::{Config, FieldShape, MapEntry, MapValue, Reader, RecordId, Schema, Shape, Value, Writer};

fn demo_config() -> (Config, RecordId) {
	let mut schema = Schema::new();
	let demo = schema.declare_record("Config");
	schema.define_record(
		demo,
		vec![
			FieldShape::new("My", Shape::Str),
			FieldShape::new("Exotic", Shape::Map(Box::new(Shape::Record(demo)))),
			FieldShape::new("Configuration", Shape::Bool),
		],
	);
	let root = schema.zero_value(&Shape::Record(demo));
	(Config::new(schema, root), demo)
}

#[test]
fn writing_an_absent_map_key_creates_it() {
	let mut schema = Schema::new();
	let data = schema.add_record("Data", vec![FieldShape::new("Foo", Shape::Map(Box::new(Shape::Str)))]);
	let root = schema.zero_value(&Shape::Record(data));
	let mut config = Config::new(schema, root);

	config.write("foo.bar", "baz".into()).expect("write succeeds");
	assert_eq!(config.read("foo.bar"), Ok(Value::Str("baz".to_owned())));
}

#[test]
fn map_auto_creation_preserves_existing_entries() {
	let root = Value::Map(MapValue {
		value_shape: Shape::Str,
		entries: vec![MapEntry {
			key: "existing".to_owned(),
			value: Value::Str("kept".to_owned()),
		}],
	});
	let mut config = Config::untyped(root);

	config.write("fresh", "added".into()).expect("write succeeds");
	assert_eq!(config.read("existing"), Ok(Value::Str("kept".to_owned())));
	assert_eq!(config.read("fresh"), Ok(Value::Str("added".to_owned())));
}

#[test]
fn deep_auto_creation_through_nested_maps() {
	let (mut config, _) = demo_config();

	config
		.write("exotic.exotic.exotic.exotic.my", "Success!".into())
		.expect("write succeeds");
	assert_eq!(
		config.read_string("exotic.exotic.exotic.exotic.my"),
		Ok("Success!".to_owned())
	);

	// Intermediate entries exist as fully-zeroed records.
	assert_eq!(config.read_string("exotic.exotic.my"), Ok(String::new()));
	assert_eq!(config.read_string("exotic.exotic.configuration"), Ok("false".to_owned()));
}

#[test]
fn deep_auto_creation_does_not_disturb_earlier_writes() {
	let (mut config, _) = demo_config();

	config.write("my", "root value".into()).expect("write succeeds");
	config.write("exotic.first.my", "one".into()).expect("write succeeds");
	config.write("exotic.second.my", "two".into()).expect("write succeeds");

	assert_eq!(config.read_string("my"), Ok("root value".to_owned()));
	assert_eq!(config.read_string("exotic.first.my"), Ok("one".to_owned()));
	assert_eq!(config.read_string("exotic.second.my"), Ok("two".to_owned()));
}

#[test]
fn auto_created_entries_are_reachable_structurally() {
	let (mut config, demo) = demo_config();

	config.write("exotic.inner.my", "nested".into()).expect("write succeeds");

	let Ok(Value::Map(exotic)) = config.read("exotic") else {
		panic!("expected exotic map");
	};
	assert_eq!(exotic.entries.len(), 1);
	assert_eq!(exotic.entries[0].key, "inner");
	let Value::Record(instance) = &exotic.entries[0].value else {
		panic!("expected record entry");
	};
	assert_eq!(instance.record, demo);
}
