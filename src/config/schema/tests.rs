use crate::config::{FieldShape, RecordId, Schema, SchemaError, Shape, Value};

fn demo_schema() -> (Schema, RecordId) {
	let mut schema = Schema::new();
	let config = schema.declare_record("Config");
	schema.define_record(
		config,
		vec![
			FieldShape::new("My", Shape::Str),
			FieldShape::new("Exotic", Shape::Map(Box::new(Shape::Record(config)))),
			FieldShape::new("Configuration", Shape::Bool),
		],
	);
	(schema, config)
}

#[test]
fn scalar_zero_values() {
	let schema = Schema::new();
	assert_eq!(schema.zero_value(&Shape::Str), Value::Str(String::new()));
	assert_eq!(schema.zero_value(&Shape::Bool), Value::Bool(false));
	assert_eq!(schema.zero_value(&Shape::I64), Value::I64(0));
	assert_eq!(schema.zero_value(&Shape::U64), Value::U64(0));
	assert_eq!(schema.zero_value(&Shape::F64), Value::F64(0.0));
}

#[test]
fn record_zero_value_is_recursive() {
	let (schema, config) = demo_schema();
	let Value::Record(instance) = schema.zero_value(&Shape::Record(config)) else {
		panic!("expected record zero");
	};
	assert_eq!(instance.record, config);
	assert_eq!(instance.fields[0], Value::Str(String::new()));
	let Value::Map(map) = &instance.fields[1] else {
		panic!("expected map zero");
	};
	assert!(map.entries.is_empty());
	assert_eq!(map.value_shape, Shape::Record(config));
	assert_eq!(instance.fields[2], Value::Bool(false));
}

#[test]
fn opt_zero_is_empty_cell() {
	let schema = Schema::new();
	let Value::Opt(cell) = schema.zero_value(&Shape::Opt(Box::new(Shape::I64))) else {
		panic!("expected empty cell");
	};
	assert_eq!(cell.inner_shape, Shape::I64);
	assert!(cell.inner.is_none());
}

#[test]
fn shape_names() {
	let (schema, config) = demo_schema();
	assert_eq!(schema.shape_name(&Shape::Str), "string");
	assert_eq!(schema.shape_name(&Shape::Record(config)), "Config");
	assert_eq!(schema.shape_name(&Shape::Map(Box::new(Shape::Record(config)))), "map<Config>");
	assert_eq!(schema.shape_name(&Shape::Opt(Box::new(Shape::F32))), "option<f32>");
	assert_eq!(schema.shape_name(&Shape::List(Box::new(Shape::U64))), "list<u64>");
}

#[test]
fn validate_accepts_map_indirected_self_reference() {
	let (schema, _) = demo_schema();
	assert_eq!(schema.validate(), Ok(()));
}

#[test]
fn validate_rejects_direct_self_containment() {
	let mut schema = Schema::new();
	let node = schema.declare_record("Node");
	schema.define_record(node, vec![FieldShape::new("Next", Shape::Record(node))]);
	assert_eq!(
		schema.validate(),
		Err(SchemaError::RecordCycle { name: "Node".to_owned() })
	);
}

#[test]
fn validate_rejects_mutual_direct_containment() {
	let mut schema = Schema::new();
	let a = schema.declare_record("A");
	let b = schema.declare_record("B");
	schema.define_record(a, vec![FieldShape::new("B", Shape::Record(b))]);
	schema.define_record(b, vec![FieldShape::new("A", Shape::Record(a))]);
	assert!(matches!(schema.validate(), Err(SchemaError::RecordCycle { .. })));
}

#[test]
fn validate_rejects_dangling_record_reference() {
	let mut schema = Schema::new();
	schema.add_record("Broken", vec![FieldShape::new("Ghost", Shape::Record(RecordId(7)))]);
	assert_eq!(schema.validate(), Err(SchemaError::UnknownRecord { index: 7 }));
}
