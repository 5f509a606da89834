use dotconf::config::{Config, ConfigError, MapValue, Reader, Shape, Sub, Value, Writer};

fn profile_store() -> Config {
	let mut config = Config::untyped(Value::Map(MapValue::empty(Shape::Map(Box::new(Shape::Str)))));
	config.write("default.greeting", "hello".into()).expect("write succeeds");
	config.write("loud.greeting", "HELLO".into()).expect("write succeeds");
	config
}

#[test]
fn sub_prefixes_reads() {
	let config = profile_store();
	let scoped = Sub::new(&config, "default");
	assert_eq!(scoped.read_string("greeting"), Ok("hello".to_owned()));

	let scoped = Sub::new(&config, "loud");
	assert_eq!(scoped.read_string("greeting"), Ok("HELLO".to_owned()));
}

#[test]
fn sub_prefixes_writes() {
	let mut config = profile_store();
	{
		let mut scoped = Sub::new(&mut config, "default");
		scoped.write("farewell", "bye".into()).expect("write succeeds");
	}
	assert_eq!(config.read_string("default.farewell"), Ok("bye".to_owned()));
	assert_eq!(config.read("loud.farewell"), Err(ConfigError::NoSuchKey {
		key: "loud.farewell".to_owned(),
	}));
}

#[test]
fn subs_nest() {
	let mut config = Config::untyped(Value::Map(MapValue::empty(Shape::Map(Box::new(Shape::Map(
		Box::new(Shape::Str),
	))))));
	config.write("profiles.default.my", "value".into()).expect("write succeeds");

	let profiles = Sub::new(&config, "profiles");
	let scoped = Sub::new(profiles, "default");
	assert_eq!(scoped.read_string("my"), Ok("value".to_owned()));
}

#[test]
fn sub_errors_carry_the_prefixed_path() {
	let config = profile_store();
	let scoped = Sub::new(&config, "default");
	assert_eq!(
		scoped.read("missing"),
		Err(ConfigError::NoSuchKey {
			key: "default.missing".to_owned(),
		})
	);
}

#[test]
fn sub_can_own_its_inner_handle() {
	let mut scoped = Sub::new(profile_store(), "default");
	scoped.write("greeting", "hi".into()).expect("write succeeds");
	assert_eq!(scoped.read_string("greeting"), Ok("hi".to_owned()));

	let config = scoped.into_inner();
	assert_eq!(config.read_string("default.greeting"), Ok("hi".to_owned()));
}
