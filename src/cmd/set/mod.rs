use std::path::PathBuf;

use dotconf::config::{Value, Writer};

use crate::cmd::util::{CliResult, load_document, parse_value_arg, value_to_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	pub key: String,
	pub value: String,
	#[arg(long)]
	pub out: Option<PathBuf>,
	#[arg(long = "string")]
	pub as_string: bool,
}

/// Write a dotted key in a JSON document and emit the updated document.
pub fn run(args: Args) -> CliResult<()> {
	let Args {
		file,
		key,
		value,
		out,
		as_string,
	} = args;

	let mut config = load_document(&file)?;

	let parsed = if as_string { Value::Str(value) } else { parse_value_arg(&value) };
	config.write(&key, parsed)?;

	let document = value_to_json(config.schema(), config.root());
	let text = serde_json::to_string_pretty(&document)?;
	match out {
		Some(path) => std::fs::write(path, text + "\n")?,
		None => println!("{text}"),
	}
	Ok(())
}
