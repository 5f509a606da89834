use std::path::PathBuf;

use dotconf::config::Reader;

use crate::cmd::util::{CliResult, emit_json, load_document, value_to_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	pub key: String,
	#[arg(long)]
	pub string: bool,
	#[arg(long)]
	pub json: bool,
}

/// Resolve a dotted key in a JSON document and print the result.
pub fn run(args: Args) -> CliResult<()> {
	let Args { file, key, string, json } = args;

	let config = load_document(&file)?;

	if string {
		let text = config.read_string(&key)?;
		println!("{text}");
		return Ok(());
	}

	let value = config.read(&key)?;
	let rendered = value_to_json(config.schema(), &value);

	if json {
		let payload = GetJson {
			file: file.display().to_string(),
			key,
			kind: value.kind(),
			value: rendered,
		};
		return emit_json(&payload);
	}

	println!("{}", serde_json::to_string(&rendered)?);
	Ok(())
}

#[derive(serde::Serialize)]
struct GetJson {
	file: String,
	key: String,
	kind: &'static str,
	value: serde_json::Value,
}
