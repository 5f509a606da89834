#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "dotconf", about = "Dotted-key access into JSON configuration documents")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Get(cmd::get::Args),
	Set(cmd::set::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::util::CliResult<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Get(args) => cmd::get::run(args),
		Commands::Set(args) => cmd::set::run(args),
	}
}
