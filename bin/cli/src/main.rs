// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sieve_sub_tracing::{Format, LevelFilter, TracingBuilder};

mod error;
mod eval;

use error::CliError;
use eval::EvalArgs;

#[derive(Parser, Debug)]
#[command(name = "sieve", version, about = "Evaluate filter sets against columnar datasets")]
struct Cli {
	/// Log level used when RUST_LOG is not set
	#[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
	log_level: LevelFilter,

	/// Log line layout: pretty, compact or json
	#[arg(long, global = true, default_value = "compact", value_name = "FORMAT")]
	log_format: Format,

	/// Env-filter directive, e.g. `sieve_filter=trace`; overrides the level
	#[arg(long, global = true, value_name = "DIRECTIVE")]
	log_filter: Option<String>,

	/// Disable ANSI colors in log lines
	#[arg(long, global = true)]
	no_color: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the row indices a filter set selects
	Eval(EvalArgs),
}

impl Cli {
	fn tracing(&self) -> TracingBuilder {
		let builder =
			TracingBuilder::new().with_level(self.log_level).with_format(self.log_format).with_ansi(!self.no_color);
		match &self.log_filter {
			Some(directive) => builder.with_directive(directive),
			None => builder,
		}
	}
}

fn run(cli: Cli) -> Result<(), CliError> {
	cli.tracing().init()?;

	match &cli.command {
		Command::Eval(args) => eval::run(args),
	}
}

fn main() -> ExitCode {
	match run(Cli::parse()) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{}", err);
			err.exit_code()
		}
	}
}
