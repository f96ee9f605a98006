// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{io, path::PathBuf, process::ExitCode};

use sieve_sub_tracing::TracingError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
	#[error("bad request [{code}]: {0}", code = .0.code())]
	Request(#[from] sieve_type::Error),

	#[error("cannot read '{}': {source}", path.display())]
	Read {
		path: PathBuf,
		source: io::Error,
	},

	#[error("cannot write output: {0}")]
	Write(#[source] io::Error),

	#[error(transparent)]
	Tracing(#[from] TracingError),
}

impl CliError {
	/// 2 for rejected input, 1 for everything else.
	pub fn exit_code(&self) -> ExitCode {
		match self {
			CliError::Request(_) => ExitCode::from(2),
			_ => ExitCode::FAILURE,
		}
	}
}
