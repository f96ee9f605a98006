// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fs,
	io::{self, Write},
	path::{Path, PathBuf},
};

use clap::Args;
use serde::Serialize;
use sieve_filter::{Dataset, FilterConfig, FilterEngine, IndexSet};
use tracing::info;

use crate::error::CliError;

#[derive(Args, Debug)]
pub struct EvalArgs {
	/// Dataset as a JSON object of columns
	#[arg(long, value_name = "FILE")]
	pub dataset: PathBuf,

	/// Filter set in its JSON wire form
	#[arg(long, value_name = "FILE")]
	pub filter: PathBuf,

	/// Filter configuration overrides
	#[arg(long, value_name = "FILE")]
	pub config: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Output {
	pub filtered: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub count: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub indices: Option<IndexSet>,
}

impl From<Option<IndexSet>> for Output {
	fn from(result: Option<IndexSet>) -> Self {
		match result {
			None => Output {
				filtered: false,
				count: None,
				indices: None,
			},
			Some(indices) => Output {
				filtered: true,
				count: Some(indices.len()),
				indices: Some(indices),
			},
		}
	}
}

pub fn run(args: &EvalArgs) -> Result<(), CliError> {
	let dataset = read(&args.dataset)?;
	let filter = read(&args.filter)?;
	let config = args.config.as_deref().map(read).transpose()?;

	let output = evaluate(&dataset, &filter, config.as_deref())?;

	let mut stdout = io::stdout().lock();
	serde_json::to_writer(&mut stdout, &output).map_err(|err| CliError::Write(err.into()))?;
	writeln!(stdout).map_err(CliError::Write)?;
	Ok(())
}

pub fn evaluate(dataset: &str, filter: &str, config: Option<&str>) -> Result<Output, CliError> {
	let config = config.map(FilterConfig::from_json).transpose()?.unwrap_or_default();
	let dataset = Dataset::from_json(dataset)?;
	info!(rows = dataset.row_count(), columns = dataset.columns().count(), "loaded dataset");

	let result = FilterEngine::new(config).evaluate_json(&dataset, filter)?;
	Ok(Output::from(result))
}

fn read(path: &Path) -> Result<String, CliError> {
	fs::read_to_string(path).map_err(|source| CliError::Read {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	const DATASET: &str = r#"{"x": [1, 10, 3, 20], "y": [5, 5, 50, 50]}"#;

	#[test]
	fn test_filtered() {
		let output = evaluate(DATASET, r#"{"filters": [["x", ">", 5]]}"#, None).unwrap();
		assert_eq!(serde_json::to_string(&output).unwrap(), r#"{"filtered":true,"count":2,"indices":[1,3]}"#);
	}

	#[test]
	fn test_not_filtered() {
		let output = evaluate(DATASET, "null", None).unwrap();
		assert_eq!(serde_json::to_string(&output).unwrap(), r#"{"filtered":false}"#);
	}

	#[test]
	fn test_empty_match_is_filtered() {
		let output = evaluate(DATASET, r#"{"filters": [["x", ">", 100]]}"#, None).unwrap();
		assert_eq!(serde_json::to_string(&output).unwrap(), r#"{"filtered":true,"count":0,"indices":[]}"#);
	}

	#[test]
	fn test_config() {
		let dataset = r#"{"geneA": [0.0, 2.0], "geneA_mean": [5.0, 5.0]}"#;
		let filter = r#"{"filters": [["geneA_mean", ">", 1]]}"#;

		let output = evaluate(dataset, filter, None).unwrap();
		assert_eq!(output.count, Some(1));

		let output = evaluate(dataset, filter, Some(r#"{"variant_suffixes": []}"#)).unwrap();
		assert_eq!(output.count, Some(2));
	}

	#[test]
	fn test_bad_request() {
		let err = evaluate(DATASET, r#"{"filters": [["x", "~=", 5]]}"#, None).unwrap_err();
		assert_eq!(err.to_string(), "bad request [FILTER_001]: unsupported operator '~='");
	}
}
