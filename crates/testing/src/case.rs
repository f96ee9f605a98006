// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! JSON evaluation cases.
//!
//! ```text
//! {
//!   "dataset":  { "x": [1, 10, 3, 20] },
//!   "filter":   { "filters": [["x", ">", 5]] },
//!   "expected": [1, 3]
//! }
//! ```
//!
//! `"expected": null` asserts that no filter applied. A case may assert
//! `"error": "<code>"` instead, and may carry a `"config"` object.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_json::Value as JsonValue;
use sieve_filter::{FilterConfig, FilterEngine, FilterSet};
use sieve_type::Dataset;

#[derive(Debug, Deserialize)]
pub struct Case {
	#[serde(default)]
	pub description: String,
	pub dataset: JsonValue,
	#[serde(default)]
	pub filter: JsonValue,
	#[serde(default)]
	pub config: Option<FilterConfig>,
	#[serde(flatten)]
	pub outcome: Outcome,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
	Expected(Option<Vec<u32>>),
	Error(String),
}

impl Case {
	pub fn load(path: &Path) -> Self {
		let content = fs::read_to_string(path).unwrap_or_else(|err| panic!("{}: {}", path.display(), err));
		serde_json::from_str(&content).unwrap_or_else(|err| panic!("{}: malformed case: {}", path.display(), err))
	}

	/// Evaluates the case, returning the indices or the error code.
	pub fn evaluate(&self) -> Result<Option<Vec<u32>>, String> {
		let dataset = Dataset::from_json_value(self.dataset.clone()).map_err(|err| err.code().to_string())?;
		let engine = FilterEngine::new(self.config.clone().unwrap_or_default());
		let filter_set = FilterSet::from_json(&self.filter.to_string()).map_err(|err| err.code().to_string())?;

		engine.evaluate(&dataset, filter_set.as_ref())
			.map(|result| result.map(|indices| indices.to_vec()))
			.map_err(|err| err.code().to_string())
	}
}

/// Runs the case at `path`, panicking on a mismatch.
pub fn run_path(path: &Path) {
	let case = Case::load(path);
	let actual = case.evaluate();

	match &case.outcome {
		Outcome::Expected(expected) => {
			assert_eq!(actual.as_ref(), Ok(expected), "{}: {}", path.display(), case.description)
		}
		Outcome::Error(code) => {
			assert_eq!(actual.as_ref().err(), Some(code), "{}: {}", path.display(), case.description)
		}
	}
}
