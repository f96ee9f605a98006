// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use sieve_type::Result;

/// Naming conventions the engine uses to map descriptors onto columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
	/// Joins a basis name and a coordinate ordinal: `umap` + `_` + `1`.
	pub coordinate_separator: String,
	/// Aggregation assumed when a binned basis does not name one.
	pub default_aggregation: String,
	/// Namespace prefixes up to this separator are dropped from field names.
	pub namespace_separator: Option<char>,
	/// Variant suffixes dropped from field names, e.g. `geneA_mean`.
	pub variant_suffixes: Vec<String>,
}

impl Default for FilterConfig {
	fn default() -> Self {
		Self {
			coordinate_separator: "_".to_string(),
			default_aggregation: "count".to_string(),
			namespace_separator: Some('/'),
			variant_suffixes: vec!["_mean".to_string(), "_percent_expressed".to_string()],
		}
	}
}

impl FilterConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn with_coordinate_separator(mut self, separator: impl Into<String>) -> Self {
		self.coordinate_separator = separator.into();
		self
	}

	pub fn with_default_aggregation(mut self, aggregation: impl Into<String>) -> Self {
		self.default_aggregation = aggregation.into();
		self
	}

	pub fn with_namespace_separator(mut self, separator: Option<char>) -> Self {
		self.namespace_separator = separator;
		self
	}

	pub fn with_variant_suffixes<S: Into<String>>(mut self, suffixes: impl IntoIterator<Item = S>) -> Self {
		self.variant_suffixes = suffixes.into_iter().map(Into::into).collect();
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_partial_json_keeps_defaults() {
		let config = FilterConfig::from_json(r#"{"variant_suffixes": ["_sum"]}"#).unwrap();
		assert_eq!(config.variant_suffixes, vec!["_sum".to_string()]);
		assert_eq!(config.coordinate_separator, "_");
		assert_eq!(config.namespace_separator, Some('/'));
	}

	#[test]
	fn test_disable_namespace() {
		let config = FilterConfig::from_json(r#"{"namespace_separator": null}"#).unwrap();
		assert_eq!(config.namespace_separator, None);
	}

	#[test]
	fn test_builder() {
		let config = FilterConfig::new()
			.with_coordinate_separator("-")
			.with_default_aggregation("mean")
			.with_namespace_separator(None)
			.with_variant_suffixes(Vec::<String>::new());

		assert_eq!(config.coordinate_separator, "-");
		assert_eq!(config.default_aggregation, "mean");
		assert!(config.variant_suffixes.is_empty());
	}
}
