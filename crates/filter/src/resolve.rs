// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use crate::config::FilterConfig;

/// Maps a descriptor field name onto the name of the column it reads.
///
/// Field names may carry a namespace (`obs/leiden`) or a variant suffix
/// (`geneA_mean`) that do not belong to the column name.
pub trait FieldNameResolver: Send + Sync {
	fn resolve<'a>(&self, field: &'a str) -> Cow<'a, str>;
}

/// Uses field names as column names.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl FieldNameResolver for IdentityResolver {
	fn resolve<'a>(&self, field: &'a str) -> Cow<'a, str> {
		Cow::Borrowed(field)
	}
}

/// Strips a namespace prefix, then at most one variant suffix.
#[derive(Debug, Clone)]
pub struct VariantResolver {
	namespace_separator: Option<char>,
	suffixes: Vec<String>,
}

impl VariantResolver {
	pub fn new(config: &FilterConfig) -> Self {
		let mut suffixes = config.variant_suffixes.clone();
		// longest first, so `_geo_mean` wins over `_mean`
		suffixes.sort_by(|l, r| r.len().cmp(&l.len()));

		Self {
			namespace_separator: config.namespace_separator,
			suffixes,
		}
	}
}

impl Default for VariantResolver {
	fn default() -> Self {
		Self::new(&FilterConfig::default())
	}
}

impl FieldNameResolver for VariantResolver {
	fn resolve<'a>(&self, field: &'a str) -> Cow<'a, str> {
		let mut name = field;

		if let Some(separator) = self.namespace_separator {
			if let Some((_, rest)) = name.split_once(separator) {
				name = rest;
			}
		}

		for suffix in &self.suffixes {
			if let Some(base) = name.strip_suffix(suffix.as_str()) {
				if !base.is_empty() {
					return Cow::Borrowed(base);
				}
			}
		}

		Cow::Borrowed(name)
	}
}
