// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use sieve_type::{Dataset, IndexSet, Result};
use tracing::{debug, instrument};

use crate::{
	config::FilterConfig,
	descriptor::FilterSet,
	plan::FilterPlan,
	resolve::{FieldNameResolver, VariantResolver},
};

/// Evaluates filter sets against datasets.
///
/// The engine holds configuration only; it is cheap to clone and can be
/// shared across threads.
#[derive(Clone)]
pub struct FilterEngine {
	config: FilterConfig,
	resolver: Arc<dyn FieldNameResolver>,
}

impl Default for FilterEngine {
	fn default() -> Self {
		Self::new(FilterConfig::default())
	}
}

impl FilterEngine {
	pub fn new(config: FilterConfig) -> Self {
		let resolver = Arc::new(VariantResolver::new(&config));
		Self {
			config,
			resolver,
		}
	}

	/// Replaces the configuration and rebuilds the default resolver from it.
	pub fn with_config(self, config: FilterConfig) -> Self {
		Self::new(config)
	}

	pub fn with_resolver(mut self, resolver: impl FieldNameResolver + 'static) -> Self {
		self.resolver = Arc::new(resolver);
		self
	}

	pub fn config(&self) -> &FilterConfig {
		&self.config
	}

	/// Returns `None` when there is nothing to filter by, otherwise the
	/// matching row indices. Every descriptor is validated before any column
	/// is scanned.
	#[instrument(name = "filter::evaluate", level = "debug", skip_all, fields(rows = dataset.row_count()))]
	pub fn evaluate(&self, dataset: &Dataset, filter_set: Option<&FilterSet>) -> Result<Option<IndexSet>> {
		let Some(filter_set) = filter_set else {
			debug!("no filter set");
			return Ok(None);
		};

		let plan = FilterPlan::compile(dataset, filter_set, &self.config, self.resolver.as_ref())?;
		let result = plan.execute();

		match &result {
			Some(indices) => debug!(matched = indices.len(), "evaluated filter set"),
			None => debug!("filter set is empty"),
		}
		Ok(result)
	}

	/// Parses the wire form and evaluates it.
	pub fn evaluate_json(&self, dataset: &Dataset, filter_set: &str) -> Result<Option<IndexSet>> {
		let filter_set = FilterSet::from_json(filter_set)?;
		self.evaluate(dataset, filter_set.as_ref())
	}
}

/// Evaluates with the default engine.
pub fn evaluate(dataset: &Dataset, filter_set: Option<&FilterSet>) -> Result<Option<IndexSet>> {
	FilterEngine::default().evaluate(dataset, filter_set)
}
