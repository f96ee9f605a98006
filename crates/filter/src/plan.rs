// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sieve_type::{Column, Dataset, IndexSet, Result};
use tracing::{debug, instrument, trace};

use crate::{
	combine::combine,
	compile::{Predicate, compile_predicate},
	config::FilterConfig,
	descriptor::{CombineMode, FilterDescriptor, FilterSet},
	resolve::FieldNameResolver,
	scan::scan,
	spatial::{SelectionPlan, SpatialMatcher},
};

/// One planned descriptor.
#[derive(Debug)]
pub enum Step<'a> {
	Scan {
		column: &'a Column,
		predicate: Predicate,
	},
	Select(SelectionPlan<'a>),
}

impl Step<'_> {
	pub fn execute(&self, mode: CombineMode) -> IndexSet {
		match self {
			Step::Scan {
				column,
				predicate,
			} => scan(column, predicate),
			Step::Select(selection) => selection.evaluate(mode),
		}
	}
}

/// A filter set with every operator parsed, operand compiled and column
/// resolved. Executing it performs no validation and cannot fail.
#[derive(Debug)]
pub struct FilterPlan<'a> {
	steps: Vec<Step<'a>>,
	combine: CombineMode,
}

impl<'a> FilterPlan<'a> {
	#[instrument(name = "filter::plan::compile", level = "debug", skip_all, fields(filters = filter_set.len(), combine = %filter_set.combine))]
	pub fn compile(
		dataset: &'a Dataset,
		filter_set: &FilterSet,
		config: &FilterConfig,
		resolver: &dyn FieldNameResolver,
	) -> Result<Self> {
		let matcher = SpatialMatcher::new(dataset, config);
		let mut steps = Vec::with_capacity(filter_set.len());

		for descriptor in &filter_set.filters {
			let step = match descriptor {
				FilterDescriptor::Column(filter) => {
					let predicate = compile_predicate(&filter.operator, &filter.value)?;
					let resolved = resolver.resolve(&filter.field);
					let column = match dataset.get(&resolved) {
						Some(column) => column,
						None => dataset.column(&filter.field)?,
					};
					trace!(field = %filter.field, column = column.name(), predicate = predicate.description(), "planned scan");
					Step::Scan {
						column,
						predicate,
					}
				}
				FilterDescriptor::Spatial(selection) => Step::Select(matcher.plan(selection)?),
			};
			steps.push(step);
		}

		debug!(steps = steps.len(), "planned filter set");
		Ok(Self {
			steps,
			combine: filter_set.combine,
		})
	}

	pub fn steps(&self) -> &[Step<'a>] {
		&self.steps
	}

	/// Folds the steps left to right; `None` when there are no steps.
	pub fn execute(&self) -> Option<IndexSet> {
		self.steps.iter().fold(None, |acc, step| {
			let next = step.execute(self.combine);
			Some(match acc {
				None => next,
				Some(acc) => combine(&acc, &next, self.combine),
			})
		})
	}
}
