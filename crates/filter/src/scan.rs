// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sieve_type::{Column, IndexSet};
use tracing::{instrument, trace};

use crate::compile::Predicate;

/// Collects the indices of every cell in `column` that passes `predicate`.
///
/// Cells are visited once, in index order.
#[instrument(name = "filter::scan", level = "trace", skip_all, fields(column = column.name(), rows = column.len()))]
pub fn scan(column: &Column, predicate: &Predicate) -> IndexSet {
	let mut result = IndexSet::new();
	for (idx, value) in column.data().iter().enumerate() {
		if predicate.test(value) {
			result.insert(idx as u32);
		}
	}
	trace!(predicate = predicate.description(), matched = result.len(), "scanned");
	result
}

/// Inclusive numeric range scan.
pub fn scan_range(column: &Column, low: f64, high: f64) -> IndexSet {
	scan(column, &Predicate::between(low, high))
}
