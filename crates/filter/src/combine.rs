// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sieve_type::IndexSet;

use crate::descriptor::CombineMode;

/// `Or` is union, `And` is intersection. Neither input is modified.
pub fn combine(left: &IndexSet, right: &IndexSet, mode: CombineMode) -> IndexSet {
	match mode {
		CombineMode::And => left.intersection(right),
		CombineMode::Or => left.union(right),
	}
}
