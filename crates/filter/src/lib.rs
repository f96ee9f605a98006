// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Predicate and spatial selection evaluation over in-memory columnar data.
//!
//! A [`FilterSet`] is planned against a [`Dataset`] first: operators are
//! parsed, operands compiled and columns resolved. Only a plan that
//! compiled without error is scanned, so a bad descriptor never leaves a
//! half-evaluated result behind.

pub mod combine;
pub mod compile;
pub mod config;
pub mod descriptor;
pub mod evaluate;
pub mod plan;
pub mod resolve;
pub mod scan;
pub mod spatial;

pub use combine::combine;
pub use compile::{Predicate, compile_predicate};
pub use config::FilterConfig;
pub use descriptor::{
	Basis, ColumnFilter, CombineMode, FieldRef, FilterDescriptor, FilterSet, FilterValue, Operator, Region,
	SelectionValue, SpatialSelection,
};
pub use evaluate::{FilterEngine, evaluate};
pub use plan::FilterPlan;
pub use resolve::{FieldNameResolver, IdentityResolver, VariantResolver};
pub use scan::{scan, scan_range};
pub use sieve_type::{Column, ColumnData, Dataset, Error, IndexSet, Result, Value};
pub use spatial::{SelectionPlan, SpatialMatcher};
