// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Compilation of descriptor operands into predicate closures.
//!
//! Every operand is captured by its closure once, at compile time; scanning
//! only calls the closure per cell. Operator validation happens here, so an
//! unknown operator never reaches a scan.

use std::{
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

use sieve_type::{
	Error, Result, Value, ValueRef, ValueSet,
	value::compare::{
		is_equal, is_greater_than, is_greater_than_equal, is_less_than, is_less_than_equal, is_not_equal,
	},
};

use crate::descriptor::{FilterValue, Operator};

type TestFn = dyn Fn(ValueRef<'_>) -> bool + Send + Sync;

/// A compiled single-cell test.
#[derive(Clone)]
pub struct Predicate {
	description: String,
	test: Arc<TestFn>,
}

impl Predicate {
	pub fn new<F>(description: impl Into<String>, test: F) -> Self
	where
		F: Fn(ValueRef<'_>) -> bool + Send + Sync + 'static,
	{
		Self {
			description: description.into(),
			test: Arc::new(test),
		}
	}

	/// Inclusive numeric range; NaN and non-numeric cells never pass.
	pub fn between(low: f64, high: f64) -> Self {
		Self::new(format!("between [{}, {}]", low, high), move |value| {
			value.as_f64().is_some_and(|v| v >= low && v <= high)
		})
	}

	#[inline]
	pub fn test(&self, value: ValueRef<'_>) -> bool {
		(self.test)(value)
	}

	pub fn description(&self) -> &str {
		&self.description
	}
}

impl Debug for Predicate {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Predicate").field(&self.description).finish()
	}
}

/// Compiles an operator token and its operand into a [`Predicate`].
pub fn compile_predicate(operator: &str, value: &FilterValue) -> Result<Predicate> {
	let operator: Operator = operator.parse()?;

	match operator {
		Operator::In => Ok(compile_in(value)),
		Operator::Gt => compile_comparison(operator, value, is_greater_than),
		Operator::Ge => compile_comparison(operator, value, is_greater_than_equal),
		Operator::Lt => compile_comparison(operator, value, is_less_than),
		Operator::Le => compile_comparison(operator, value, is_less_than_equal),
		Operator::Eq => compile_comparison(operator, value, is_equal),
		Operator::Ne => compile_comparison(operator, value, is_not_equal),
	}
}

fn compile_in(value: &FilterValue) -> Predicate {
	let set: ValueSet = match value {
		FilterValue::List(values) => values.iter().cloned().collect(),
		FilterValue::Scalar(value) => std::iter::once(value.clone()).collect(),
	};

	Predicate::new(format!("in ({} values)", set.len()), move |v| set.contains(v))
}

fn compile_comparison(
	operator: Operator,
	value: &FilterValue,
	compare: fn(ValueRef<'_>, ValueRef<'_>) -> bool,
) -> Result<Predicate> {
	let FilterValue::Scalar(operand) = value else {
		return Err(Error::invalid_descriptor(format!(
			"operator '{}' requires a scalar value, got a list",
			operator
		)));
	};

	let operand: Value = operand.clone();
	Ok(Predicate::new(format!("{} {}", operator, operand), move |v| compare(v, operand.as_ref())))
}
