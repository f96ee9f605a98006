// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Strict comparison of cells against operands.
//!
//! Integers and floats compare as numbers. Strings compare lexicographically
//! and booleans order `false < true`. Values of different kinds are never
//! coerced: they are unequal and unordered.

use std::cmp::Ordering;

use crate::value::ValueRef;

#[inline]
pub fn partial_cmp(l: ValueRef<'_>, r: ValueRef<'_>) -> Option<Ordering> {
	match (l, r) {
		(ValueRef::Int8(l), ValueRef::Int8(r)) => Some(l.cmp(&r)),
		(ValueRef::Int8(l), ValueRef::Float8(r)) => (l as f64).partial_cmp(&r),
		(ValueRef::Float8(l), ValueRef::Int8(r)) => l.partial_cmp(&(r as f64)),
		(ValueRef::Float8(l), ValueRef::Float8(r)) => l.partial_cmp(&r),
		(ValueRef::Utf8(l), ValueRef::Utf8(r)) => Some(l.cmp(r)),
		(ValueRef::Boolean(l), ValueRef::Boolean(r)) => Some(l.cmp(&r)),
		_ => None,
	}
}

#[inline]
pub fn is_equal(l: ValueRef<'_>, r: ValueRef<'_>) -> bool {
	match (l, r) {
		(ValueRef::Undefined, ValueRef::Undefined) => true,
		_ => partial_cmp(l, r).is_some_and(|o| o == Ordering::Equal),
	}
}

#[inline]
pub fn is_not_equal(l: ValueRef<'_>, r: ValueRef<'_>) -> bool {
	!is_equal(l, r)
}

#[inline]
pub fn is_greater_than(l: ValueRef<'_>, r: ValueRef<'_>) -> bool {
	partial_cmp(l, r).is_some_and(|o| o == Ordering::Greater)
}

#[inline]
pub fn is_greater_than_equal(l: ValueRef<'_>, r: ValueRef<'_>) -> bool {
	partial_cmp(l, r).is_some_and(|o| o != Ordering::Less)
}

#[inline]
pub fn is_less_than(l: ValueRef<'_>, r: ValueRef<'_>) -> bool {
	partial_cmp(l, r).is_some_and(|o| o == Ordering::Less)
}

#[inline]
pub fn is_less_than_equal(l: ValueRef<'_>, r: ValueRef<'_>) -> bool {
	partial_cmp(l, r).is_some_and(|o| o != Ordering::Greater)
}
