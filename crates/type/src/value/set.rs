// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use crate::value::{Value, ValueRef};

/// Hashable identity of a number for set membership.
///
/// Integral floats map onto the integer key, so `2` and `2.0` are the same
/// member. `-0.0` is `0` and every NaN is the same member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKey {
	Int(i64),
	Float(u64),
}

impl NumberKey {
	#[inline]
	pub fn from_i64(v: i64) -> Self {
		NumberKey::Int(v)
	}

	#[inline]
	pub fn from_f64(v: f64) -> Self {
		if v.is_nan() {
			return NumberKey::Float(f64::NAN.to_bits());
		}
		if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
			return NumberKey::Int(v as i64);
		}
		NumberKey::Float(v.to_bits())
	}
}

/// A materialized set of operands for `in` tests, with O(1) membership.
#[derive(Clone, Debug, Default)]
pub struct ValueSet {
	numbers: HashSet<NumberKey>,
	strings: HashSet<String>,
	has_true: bool,
	has_false: bool,
	has_undefined: bool,
}

impl ValueSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, value: Value) {
		match value {
			Value::Undefined => self.has_undefined = true,
			Value::Boolean(true) => self.has_true = true,
			Value::Boolean(false) => self.has_false = true,
			Value::Int8(v) => {
				self.numbers.insert(NumberKey::from_i64(v));
			}
			Value::Float8(v) => {
				self.numbers.insert(NumberKey::from_f64(v));
			}
			Value::Utf8(v) => {
				self.strings.insert(v);
			}
		}
	}

	#[inline]
	pub fn contains(&self, value: ValueRef<'_>) -> bool {
		match value {
			ValueRef::Undefined => self.has_undefined,
			ValueRef::Boolean(true) => self.has_true,
			ValueRef::Boolean(false) => self.has_false,
			ValueRef::Int8(v) => self.numbers.contains(&NumberKey::from_i64(v)),
			ValueRef::Float8(v) => self.numbers.contains(&NumberKey::from_f64(v)),
			ValueRef::Utf8(v) => self.strings.contains(v),
		}
	}

	pub fn len(&self) -> usize {
		self.numbers.len()
			+ self.strings.len()
			+ self.has_true as usize
			+ self.has_false as usize
			+ self.has_undefined as usize
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl FromIterator<Value> for ValueSet {
	fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
		let mut result = ValueSet::new();
		for value in iter {
			result.insert(value);
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_integral_float_matches_integer() {
		let set: ValueSet = vec![Value::Float8(2.0), Value::Int8(7)].into_iter().collect();
		assert!(set.contains(ValueRef::Int8(2)));
		assert!(set.contains(ValueRef::Float8(7.0)));
		assert!(!set.contains(ValueRef::Float8(2.5)));
		assert_eq!(set.len(), 2);
	}

	#[test]
	fn test_nan_and_negative_zero() {
		let set: ValueSet = vec![Value::Float8(f64::NAN), Value::Float8(-0.0)].into_iter().collect();
		assert!(set.contains(ValueRef::Float8(f64::NAN)));
		assert!(set.contains(ValueRef::Int8(0)));
		assert!(set.contains(ValueRef::Float8(0.0)));
	}

	#[test]
	fn test_kinds_do_not_mix() {
		let set: ValueSet = vec![Value::utf8("1"), Value::Boolean(true)].into_iter().collect();
		assert!(!set.contains(ValueRef::Int8(1)));
		assert!(set.contains(ValueRef::Utf8("1")));
		assert!(set.contains(ValueRef::Boolean(true)));
		assert!(!set.contains(ValueRef::Boolean(false)));
		assert!(!set.contains(ValueRef::Undefined));
	}

	#[test]
	fn test_empty() {
		let set = ValueSet::new();
		assert!(set.is_empty());
		assert!(!set.contains(ValueRef::Utf8("a")));
	}
}
