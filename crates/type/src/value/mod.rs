// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod compare;
mod set;

pub use set::{NumberKey, ValueSet};

/// A scalar filter operand, as carried by a filter descriptor.
///
/// Deserializes from the JSON scalars `null`, booleans, integers, floats and
/// strings. Integers that fit an `i64` become [`Value::Int8`], every other
/// number becomes [`Value::Float8`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte floating point
	Float8(f64),
	/// A UTF-8 encoded text.
	Utf8(String),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		Value::Float8(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn as_ref(&self) -> ValueRef<'_> {
		match self {
			Value::Undefined => ValueRef::Undefined,
			Value::Boolean(v) => ValueRef::Boolean(*v),
			Value::Int8(v) => ValueRef::Int8(*v),
			Value::Float8(v) => ValueRef::Float8(*v),
			Value::Utf8(v) => ValueRef::Utf8(v.as_str()),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		self.as_ref().fmt(f)
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int8(v as i64)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float8(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

/// A borrowed view of a single cell, produced while scanning a column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueRef<'a> {
	Undefined,
	Boolean(bool),
	Int8(i64),
	Float8(f64),
	Utf8(&'a str),
}

impl<'a> ValueRef<'a> {
	/// Numeric view of the cell; `None` for non-numeric kinds.
	#[inline]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			ValueRef::Int8(v) => Some(*v as f64),
			ValueRef::Float8(v) => Some(*v),
			_ => None,
		}
	}
}

impl Display for ValueRef<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ValueRef::Undefined => f.write_str("undefined"),
			ValueRef::Boolean(v) => write!(f, "{}", v),
			ValueRef::Int8(v) => write!(f, "{}", v),
			ValueRef::Float8(v) => write!(f, "{}", v),
			ValueRef::Utf8(v) => write!(f, "'{}'", v),
		}
	}
}
