// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Error, Result, value::ValueRef};

/// Typed storage of a single column.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
	Bool(Vec<bool>),
	Int8(Vec<i64>),
	Float8(Vec<f64>),
	Utf8(Vec<String>),
	/// Dictionary encoded text; cells read as their category label.
	Categorical {
		codes: Vec<u32>,
		categories: Vec<String>,
	},
}

impl ColumnData {
	pub fn bool(data: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(data.into_iter().collect())
	}

	pub fn int8(data: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(data.into_iter().collect())
	}

	pub fn float8(data: impl IntoIterator<Item = f64>) -> Self {
		ColumnData::Float8(data.into_iter().collect())
	}

	pub fn utf8<S: Into<String>>(data: impl IntoIterator<Item = S>) -> Self {
		ColumnData::Utf8(data.into_iter().map(Into::into).collect())
	}

	pub fn categorical<S: Into<String>>(
		codes: impl IntoIterator<Item = u32>,
		categories: impl IntoIterator<Item = S>,
	) -> Self {
		ColumnData::Categorical {
			codes: codes.into_iter().collect(),
			categories: categories.into_iter().map(Into::into).collect(),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(v) => v.len(),
			ColumnData::Int8(v) => v.len(),
			ColumnData::Float8(v) => v.len(),
			ColumnData::Utf8(v) => v.len(),
			ColumnData::Categorical {
				codes,
				..
			} => codes.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn kind(&self) -> &'static str {
		match self {
			ColumnData::Bool(_) => "bool",
			ColumnData::Int8(_) => "int8",
			ColumnData::Float8(_) => "float8",
			ColumnData::Utf8(_) => "utf8",
			ColumnData::Categorical {
				..
			} => "categorical",
		}
	}

	#[inline]
	pub fn get(&self, index: usize) -> Option<ValueRef<'_>> {
		match self {
			ColumnData::Bool(v) => v.get(index).map(|v| ValueRef::Boolean(*v)),
			ColumnData::Int8(v) => v.get(index).map(|v| ValueRef::Int8(*v)),
			ColumnData::Float8(v) => v.get(index).map(|v| ValueRef::Float8(*v)),
			ColumnData::Utf8(v) => v.get(index).map(|v| ValueRef::Utf8(v.as_str())),
			ColumnData::Categorical {
				codes,
				categories,
			} => codes.get(index).map(|code| match categories.get(*code as usize) {
				Some(label) => ValueRef::Utf8(label.as_str()),
				None => ValueRef::Undefined,
			}),
		}
	}

	/// Cells in row order.
	pub fn iter(&self) -> impl Iterator<Item = ValueRef<'_>> + '_ {
		(0..self.len()).filter_map(move |i| self.get(i))
	}
}

/// A named column of a dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Checks that every categorical code addresses an existing category.
	pub fn validate(&self) -> Result<()> {
		if let ColumnData::Categorical {
			codes,
			categories,
		} = &self.data
		{
			if let Some(code) = codes.iter().find(|code| **code as usize >= categories.len()) {
				return Err(Error::InvalidCategoryCode {
					column: self.name.clone(),
					code: *code,
					categories: categories.len(),
				});
			}
		}
		Ok(())
	}
}
