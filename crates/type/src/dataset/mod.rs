// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;

use crate::{Column, Error, Result};

mod json;

/// Named columns of equal length, addressed by row index `[0, row_count)`.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
	columns: IndexMap<String, Column>,
	row_count: usize,
}

impl Dataset {
	pub fn empty() -> Self {
		Self::default()
	}

	/// Builds a dataset, rejecting columns whose length differs from the
	/// first column, duplicate names and invalid categorical codes.
	pub fn new(columns: impl IntoIterator<Item = Column>) -> Result<Self> {
		let mut result: IndexMap<String, Column> = IndexMap::new();
		let mut row_count = None;

		for column in columns {
			column.validate()?;

			let actual = column.len();
			let expected = *row_count.get_or_insert(actual);
			if actual != expected {
				return Err(Error::ColumnLengthMismatch {
					name: column.name,
					expected,
					actual,
				});
			}

			if result.contains_key(&column.name) {
				return Err(Error::InvalidDataset {
					column: column.name,
					message: "duplicate column name".to_string(),
				});
			}
			result.insert(column.name.clone(), column);
		}

		let row_count = row_count.unwrap_or(0);
		if u32::try_from(row_count).is_err() {
			return Err(Error::TooManyRows {
				row_count,
			});
		}

		Ok(Self {
			columns: result,
			row_count,
		})
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	pub fn get(&self, name: &str) -> Option<&Column> {
		self.columns.get(name)
	}

	pub fn column(&self, name: &str) -> Result<&Column> {
		self.get(name).ok_or_else(|| Error::column_not_found(name))
	}

	pub fn contains(&self, name: &str) -> bool {
		self.columns.contains_key(name)
	}

	pub fn columns(&self) -> impl Iterator<Item = &Column> {
		self.columns.values()
	}

	pub fn column_names(&self) -> impl Iterator<Item = &str> {
		self.columns.keys().map(String::as_str)
	}
}
