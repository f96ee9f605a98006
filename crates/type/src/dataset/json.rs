// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Loading datasets from their JSON form.
//!
//! ```text
//! {
//!   "x":       [1.5, 6.0, null],
//!   "count":   [1, 2, 3],
//!   "label":   ["a", "b", "a"],
//!   "cluster": { "codes": [0, 1, 0], "categories": ["b cell", "t cell"] }
//! }
//! ```
//!
//! Arrays are typed from their cells: all booleans become `Bool`, all
//! integers `Int8`, numbers mixed with floats or nulls `Float8` (null reads
//! as NaN) and all strings `Utf8`.

use serde_json::{Map, Value as JsonValue};

use crate::{Column, ColumnData, Dataset, Error, Result};

impl Dataset {
	pub fn from_json(json: &str) -> Result<Self> {
		let value: JsonValue = serde_json::from_str(json)?;
		Self::from_json_value(value)
	}

	pub fn from_json_value(value: JsonValue) -> Result<Self> {
		let JsonValue::Object(map) = value else {
			return Err(invalid("<root>", "expected an object of columns"));
		};

		let columns = map
			.into_iter()
			.map(|(name, value)| column_from_json(name, value))
			.collect::<Result<Vec<_>>>()?;

		Dataset::new(columns)
	}
}

fn column_from_json(name: String, value: JsonValue) -> Result<Column> {
	let data = match value {
		JsonValue::Array(cells) => infer_column_data(&name, cells)?,
		JsonValue::Object(object) => categorical_from_json(&name, object)?,
		_ => return Err(invalid(&name, "expected an array or a categorical object")),
	};
	Ok(Column::new(name, data))
}

fn infer_column_data(name: &str, cells: Vec<JsonValue>) -> Result<ColumnData> {
	if cells.is_empty() {
		return Ok(ColumnData::Float8(Vec::new()));
	}

	if cells.iter().all(JsonValue::is_boolean) {
		return Ok(ColumnData::bool(cells.iter().filter_map(JsonValue::as_bool)));
	}

	if cells.iter().all(JsonValue::is_i64) {
		return Ok(ColumnData::int8(cells.iter().filter_map(JsonValue::as_i64)));
	}

	if cells.iter().all(|c| c.is_number() || c.is_null()) {
		return Ok(ColumnData::float8(cells.iter().map(|c| c.as_f64().unwrap_or(f64::NAN))));
	}

	if cells.iter().all(JsonValue::is_string) {
		return Ok(ColumnData::Utf8(
			cells.into_iter()
				.filter_map(|c| match c {
					JsonValue::String(s) => Some(s),
					_ => None,
				})
				.collect(),
		));
	}

	Err(invalid(name, "cells mix unsupported or incompatible types"))
}

fn categorical_from_json(name: &str, mut object: Map<String, JsonValue>) -> Result<ColumnData> {
	let codes = match object.remove("codes") {
		Some(JsonValue::Array(codes)) => codes
			.iter()
			.map(|c| c.as_u64().and_then(|c| u32::try_from(c).ok()))
			.collect::<Option<Vec<u32>>>()
			.ok_or_else(|| invalid(name, "categorical codes must be non-negative integers"))?,
		_ => return Err(invalid(name, "categorical column requires a 'codes' array")),
	};

	let categories = match object.remove("categories") {
		Some(JsonValue::Array(categories)) => categories
			.into_iter()
			.map(|c| match c {
				JsonValue::String(s) => Some(s),
				_ => None,
			})
			.collect::<Option<Vec<String>>>()
			.ok_or_else(|| invalid(name, "categories must be strings"))?,
		_ => return Err(invalid(name, "categorical column requires a 'categories' array")),
	};

	Ok(ColumnData::Categorical {
		codes,
		categories,
	})
}

fn invalid(column: &str, message: &str) -> Error {
	Error::InvalidDataset {
		column: column.to_string(),
		message: message.to_string(),
	}
}
