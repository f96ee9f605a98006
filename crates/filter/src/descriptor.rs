// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Filter descriptors and their JSON wire form.
//!
//! ```text
//! {
//!   "combine": "and",
//!   "filters": [
//!     ["x", ">", 5],
//!     ["obs/leiden", "in", ["1", "3"]],
//!     [{"basis": "umap", "ndim": 2}, "in", {"path": [{"x": 0, "y": 0, "width": 10, "height": 10}]}]
//!   ]
//! }
//! ```
//!
//! The shape of the field decides the descriptor kind once, at parse time:
//! a string addresses a column, an object addresses a coordinate basis.

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use sieve_type::{Error, Result, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
	In,
	Gt,
	Eq,
	Lt,
	Ne,
	Ge,
	Le,
}

impl FromStr for Operator {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"in" => Ok(Operator::In),
			">" => Ok(Operator::Gt),
			"=" => Ok(Operator::Eq),
			"<" => Ok(Operator::Lt),
			"!=" => Ok(Operator::Ne),
			">=" => Ok(Operator::Ge),
			"<=" => Ok(Operator::Le),
			_ => Err(Error::unsupported_operator(s)),
		}
	}
}

impl Display for Operator {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Operator::In => f.write_str("in"),
			Operator::Gt => f.write_str(">"),
			Operator::Eq => f.write_str("="),
			Operator::Lt => f.write_str("<"),
			Operator::Ne => f.write_str("!="),
			Operator::Ge => f.write_str(">="),
			Operator::Le => f.write_str("<="),
		}
	}
}

/// How index sets are merged: `Or` is union, `And` is intersection.
///
/// On the wire only the literal `"or"` selects `Or`; a missing value or any
/// other value selects `And`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CombineMode {
	#[default]
	And,
	Or,
}

impl CombineMode {
	pub fn parse(s: &str) -> Self {
		if s == "or" {
			CombineMode::Or
		} else {
			CombineMode::And
		}
	}
}

impl Display for CombineMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			CombineMode::And => f.write_str("and"),
			CombineMode::Or => f.write_str("or"),
		}
	}
}

impl<'de> Deserialize<'de> for CombineMode {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		Ok(match JsonValue::deserialize(deserializer)? {
			JsonValue::String(s) => CombineMode::parse(&s),
			_ => CombineMode::And,
		})
	}
}

fn default_dimensions() -> u8 {
	2
}

/// A coordinate system (usually an embedding) addressed by spatial selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basis {
	#[serde(rename = "basis")]
	pub name: String,
	#[serde(default = "default_dimensions", alias = "dimensions")]
	pub ndim: u8,
	#[serde(default)]
	pub nbins: Option<u32>,
	#[serde(default)]
	pub agg: Option<String>,
}

impl Basis {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			ndim: 2,
			nbins: None,
			agg: None,
		}
	}

	pub fn with_dimensions(mut self, ndim: u8) -> Self {
		self.ndim = ndim;
		self
	}

	pub fn with_bins(mut self, nbins: u32, agg: Option<&str>) -> Self {
		self.nbins = Some(nbins);
		self.agg = agg.map(str::to_string);
		self
	}

	pub fn is_binned(&self) -> bool {
		self.nbins.is_some()
	}
}

/// An axis aligned rectangle, or a cuboid when `z` is present.
///
/// Bounds are inclusive on both ends of every axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub z: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub depth: Option<f64>,
}

impl Region {
	pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
			z: None,
			depth: None,
		}
	}

	pub fn cuboid(x: f64, y: f64, z: f64, width: f64, height: f64, depth: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
			z: Some(z),
			depth: Some(depth),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionValue {
	/// Pre-resolved row indices.
	Points(Vec<u64>),
	/// Brush or lasso regions, in drawing order.
	Path(Vec<Region>),
}

impl SelectionValue {
	fn from_json(value: JsonValue) -> Result<Self> {
		let JsonValue::Object(mut object) = value else {
			return Err(Error::invalid_descriptor("selection value must be an object"));
		};

		match object.remove("points") {
			Some(JsonValue::Null) | None => {}
			Some(points) => return Ok(SelectionValue::Points(serde_json::from_value(points)?)),
		}

		match object.remove("path") {
			Some(JsonValue::Null) | None => {
				Err(Error::invalid_descriptor("selection value requires 'points' or 'path'"))
			}
			Some(path) => Ok(SelectionValue::Path(serde_json::from_value(path)?)),
		}
	}
}

/// Comparison operand of a column descriptor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
	Scalar(Value),
	List(Vec<Value>),
}

impl FilterValue {
	pub fn list<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
		FilterValue::List(values.into_iter().map(Into::into).collect())
	}
}

impl From<Value> for FilterValue {
	fn from(value: Value) -> Self {
		FilterValue::Scalar(value)
	}
}

impl From<Vec<Value>> for FilterValue {
	fn from(values: Vec<Value>) -> Self {
		FilterValue::List(values)
	}
}

impl From<i64> for FilterValue {
	fn from(value: i64) -> Self {
		FilterValue::Scalar(Value::Int8(value))
	}
}

impl From<i32> for FilterValue {
	fn from(value: i32) -> Self {
		FilterValue::Scalar(Value::Int8(value as i64))
	}
}

impl From<f64> for FilterValue {
	fn from(value: f64) -> Self {
		FilterValue::Scalar(Value::Float8(value))
	}
}

impl From<&str> for FilterValue {
	fn from(value: &str) -> Self {
		FilterValue::Scalar(Value::utf8(value))
	}
}

/// The field a descriptor addresses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldRef {
	Column(String),
	Spatial(Basis),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilter {
	pub field: String,
	pub operator: String,
	pub value: FilterValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpatialSelection {
	pub basis: Basis,
	pub value: SelectionValue,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawDescriptor")]
pub enum FilterDescriptor {
	Column(ColumnFilter),
	Spatial(SpatialSelection),
}

impl FilterDescriptor {
	pub fn column(field: impl Into<String>, operator: impl Into<String>, value: impl Into<FilterValue>) -> Self {
		FilterDescriptor::Column(ColumnFilter {
			field: field.into(),
			operator: operator.into(),
			value: value.into(),
		})
	}

	pub fn points(basis: Basis, points: impl IntoIterator<Item = u64>) -> Self {
		FilterDescriptor::Spatial(SpatialSelection {
			basis,
			value: SelectionValue::Points(points.into_iter().collect()),
		})
	}

	pub fn path(basis: Basis, regions: impl IntoIterator<Item = Region>) -> Self {
		FilterDescriptor::Spatial(SpatialSelection {
			basis,
			value: SelectionValue::Path(regions.into_iter().collect()),
		})
	}

	/// Dispatches on the shape of `field`. The operator token of a spatial
	/// descriptor is not interpreted.
	pub fn from_parts(field: FieldRef, operator: String, value: JsonValue) -> Result<Self> {
		match field {
			FieldRef::Column(field) => Ok(FilterDescriptor::Column(ColumnFilter {
				field,
				operator,
				value: serde_json::from_value(value)?,
			})),
			FieldRef::Spatial(basis) => {
				if !(2..=3).contains(&basis.ndim) {
					return Err(Error::invalid_descriptor(format!(
						"basis '{}' has {} dimensions, expected 2 or 3",
						basis.name, basis.ndim
					)));
				}
				Ok(FilterDescriptor::Spatial(SpatialSelection {
					basis,
					value: SelectionValue::from_json(value)?,
				}))
			}
		}
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDescriptor {
	Triple(FieldRef, String, JsonValue),
	Object {
		field: FieldRef,
		#[serde(alias = "op")]
		operator: String,
		value: JsonValue,
	},
}

impl TryFrom<RawDescriptor> for FilterDescriptor {
	type Error = Error;

	fn try_from(raw: RawDescriptor) -> Result<Self> {
		match raw {
			RawDescriptor::Triple(field, operator, value) => FilterDescriptor::from_parts(field, operator, value),
			RawDescriptor::Object {
				field,
				operator,
				value,
			} => FilterDescriptor::from_parts(field, operator, value),
		}
	}
}

/// An ordered list of descriptors reduced with one combine mode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterSet {
	#[serde(default)]
	pub filters: Vec<FilterDescriptor>,
	#[serde(default)]
	pub combine: CombineMode,
}

impl FilterSet {
	pub fn new(combine: CombineMode) -> Self {
		Self {
			filters: Vec::new(),
			combine,
		}
	}

	pub fn and() -> Self {
		Self::new(CombineMode::And)
	}

	pub fn or() -> Self {
		Self::new(CombineMode::Or)
	}

	pub fn with(mut self, descriptor: FilterDescriptor) -> Self {
		self.filters.push(descriptor);
		self
	}

	pub fn len(&self) -> usize {
		self.filters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}

	/// Parses the wire form. A JSON `null` is "no filter set"; a missing or
	/// `null` filter list is an empty one.
	///
	/// Descriptor errors keep their own variant instead of surfacing as
	/// generic JSON errors.
	pub fn from_json(json: &str) -> Result<Option<Self>> {
		let Some(raw) = serde_json::from_str::<Option<RawFilterSet>>(json)? else {
			return Ok(None);
		};

		let filters = raw
			.filters
			.unwrap_or_default()
			.into_iter()
			.map(FilterDescriptor::try_from)
			.collect::<Result<Vec<_>>>()?;

		Ok(Some(Self {
			filters,
			combine: raw.combine,
		}))
	}
}

#[derive(Deserialize)]
struct RawFilterSet {
	#[serde(default)]
	filters: Option<Vec<RawDescriptor>>,
	#[serde(default)]
	combine: CombineMode,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_operator_tokens() {
		for token in ["in", ">", "=", "<", "!=", ">=", "<="] {
			let operator: Operator = token.parse().unwrap();
			assert_eq!(operator.to_string(), token);
		}
	}

	#[test]
	fn test_unknown_operator() {
		let err = "~=".parse::<Operator>().unwrap_err();
		assert!(matches!(err, Error::UnsupportedOperator { operator } if operator == "~="));
	}

	#[test]
	fn test_combine_mode_defaults_to_and() {
		assert_eq!(CombineMode::parse("or"), CombineMode::Or);
		assert_eq!(CombineMode::parse("OR"), CombineMode::And);
		assert_eq!(CombineMode::parse("xor"), CombineMode::And);

		let set = FilterSet::from_json(r#"{"filters": []}"#).unwrap().unwrap();
		assert_eq!(set.combine, CombineMode::And);

		let set = FilterSet::from_json(r#"{"filters": [], "combine": 1}"#).unwrap().unwrap();
		assert_eq!(set.combine, CombineMode::And);

		let set = FilterSet::from_json(r#"{"filters": [], "combine": "or"}"#).unwrap().unwrap();
		assert_eq!(set.combine, CombineMode::Or);
	}

	#[test]
	fn test_null_filter_set() {
		assert_eq!(FilterSet::from_json("null").unwrap(), None);
	}

	#[test]
	fn test_missing_or_null_filters_are_empty() {
		for json in [r#"{}"#, r#"{"filters": null}"#, r#"{"filters": null, "combine": "or"}"#] {
			let set = FilterSet::from_json(json).unwrap().unwrap();
			assert!(set.is_empty(), "{json}");
		}
	}

	#[test]
	fn test_parse_column_descriptors() {
		let set = FilterSet::from_json(
			r#"{"filters": [["x", ">", 5], ["label", "in", ["a", "c"]], {"field": "y", "op": "<", "value": 10}]}"#,
		)
		.unwrap()
		.unwrap();

		assert_eq!(
			set.filters,
			vec![
				FilterDescriptor::column("x", ">", 5),
				FilterDescriptor::column("label", "in", FilterValue::list(["a", "c"])),
				FilterDescriptor::column("y", "<", 10),
			]
		);
	}

	#[test]
	fn test_unknown_operator_is_not_a_parse_error() {
		let set = FilterSet::from_json(r#"{"filters": [["x", "~=", 5]]}"#).unwrap().unwrap();
		assert_eq!(set.filters, vec![FilterDescriptor::column("x", "~=", 5)]);
	}

	#[test]
	fn test_parse_spatial_descriptors() {
		let set = FilterSet::from_json(
			r#"{"filters": [
				[{"basis": "umap"}, "in", {"points": [4, 1]}],
				[{"basis": "pca", "ndim": 3}, "in", {"path": [{"x": 0, "y": 1, "width": 2, "height": 3, "z": 4, "depth": 5}]}]
			]}"#,
		)
		.unwrap()
		.unwrap();

		assert_eq!(
			set.filters,
			vec![
				FilterDescriptor::points(Basis::new("umap"), [4, 1]),
				FilterDescriptor::path(
					Basis::new("pca").with_dimensions(3),
					[Region::cuboid(0.0, 1.0, 4.0, 2.0, 3.0, 5.0)]
				),
			]
		);
	}

	#[test]
	fn test_points_take_precedence_over_path() {
		let set = FilterSet::from_json(r#"{"filters": [[{"basis": "umap"}, "in", {"points": [2], "path": []}]]}"#)
			.unwrap()
			.unwrap();
		assert_eq!(set.filters, vec![FilterDescriptor::points(Basis::new("umap"), [2])]);
	}

	#[test]
	fn test_selection_requires_points_or_path() {
		let err = FilterSet::from_json(r#"{"filters": [[{"basis": "umap"}, "in", {}]]}"#).unwrap_err();
		assert_eq!(err.code(), "FILTER_003");
		assert!(err.to_string().contains("requires 'points' or 'path'"), "{err}");
	}

	#[test]
	fn test_invalid_dimensions() {
		let err = FilterSet::from_json(r#"{"filters": [[{"basis": "umap", "ndim": 4}, "in", {"points": []}]]}"#)
			.unwrap_err();
		assert_eq!(err.code(), "FILTER_003");
		assert!(err.to_string().contains("expected 2 or 3"), "{err}");
	}

	#[test]
	fn test_descriptor_deserializes_directly() {
		let descriptor: FilterDescriptor = serde_json::from_str(r#"["x", "=", "a"]"#).unwrap();
		assert_eq!(descriptor, FilterDescriptor::column("x", "=", "a"));
	}

	#[test]
	fn test_basis_ignores_unused_keys() {
		let basis: Basis = serde_json::from_str(r#"{"basis": "umap", "precomputed": true}"#).unwrap();
		assert_eq!(basis, Basis::new("umap"));
	}

	#[test]
	fn test_binned_basis() {
		let basis: Basis = serde_json::from_str(r#"{"basis": "umap", "nbins": 100, "agg": "max"}"#).unwrap();
		assert!(basis.is_binned());
		assert_eq!(basis, Basis::new("umap").with_bins(100, Some("max")));
	}
}
