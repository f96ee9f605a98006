// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Point and path selections over the coordinate columns of a basis.
//!
//! A basis `umap` with two dimensions reads the columns `umap_1` and
//! `umap_2`; a binned basis reads through its computed name, e.g.
//! `umap_100_count_2_1`. Planning resolves every coordinate column and
//! checks every point before a single cell is scanned.

use sieve_type::{Column, Dataset, Error, IndexSet, Result};
use tracing::{debug, instrument};

use crate::{
	combine::combine,
	config::FilterConfig,
	descriptor::{Basis, CombineMode, Region, SelectionValue, SpatialSelection},
	scan::scan_range,
};

/// Column references in a plan borrow the dataset only, never the config.
pub struct SpatialMatcher<'a, 'c> {
	dataset: &'a Dataset,
	config: &'c FilterConfig,
}

impl<'a, 'c> SpatialMatcher<'a, 'c> {
	pub fn new(dataset: &'a Dataset, config: &'c FilterConfig) -> Self {
		Self {
			dataset,
			config,
		}
	}

	/// The name coordinate columns of `basis` are derived from.
	pub fn basis_name(&self, basis: &Basis) -> String {
		match basis.nbins {
			None => basis.name.clone(),
			Some(nbins) => {
				let sep = &self.config.coordinate_separator;
				let agg = basis.agg.as_deref().unwrap_or(&self.config.default_aggregation);
				format!("{}{sep}{}{sep}{}{sep}{}", basis.name, nbins, agg, basis.ndim)
			}
		}
	}

	pub fn coordinate_columns(&self, basis: &Basis) -> Result<Vec<&'a Column>> {
		let name = self.basis_name(basis);
		(1..=basis.ndim)
			.map(|axis| self.dataset.column(&format!("{}{}{}", name, self.config.coordinate_separator, axis)))
			.collect()
	}

	#[instrument(name = "filter::spatial::plan", level = "debug", skip_all, fields(basis = %selection.basis.name))]
	pub fn plan(&self, selection: &SpatialSelection) -> Result<SelectionPlan<'a>> {
		let basis = &selection.basis;
		if !(2..=3).contains(&basis.ndim) {
			return Err(Error::invalid_descriptor(format!(
				"basis '{}' has {} dimensions, expected 2 or 3",
				basis.name, basis.ndim
			)));
		}

		match &selection.value {
			SelectionValue::Points(points) => {
				if basis.is_binned() {
					return Err(Error::not_implemented("point selection on a binned basis"));
				}

				let row_count = self.dataset.row_count();
				let mut result = IndexSet::new();
				for &point in points {
					if point >= row_count as u64 {
						return Err(Error::PointOutOfRange {
							index: point,
							row_count,
						});
					}
					result.insert(point as u32);
				}
				debug!(points = result.len(), "planned point selection");
				Ok(SelectionPlan::Points(result))
			}
			SelectionValue::Path(regions) => {
				if basis.ndim == 2 && regions.iter().any(|region| region.z.is_some()) {
					return Err(Error::invalid_descriptor(format!(
						"region with 'z' on two dimensional basis '{}'",
						basis.name
					)));
				}

				let axes = self.coordinate_columns(basis)?;
				debug!(regions = regions.len(), axes = axes.len(), "planned path selection");
				Ok(SelectionPlan::Path {
					axes,
					regions: regions.clone(),
				})
			}
		}
	}
}

/// A spatial selection that passed planning; evaluating it cannot fail.
#[derive(Debug)]
pub enum SelectionPlan<'a> {
	Points(IndexSet),
	Path {
		axes: Vec<&'a Column>,
		regions: Vec<Region>,
	},
}

impl SelectionPlan<'_> {
	/// Regions of a path are folded in drawing order with the filter set's
	/// combine mode. An empty path selects nothing.
	pub fn evaluate(&self, mode: CombineMode) -> IndexSet {
		match self {
			SelectionPlan::Points(points) => points.clone(),
			SelectionPlan::Path {
				axes,
				regions,
			} => regions
				.iter()
				.map(|region| select_region(axes, region))
				.reduce(|acc, next| combine(&acc, &next, mode))
				.unwrap_or_default(),
		}
	}
}

fn select_region(axes: &[&Column], region: &Region) -> IndexSet {
	let mut bounds = vec![(region.x, region.x + region.width), (region.y, region.y + region.height)];
	if let Some(z) = region.z {
		bounds.push((z, z + region.depth.unwrap_or(0.0)));
	}

	axes.iter()
		.zip(bounds)
		.map(|(column, (low, high))| scan_range(column, low, high))
		.reduce(|acc, next| acc.intersection(&next))
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use sieve_type::ColumnData;

	use super::*;
	use crate::descriptor::FilterDescriptor;

	fn dataset() -> Dataset {
		Dataset::new([
			Column::new("umap_1", ColumnData::float8([1.0, 5.0, 20.0, 3.0])),
			Column::new("umap_2", ColumnData::float8([1.0, 5.0, 20.0, 30.0])),
			Column::new("pca_1", ColumnData::float8([0.0, 1.0, 2.0, 3.0])),
			Column::new("pca_2", ColumnData::float8([0.0, 1.0, 2.0, 3.0])),
			Column::new("pca_3", ColumnData::float8([0.0, 10.0, 2.0, 30.0])),
			Column::new("umap_10_count_2_1", ColumnData::float8([0.0, 1.0, 2.0, 3.0])),
			Column::new("umap_10_count_2_2", ColumnData::float8([0.0, 1.0, 2.0, 3.0])),
		])
		.unwrap()
	}

	fn selection(descriptor: FilterDescriptor) -> SpatialSelection {
		match descriptor {
			FilterDescriptor::Spatial(selection) => selection,
			FilterDescriptor::Column(_) => unreachable!(),
		}
	}

	fn run(descriptor: FilterDescriptor, mode: CombineMode) -> Result<Vec<u32>> {
		let dataset = dataset();
		let config = FilterConfig::default();
		let plan = SpatialMatcher::new(&dataset, &config).plan(&selection(descriptor))?;
		Ok(plan.evaluate(mode).to_vec())
	}

	#[test]
	fn test_single_rectangle() {
		let result = run(
			FilterDescriptor::path(Basis::new("umap"), [Region::rect(0.0, 0.0, 10.0, 10.0)]),
			CombineMode::And,
		)
		.unwrap();
		assert_eq!(result, vec![0, 1]);
	}

	#[test]
	fn test_region_bounds_are_inclusive() {
		let result = run(
			FilterDescriptor::path(Basis::new("umap"), [Region::rect(5.0, 5.0, 15.0, 15.0)]),
			CombineMode::And,
		)
		.unwrap();
		assert_eq!(result, vec![1, 2]);
	}

	#[test]
	fn test_regions_follow_combine_mode() {
		let regions = [Region::rect(0.0, 0.0, 2.0, 2.0), Region::rect(4.0, 4.0, 2.0, 2.0)];

		let union = run(FilterDescriptor::path(Basis::new("umap"), regions.clone()), CombineMode::Or).unwrap();
		assert_eq!(union, vec![0, 1]);

		let intersection = run(FilterDescriptor::path(Basis::new("umap"), regions), CombineMode::And).unwrap();
		assert!(intersection.is_empty());
	}

	#[test]
	fn test_empty_path() {
		let result = run(FilterDescriptor::path(Basis::new("umap"), []), CombineMode::Or).unwrap();
		assert!(result.is_empty());
	}

	#[test]
	fn test_cuboid() {
		let result = run(
			FilterDescriptor::path(
				Basis::new("pca").with_dimensions(3),
				[Region::cuboid(0.0, 0.0, 0.0, 3.0, 3.0, 5.0)],
			),
			CombineMode::And,
		)
		.unwrap();
		assert_eq!(result, vec![0, 2]);
	}

	#[test]
	fn test_flat_region_on_three_dimensional_basis() {
		let result = run(
			FilterDescriptor::path(Basis::new("pca").with_dimensions(3), [Region::rect(0.0, 0.0, 3.0, 3.0)]),
			CombineMode::And,
		)
		.unwrap();
		assert_eq!(result, vec![0, 1, 2, 3]);
	}

	#[test]
	fn test_z_without_depth() {
		let mut region = Region::rect(0.0, 0.0, 3.0, 3.0);
		region.z = Some(2.0);
		let result =
			run(FilterDescriptor::path(Basis::new("pca").with_dimensions(3), [region]), CombineMode::And).unwrap();
		assert_eq!(result, vec![2]);
	}

	#[test]
	fn test_z_on_two_dimensional_basis() {
		let err = run(
			FilterDescriptor::path(Basis::new("umap"), [Region::cuboid(0.0, 0.0, 0.0, 1.0, 1.0, 1.0)]),
			CombineMode::And,
		)
		.unwrap_err();
		assert_eq!(err.code(), "FILTER_003");
	}

	#[test]
	fn test_points() {
		let result = run(FilterDescriptor::points(Basis::new("umap"), [3, 0, 3]), CombineMode::And).unwrap();
		assert_eq!(result, vec![0, 3]);
	}

	#[test]
	fn test_point_out_of_range() {
		let err = run(FilterDescriptor::points(Basis::new("umap"), [4]), CombineMode::And).unwrap_err();
		assert!(matches!(
			err,
			Error::PointOutOfRange {
				index: 4,
				row_count: 4
			}
		));
	}

	#[test]
	fn test_binned_points_not_implemented() {
		let err = run(FilterDescriptor::points(Basis::new("umap").with_bins(10, None), [0]), CombineMode::And)
			.unwrap_err();
		assert_eq!(err.code(), "FILTER_002");
	}

	#[test]
	fn test_binned_path_reads_computed_columns() {
		let result = run(
			FilterDescriptor::path(Basis::new("umap").with_bins(10, None), [Region::rect(1.0, 1.0, 1.0, 1.0)]),
			CombineMode::And,
		)
		.unwrap();
		assert_eq!(result, vec![1, 2]);
	}

	#[test]
	fn test_missing_coordinate_column() {
		let err = run(
			FilterDescriptor::path(Basis::new("tsne"), [Region::rect(0.0, 0.0, 1.0, 1.0)]),
			CombineMode::And,
		)
		.unwrap_err();
		assert!(matches!(err, Error::ColumnNotFound { name } if name == "tsne_1"));
	}

	#[test]
	fn test_plan_outlives_config() {
		let dataset = dataset();
		let plan = {
			let config = FilterConfig::default();
			let selection = selection(FilterDescriptor::path(Basis::new("umap"), [Region::rect(0.0, 0.0, 10.0, 10.0)]));
			SpatialMatcher::new(&dataset, &config).plan(&selection).unwrap()
		};
		assert_eq!(plan.evaluate(CombineMode::And).to_vec(), vec![0, 1]);
	}

	#[test]
	fn test_basis_name() {
		let dataset = dataset();
		let config = FilterConfig::default();
		let matcher = SpatialMatcher::new(&dataset, &config);

		assert_eq!(matcher.basis_name(&Basis::new("umap")), "umap");
		assert_eq!(matcher.basis_name(&Basis::new("umap").with_bins(100, Some("max"))), "umap_100_max_2");
	}
}
