// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sieve_type::{Column, ColumnData, Dataset};

/// Two numeric columns, `x = [1, 10, 3, 20]` and `y = [5, 5, 50, 50]`.
pub fn xy() -> Dataset {
	Dataset::new([
		Column::new("x", ColumnData::int8([1, 10, 3, 20])),
		Column::new("y", ColumnData::int8([5, 5, 50, 50])),
	])
	.expect("fixture is valid")
}

/// Six cells of a single cell experiment: a 2D `umap` and 3D `pca`
/// embedding, a categorical clustering and a mean expression column.
pub fn embedding() -> Dataset {
	Dataset::new([
		Column::new("umap_1", ColumnData::float8([1.0, 5.0, 20.0, 2.0, 8.0, -3.0])),
		Column::new("umap_2", ColumnData::float8([1.0, 5.0, 20.0, 9.0, 2.0, 4.0])),
		Column::new("pca_1", ColumnData::float8([0.0, 0.5, 1.0, 1.5, 2.0, 2.5])),
		Column::new("pca_2", ColumnData::float8([0.0, 0.5, 1.0, 1.5, 2.0, 2.5])),
		Column::new("pca_3", ColumnData::float8([0.0, 4.0, 0.5, 4.5, 1.0, 5.0])),
		Column::new("leiden", ColumnData::categorical([0, 1, 1, 2, 0, 2], ["0", "1", "2"])),
		Column::new("cell_type", ColumnData::utf8(["b cell", "t cell", "t cell", "nk", "b cell", "nk"])),
		Column::new("geneA", ColumnData::float8([0.0, 1.25, 3.5, 0.0, 2.0, f64::NAN])),
	])
	.expect("fixture is valid")
}
