// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unsupported operator '{operator}'")]
	UnsupportedOperator {
		operator: String,
	},

	#[error("{feature} is not implemented")]
	NotImplemented {
		feature: String,
	},

	#[error("invalid filter descriptor: {message}")]
	InvalidDescriptor {
		message: String,
	},

	#[error("column '{name}' not found")]
	ColumnNotFound {
		name: String,
	},

	#[error("column '{name}' has {actual} rows, expected {expected}")]
	ColumnLengthMismatch {
		name: String,
		expected: usize,
		actual: usize,
	},

	#[error("column '{column}' references category code {code}, but only {categories} categories exist")]
	InvalidCategoryCode {
		column: String,
		code: u32,
		categories: usize,
	},

	#[error("point {index} is outside the dataset range [0, {row_count})")]
	PointOutOfRange {
		index: u64,
		row_count: usize,
	},

	#[error("dataset has {row_count} rows, more than 32-bit row ids can address")]
	TooManyRows {
		row_count: usize,
	},

	#[error("invalid dataset column '{column}': {message}")]
	InvalidDataset {
		column: String,
		message: String,
	},

	#[error("malformed json: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// Stable diagnostic code, surfaced to callers alongside the message.
	pub fn code(&self) -> &'static str {
		match self {
			Error::UnsupportedOperator {
				..
			} => "FILTER_001",
			Error::NotImplemented {
				..
			} => "FILTER_002",
			Error::InvalidDescriptor {
				..
			} => "FILTER_003",
			Error::ColumnNotFound {
				..
			} => "DATASET_001",
			Error::ColumnLengthMismatch {
				..
			} => "DATASET_002",
			Error::InvalidCategoryCode {
				..
			} => "DATASET_003",
			Error::PointOutOfRange {
				..
			} => "DATASET_004",
			Error::TooManyRows {
				..
			} => "DATASET_005",
			Error::InvalidDataset {
				..
			} => "DATASET_006",
			Error::Json(_) => "WIRE_001",
		}
	}

	pub fn unsupported_operator(operator: impl Into<String>) -> Self {
		Error::UnsupportedOperator {
			operator: operator.into(),
		}
	}

	pub fn not_implemented(feature: impl Into<String>) -> Self {
		Error::NotImplemented {
			feature: feature.into(),
		}
	}

	pub fn invalid_descriptor(message: impl Into<String>) -> Self {
		Error::InvalidDescriptor {
			message: message.into(),
		}
	}

	pub fn column_not_found(name: impl Into<String>) -> Self {
		Error::ColumnNotFound {
			name: name.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_codes_are_distinct() {
		let errors = vec![
			Error::unsupported_operator("~="),
			Error::not_implemented("binned selection"),
			Error::invalid_descriptor("bad"),
			Error::column_not_found("x"),
			Error::ColumnLengthMismatch {
				name: "x".to_string(),
				expected: 1,
				actual: 2,
			},
			Error::InvalidCategoryCode {
				column: "c".to_string(),
				code: 3,
				categories: 2,
			},
			Error::PointOutOfRange {
				index: 10,
				row_count: 3,
			},
			Error::TooManyRows {
				row_count: usize::MAX,
			},
			Error::InvalidDataset {
				column: "c".to_string(),
				message: "nested".to_string(),
			},
		];

		let mut codes: Vec<_> = errors.iter().map(Error::code).collect();
		codes.sort();
		codes.dedup();
		assert_eq!(codes.len(), errors.len());
	}

	#[test]
	fn test_unsupported_operator_message() {
		let err = Error::unsupported_operator("~=");
		assert_eq!(err.to_string(), "unsupported operator '~='");
		assert_eq!(err.code(), "FILTER_001");
	}
}
