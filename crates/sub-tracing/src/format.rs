// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use crate::TracingError;

/// Output layout of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
	Pretty,
	#[default]
	Compact,
	Json,
}

impl FromStr for Format {
	type Err = TracingError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"pretty" => Ok(Format::Pretty),
			"compact" => Ok(Format::Compact),
			"json" => Ok(Format::Json),
			_ => Err(TracingError::UnknownFormat(s.to_string())),
		}
	}
}

impl Display for Format {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Format::Pretty => f.write_str("pretty"),
			Format::Compact => f.write_str("compact"),
			Format::Json => f.write_str("json"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse() {
		assert_eq!("pretty".parse::<Format>().unwrap(), Format::Pretty);
		assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
		assert_eq!(Format::default(), Format::Compact);
	}

	#[test]
	fn test_unknown() {
		let err = "xml".parse::<Format>().unwrap_err();
		assert!(matches!(err, TracingError::UnknownFormat(format) if format == "xml"));
	}
}
