// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::{Format, TracingError};

/// Configures and installs the global tracing subscriber.
///
/// Log lines go to stderr, leaving stdout to command output. The level is
/// the default directive; `RUST_LOG` or an explicit directive overrides it.
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	level: LevelFilter,
	directive: Option<String>,
	format: Format,
	ansi: bool,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self {
			level: LevelFilter::WARN,
			directive: None,
			format: Format::default(),
			ansi: true,
		}
	}
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_level(mut self, level: LevelFilter) -> Self {
		self.level = level;
		self
	}

	/// An `EnvFilter` directive such as `sieve_filter=trace,warn`.
	pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
		self.directive = Some(directive.into());
		self
	}

	pub fn with_format(mut self, format: Format) -> Self {
		self.format = format;
		self
	}

	pub fn with_ansi(mut self, ansi: bool) -> Self {
		self.ansi = ansi;
		self
	}

	pub fn env_filter(&self) -> Result<EnvFilter, TracingError> {
		if let Some(directive) = &self.directive {
			return Ok(EnvFilter::try_new(directive)?);
		}

		Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::default().add_directive(self.level.into())))
	}

	pub fn init(self) -> Result<(), TracingError> {
		let builder = tracing_subscriber::fmt()
			.with_env_filter(self.env_filter()?)
			.with_ansi(self.ansi)
			.with_writer(std::io::stderr);

		match self.format {
			Format::Pretty => builder.pretty().try_init(),
			Format::Compact => builder.compact().try_init(),
			Format::Json => builder.json().try_init(),
		}
		.map_err(|err| TracingError::Init(err.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_directive_overrides_level() {
		let filter = TracingBuilder::new()
			.with_level(LevelFilter::ERROR)
			.with_directive("sieve_filter=trace")
			.env_filter()
			.unwrap();
		assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
	}

	#[test]
	fn test_level_is_default_directive() {
		let builder = TracingBuilder::new().with_level(LevelFilter::DEBUG);
		assert_eq!(builder.level, LevelFilter::DEBUG);
		assert_eq!(builder.format, Format::Compact);
	}
}
