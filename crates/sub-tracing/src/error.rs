// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
	#[error("invalid filter directive: {0}")]
	InvalidDirective(#[from] tracing_subscriber::filter::ParseError),

	#[error("unknown log format '{0}', expected pretty, compact or json")]
	UnknownFormat(String),

	#[error("failed to install subscriber: {0}")]
	Init(String),
}
