// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod builder;
mod error;
mod format;

pub use builder::TracingBuilder;
pub use error::TracingError;
pub use format::Format;
pub use tracing::level_filters::LevelFilter;
