// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Core data types shared by the Sieve crates.
//!
//! A [`Dataset`] is a set of equally long, named [`Column`]s. Filters read
//! single cells through [`ValueRef`] and produce [`IndexSet`]s of row indices.

pub mod column;
pub mod dataset;
pub mod error;
mod index_set;
pub mod value;

pub use column::{Column, ColumnData};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use index_set::IndexSet;
pub use value::{Value, ValueRef, ValueSet};
