// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

use roaring::RoaringBitmap;
use serde::{Serialize, Serializer};

/// A set of row indices. Iteration is always in ascending order.
#[derive(Clone, Default, PartialEq)]
pub struct IndexSet {
	bitmap: RoaringBitmap,
}

impl IndexSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, index: u32) -> bool {
		self.bitmap.insert(index)
	}

	pub fn len(&self) -> usize {
		self.bitmap.len() as usize
	}

	pub fn is_empty(&self) -> bool {
		self.bitmap.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
		self.bitmap.iter()
	}

	/// Ascending row indices.
	pub fn to_vec(&self) -> Vec<u32> {
		self.bitmap.iter().collect()
	}

	pub fn intersection(&self, other: &IndexSet) -> IndexSet {
		Self {
			bitmap: &self.bitmap & &other.bitmap,
		}
	}

	pub fn union(&self, other: &IndexSet) -> IndexSet {
		Self {
			bitmap: &self.bitmap | &other.bitmap,
		}
	}
}

impl Debug for IndexSet {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.bitmap.iter()).finish()
	}
}

impl FromIterator<u32> for IndexSet {
	fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
		Self {
			bitmap: iter.into_iter().collect(),
		}
	}
}

impl Extend<u32> for IndexSet {
	fn extend<T: IntoIterator<Item = u32>>(&mut self, iter: T) {
		self.bitmap.extend(iter)
	}
}

impl Serialize for IndexSet {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(self.bitmap.iter())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_iterates_ascending() {
		let set: IndexSet = vec![9, 1, 4, 1].into_iter().collect();
		assert_eq!(set.to_vec(), vec![1, 4, 9]);
		assert_eq!(set.len(), 3);
	}

	#[test]
	fn test_set_operations_do_not_mutate() {
		let a: IndexSet = vec![1, 2, 3].into_iter().collect();
		let b: IndexSet = vec![2, 3, 4].into_iter().collect();

		assert_eq!(a.intersection(&b).to_vec(), vec![2, 3]);
		assert_eq!(a.union(&b).to_vec(), vec![1, 2, 3, 4]);
		assert_eq!(a.to_vec(), vec![1, 2, 3]);
		assert_eq!(b.to_vec(), vec![2, 3, 4]);
	}

	#[test]
	fn test_serialize_as_list() {
		let set: IndexSet = vec![3, 0].into_iter().collect();
		assert_eq!(serde_json::to_string(&set).unwrap(), "[0,3]");
	}
}
