// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::Value;

/// A single materialized row: an ordered sequence of scalar values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row(Vec<Value>);

impl Row {
	pub fn new(values: Vec<Value>) -> Self {
		Self(values)
	}

	/// Value at `idx`, or `None` when out of range.
	pub fn get(&self, idx: usize) -> Option<&Value> {
		self.0.get(idx)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn values(&self) -> &[Value] {
		&self.0
	}
}

impl From<Vec<Value>> for Row {
	fn from(values: Vec<Value>) -> Self {
		Self(values)
	}
}

/// Lazy, finite sequence of rows. Every call site that needs to traverse a
/// handler obtains its own iterator; iterators never share cursor state.
pub trait RowIterator: Iterator<Item = Row> + Send {}
impl<T> RowIterator for T where T: Iterator<Item = Row> + Send {}

pub type BoxedRowIterator = Box<dyn RowIterator>;

/// One partition group: the composite key and its ordered rows.
pub struct Window {
	pub key: String,
	pub rows: BoxedRowIterator,
}

/// Lazy sequence of per-key windows, one per distinct partition key.
pub trait WindowIterator: Iterator<Item = Window> + Send {}
impl<T> WindowIterator for T where T: Iterator<Item = Window> + Send {}

pub type BoxedWindowIterator = Box<dyn WindowIterator>;
