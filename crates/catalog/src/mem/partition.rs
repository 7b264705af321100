// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{collections::BTreeMap, sync::Arc};

use streamdb_core::{BoxedRowIterator, BoxedWindowIterator, Row, Schema};

use crate::{
	HandlerKind, IndexDef, IndexHint, OrderType, Types,
	handler::{DataHandler, PartitionHandler, TableHandler},
	mem::MemTable,
};

/// View of a [`MemTable`] grouped by one index's key.
pub struct MemPartitionHandler {
	table: Arc<MemTable>,
	index: IndexDef,
}

impl MemPartitionHandler {
	pub(super) fn new(table: Arc<MemTable>, index: IndexDef) -> Self {
		Self {
			table,
			index,
		}
	}

	fn groups(&self) -> BTreeMap<String, Vec<Row>> {
		self.table.group_by(&self.index)
	}

	/// Concrete form of [`PartitionHandler::segment`], for callers holding
	/// the handler by value rather than behind `Arc<dyn …>`.
	pub fn segment_of(&self, key: &str) -> Option<MemSegment> {
		let rows = self.groups().remove(key)?;
		Some(MemSegment {
			table: self.table.clone(),
			key: key.to_string(),
			rows,
		})
	}
}

impl DataHandler for MemPartitionHandler {
	fn schema(&self) -> &Schema {
		&self.table.schema
	}

	fn name(&self) -> &str {
		&self.table.name
	}

	fn database(&self) -> &str {
		&self.table.database
	}

	fn kind(&self) -> HandlerKind {
		HandlerKind::Partition
	}

	// Row-level access routes through the grouped representation: groups
	// in key order, rows within a group in timestamp order.
	fn iter(&self) -> BoxedRowIterator {
		Box::new(self.groups().into_values().flatten())
	}

	fn count(&self) -> u64 {
		self.table.rows.len() as u64
	}

	fn at(&self, pos: u64) -> Option<Row> {
		self.groups().into_values().flatten().nth(pos as usize)
	}
}

impl TableHandler for MemPartitionHandler {
	fn column_types(&self) -> &Types {
		&self.table.types
	}

	fn indexes(&self) -> &IndexHint {
		&self.table.indexes
	}

	// Already index-scoped; re-windowing by name is not supported here.
	fn window_iter(&self, _index_name: &str) -> Option<BoxedWindowIterator> {
		None
	}

	// No order claim across groups; per-group order is exposed through
	// `windows`.
	fn order_type(&self) -> OrderType {
		OrderType::None
	}
}

impl PartitionHandler for MemPartitionHandler {
	fn windows(&self) -> BoxedWindowIterator {
		self.table.windows_of(&self.index)
	}

	fn segment(&self, key: &str) -> Option<Arc<dyn TableHandler>> {
		self.segment_of(key).map(|segment| Arc::new(segment) as Arc<dyn TableHandler>)
	}
}

/// Rows of a single partition key, ascending by the index's timestamp
/// column.
pub struct MemSegment {
	table: Arc<MemTable>,
	key: String,
	rows: Vec<Row>,
}

impl MemSegment {
	pub fn key(&self) -> &str {
		&self.key
	}
}

impl DataHandler for MemSegment {
	fn schema(&self) -> &Schema {
		&self.table.schema
	}

	fn name(&self) -> &str {
		&self.table.name
	}

	fn database(&self) -> &str {
		&self.table.database
	}

	fn kind(&self) -> HandlerKind {
		HandlerKind::Table
	}

	fn iter(&self) -> BoxedRowIterator {
		Box::new(self.rows.clone().into_iter())
	}

	fn count(&self) -> u64 {
		self.rows.len() as u64
	}

	fn at(&self, pos: u64) -> Option<Row> {
		self.rows.get(pos as usize).cloned()
	}
}

impl TableHandler for MemSegment {
	fn column_types(&self) -> &Types {
		&self.table.types
	}

	fn indexes(&self) -> &IndexHint {
		&self.table.indexes
	}

	fn window_iter(&self, _index_name: &str) -> Option<BoxedWindowIterator> {
		None
	}

	fn order_type(&self) -> OrderType {
		OrderType::Ascending
	}
}
