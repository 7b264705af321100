// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{collections::BTreeMap, sync::Arc};

use streamdb_core::{BoxedRowIterator, BoxedWindowIterator, Row, Schema, Type, Value, Window};

use crate::{
	ColumnInfo, Error, HandlerKind, IndexDef, IndexHint, Types,
	handler::{DataHandler, PartitionHandler, TableHandler},
	mem::MemPartitionHandler,
};

/// Mutable in-memory table being assembled. Populate it single-threaded,
/// then freeze it into a [`MemTableHandler`] for shared read access.
pub struct MemTable {
	pub(super) database: String,
	pub(super) name: String,
	pub(super) schema: Schema,
	pub(super) types: Types,
	pub(super) indexes: IndexHint,
	pub(super) rows: Vec<Row>,
}

impl MemTable {
	pub fn new(database: impl Into<String>, name: impl Into<String>, schema: Schema) -> Self {
		let types = schema
			.iter()
			.enumerate()
			.map(|(pos, column)| {
				(column.name.clone(), ColumnInfo::new(&column.name, column.ty, pos as u32))
			})
			.collect();

		Self {
			database: database.into(),
			name: name.into(),
			schema,
			types,
			indexes: IndexHint::new(),
			rows: Vec::new(),
		}
	}

	/// Defines a secondary index, resolving key and timestamp column names
	/// against the schema.
	pub fn register_index(&mut self, name: &str, key_columns: &[&str], ts_column: &str) -> crate::Result<()> {
		if self.indexes.contains_key(name) {
			return Err(Error::IndexAlreadyExists(name.to_string()));
		}

		let keys = key_columns
			.iter()
			.map(|column| {
				self.types.get(*column).cloned().ok_or_else(|| Error::ColumnNotFound {
					table: self.name.clone(),
					column: (*column).to_string(),
				})
			})
			.collect::<crate::Result<Vec<_>>>()?;

		let ts = self.types.get(ts_column).ok_or_else(|| Error::ColumnNotFound {
			table: self.name.clone(),
			column: ts_column.to_string(),
		})?;
		if !matches!(ts.ty, Type::Timestamp | Type::Int8) {
			return Err(Error::ColumnTypeMismatch {
				table: self.name.clone(),
				column: ts_column.to_string(),
				expected: Type::Timestamp,
				actual: ts.ty,
			});
		}

		let pos = self.indexes.len() as u32;
		self.indexes.insert(
			name.to_string(),
			IndexDef {
				name: name.to_string(),
				pos,
				ts_pos: ts.pos,
				keys,
			},
		);
		Ok(())
	}

	pub fn push(&mut self, row: Row) {
		self.rows.push(row);
	}

	/// Rows grouped by the index's composite key, each group ascending by
	/// the index's timestamp column. Group order is key order.
	pub(super) fn group_by(&self, index: &IndexDef) -> BTreeMap<String, Vec<Row>> {
		let mut groups: BTreeMap<String, Vec<Row>> = BTreeMap::new();
		for row in &self.rows {
			groups.entry(partition_key(row, index)).or_default().push(row.clone());
		}
		for rows in groups.values_mut() {
			rows.sort_by_key(|row| ts_of(row, index));
		}
		groups
	}

	pub(super) fn windows_of(&self, index: &IndexDef) -> BoxedWindowIterator {
		let groups = self.group_by(index);
		Box::new(groups.into_iter().map(|(key, rows)| Window {
			key,
			rows: Box::new(rows.into_iter()),
		}))
	}
}

// Composite partition key: key column values joined with `|`.
fn partition_key(row: &Row, index: &IndexDef) -> String {
	index.keys
		.iter()
		.map(|key| row.get(key.pos as usize).map(ToString::to_string).unwrap_or_default())
		.collect::<Vec<_>>()
		.join("|")
}

// Index registration validates the ts column's declared type; a row that
// still carries something else there (e.g. Undefined) sorts at the epoch.
fn ts_of(row: &Row, index: &IndexDef) -> i64 {
	match row.get(index.ts_pos as usize) {
		Some(Value::Timestamp(ts)) => *ts,
		Some(Value::Int8(ts)) => *ts,
		_ => 0,
	}
}

/// Shared read-only handle over a frozen [`MemTable`].
#[derive(Clone)]
pub struct MemTableHandler(Arc<MemTable>);

impl From<MemTable> for MemTableHandler {
	fn from(table: MemTable) -> Self {
		Self(Arc::new(table))
	}
}

// Per-caller cursor over the shared row storage.
struct TableRowIter {
	table: Arc<MemTable>,
	pos: usize,
}

impl Iterator for TableRowIter {
	type Item = Row;

	fn next(&mut self) -> Option<Row> {
		let row = self.table.rows.get(self.pos).cloned();
		if row.is_some() {
			self.pos += 1;
		}
		row
	}
}

impl DataHandler for MemTableHandler {
	fn schema(&self) -> &Schema {
		&self.0.schema
	}

	fn name(&self) -> &str {
		&self.0.name
	}

	fn database(&self) -> &str {
		&self.0.database
	}

	fn kind(&self) -> HandlerKind {
		HandlerKind::Table
	}

	fn iter(&self) -> BoxedRowIterator {
		Box::new(TableRowIter {
			table: self.0.clone(),
			pos: 0,
		})
	}

	fn count(&self) -> u64 {
		self.0.rows.len() as u64
	}

	fn at(&self, pos: u64) -> Option<Row> {
		self.0.rows.get(pos as usize).cloned()
	}
}

impl TableHandler for MemTableHandler {
	fn column_types(&self) -> &Types {
		&self.0.types
	}

	fn indexes(&self) -> &IndexHint {
		&self.0.indexes
	}

	fn window_iter(&self, index_name: &str) -> Option<BoxedWindowIterator> {
		let index = self.0.indexes.get(index_name)?;
		Some(self.0.windows_of(index))
	}

	fn partition(&self, index_name: &str) -> Option<Arc<dyn PartitionHandler>> {
		let index = self.0.indexes.get(index_name)?.clone();
		Some(Arc::new(MemPartitionHandler::new(self.0.clone(), index)))
	}

	// order_type stays at the default: rows keep insertion order, which
	// carries no guarantee.
}
