// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{
	collections::HashMap,
	fmt::{Display, Formatter},
	sync::Arc,
};

use serde::{Deserialize, Serialize};
use streamdb_core::{BoxedRowIterator, BoxedWindowIterator, Row, Schema};

use crate::ColumnInfo;

/// Runtime tag of a concrete handler family, for consumers that branch on
/// kind before reaching for family-specific operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerKind {
	Row,
	Table,
	Partition,
}

impl HandlerKind {
	pub fn name(&self) -> &'static str {
		match self {
			HandlerKind::Row => "RowHandler",
			HandlerKind::Table => "TableHandler",
			HandlerKind::Partition => "PartitionHandler",
		}
	}
}

impl Display for HandlerKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Known sort order of a row sequence on its timestamp column. `None`
/// means no ordering guarantee; operators insert a sort stage themselves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
	Ascending,
	Descending,
	None,
}

/// One secondary index: the key columns and the column providing event
/// time ordering within each key group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDef {
	pub name: String,
	pub pos: u32,
	pub ts_pos: u32,
	pub keys: Vec<ColumnInfo>,
}

/// Column metadata by column name.
pub type Types = HashMap<String, ColumnInfo>;

/// Index metadata by index name.
pub type IndexHint = HashMap<String, IndexDef>;

/// Uniform read-only view over tabular data, regardless of the backing
/// store.
///
/// Handlers are shared as `Arc<dyn …>` across every plan branch consuming
/// them during one query. No method mutates handler metadata, so concurrent
/// readers need no synchronization; each call to [`DataHandler::iter`]
/// yields an independent cursor.
pub trait DataHandler: Send + Sync {
	/// Column layout of the rows this handler yields.
	fn schema(&self) -> &Schema;

	/// Table name; empty for anonymous intermediate results.
	fn name(&self) -> &str {
		""
	}

	/// Database name; empty for anonymous intermediate results.
	fn database(&self) -> &str {
		""
	}

	/// Runtime tag matching the concrete handler family.
	fn kind(&self) -> HandlerKind;

	/// Fresh iterator over all rows, independent of any previously
	/// obtained iterator.
	fn iter(&self) -> BoxedRowIterator;

	/// Number of rows. May require a full scan on some backends; callers
	/// must not assume O(1).
	fn count(&self) -> u64;

	/// Row at `pos`, or `None` when out of range. Out-of-range access is
	/// a valid empty result, not a fault.
	fn at(&self, pos: u64) -> Option<Row>;
}

/// Exactly one materialized row, e.g. a scalar aggregation result.
///
/// Consumers read through [`RowHandler::value`]; the sequence view
/// inherited from [`DataHandler`] is inert here (`iter` empty, `count` 0,
/// `at` `None`).
pub trait RowHandler: DataHandler {
	fn value(&self) -> &Row;
}

/// A queryable table with optional secondary indexes and an optional
/// order guarantee.
pub trait TableHandler: DataHandler {
	/// Column metadata by name.
	fn column_types(&self) -> &Types;

	/// Index metadata by name.
	fn indexes(&self) -> &IndexHint;

	/// Per-key windows of the named index: one (key, ordered rows) pair
	/// per distinct key. `None` when the index is unknown or the backend
	/// has no indexed window access.
	fn window_iter(&self, index_name: &str) -> Option<BoxedWindowIterator>;

	/// Re-view of this table grouped by the named index's key. `None`
	/// means partitioning by this index is unsupported; callers fall back
	/// to a full scan.
	fn partition(&self, _index_name: &str) -> Option<Arc<dyn PartitionHandler>> {
		None
	}

	/// Sort order of the row sequence, when the backend maintains one.
	/// Operators skip redundant sort stages on `Ascending`/`Descending`.
	fn order_type(&self) -> OrderType {
		OrderType::None
	}
}

/// A table already grouped by a partition key.
///
/// Usable anywhere a [`TableHandler`] is expected. A partition handler
/// claims no order across groups ([`TableHandler::order_type`] stays
/// `None` at this level); order, if any, is a per-group property exposed
/// through [`PartitionHandler::windows`].
pub trait PartitionHandler: TableHandler {
	/// Per-key windows of this partition. No index name: the handler is
	/// already index-scoped by construction.
	fn windows(&self) -> BoxedWindowIterator;

	/// Sub-table of one partition key. `None` means direct segment lookup
	/// is unsupported; iterate [`PartitionHandler::windows`] instead.
	fn segment(&self, _key: &str) -> Option<Arc<dyn TableHandler>> {
		None
	}
}

#[cfg(test)]
mod tests {

	mod kind {
		use crate::HandlerKind;

		#[test]
		fn test_names() {
			assert_eq!(HandlerKind::Row.name(), "RowHandler");
			assert_eq!(HandlerKind::Table.name(), "TableHandler");
			assert_eq!(HandlerKind::Partition.name(), "PartitionHandler");
		}

		#[test]
		fn test_display() {
			assert_eq!(HandlerKind::Partition.to_string(), "PartitionHandler");
		}
	}

	mod defaults {
		use streamdb_core::{BoxedRowIterator, BoxedWindowIterator, Row, Schema};

		use crate::{DataHandler, HandlerKind, IndexHint, OrderType, TableHandler, Types};

		// Backend implementing only the mandatory surface; everything
		// optional stays at the trait defaults.
		struct BareTable {
			schema: Schema,
			types: Types,
			indexes: IndexHint,
		}

		impl BareTable {
			fn new() -> Self {
				Self {
					schema: Schema::new(),
					types: Types::new(),
					indexes: IndexHint::new(),
				}
			}
		}

		impl DataHandler for BareTable {
			fn schema(&self) -> &Schema {
				&self.schema
			}

			fn kind(&self) -> HandlerKind {
				HandlerKind::Table
			}

			fn iter(&self) -> BoxedRowIterator {
				Box::new(std::iter::empty::<Row>())
			}

			fn count(&self) -> u64 {
				0
			}

			fn at(&self, _pos: u64) -> Option<Row> {
				None
			}
		}

		impl TableHandler for BareTable {
			fn column_types(&self) -> &Types {
				&self.types
			}

			fn indexes(&self) -> &IndexHint {
				&self.indexes
			}

			fn window_iter(&self, _index_name: &str) -> Option<BoxedWindowIterator> {
				None
			}
		}

		#[test]
		fn test_unsupported_is_none() {
			let table = BareTable::new();

			assert_eq!(table.count(), 0);
			assert!(table.at(0).is_none());
			assert!(table.partition("idx").is_none());
			assert!(table.window_iter("idx").is_none());
			assert_eq!(table.order_type(), OrderType::None);
			assert_eq!(table.name(), "");
			assert_eq!(table.database(), "");
		}
	}
}
