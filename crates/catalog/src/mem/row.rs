// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use streamdb_core::{BoxedRowIterator, Row, Schema};

use crate::{
	HandlerKind,
	handler::{DataHandler, RowHandler},
};

/// Exactly one materialized row, e.g. the result of a scalar aggregation.
/// Anonymous: it carries no table or database name.
pub struct MemRowHandler {
	schema: Schema,
	row: Row,
}

impl MemRowHandler {
	pub fn new(schema: Schema, row: Row) -> Self {
		Self {
			schema,
			row,
		}
	}
}

impl DataHandler for MemRowHandler {
	fn schema(&self) -> &Schema {
		&self.schema
	}

	fn kind(&self) -> HandlerKind {
		HandlerKind::Row
	}

	// The sequence view is inert; consumers read through `value`.
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

impl RowHandler for MemRowHandler {
	fn value(&self) -> &Row {
		&self.row
	}
}

#[cfg(test)]
mod tests {
	use streamdb_core::{Row, Value};

	use super::MemRowHandler;
	use crate::{DataHandler, HandlerKind, RowHandler, test_utils::test_schema};

	fn create_handler() -> MemRowHandler {
		MemRowHandler::new(test_schema(), Row::new(vec![Value::Int4(1), Value::Timestamp(9), Value::Float8(0.5)]))
	}

	#[test]
	fn test_value() {
		let handler = create_handler();
		assert_eq!(handler.value().get(1), Some(&Value::Timestamp(9)));
	}

	#[test]
	fn test_kind() {
		let handler = create_handler();
		assert_eq!(handler.kind(), HandlerKind::Row);
		assert_eq!(handler.kind().name(), "RowHandler");
	}

	#[test]
	fn test_sequence_view_is_inert() {
		let handler = create_handler();

		assert_eq!(handler.count(), 0);
		assert!(handler.at(0).is_none());
		assert_eq!(handler.iter().count(), 0);
		assert_eq!(handler.name(), "");
		assert_eq!(handler.database(), "");
	}
}
