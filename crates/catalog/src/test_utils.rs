// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Helpers assembling the canonical fixtures used across tests.

use std::sync::Arc;

use streamdb_core::{ColumnDef, Row, Schema, Type, Value};

use crate::mem::{MemCatalog, MemTable, MemTableHandler};

pub fn test_schema() -> Schema {
	vec![
		ColumnDef::new("id", Type::Int4),
		ColumnDef::new("ts", Type::Timestamp),
		ColumnDef::new("v", Type::Float8),
	]
}

pub fn test_row(id: i32, ts: i64, v: f64) -> Row {
	Row::new(vec![Value::Int4(id), Value::Timestamp(ts), Value::Float8(v)])
}

/// `t1`: two ids, two rows each, pushed out of timestamp order.
pub fn create_test_table() -> MemTableHandler {
	let mut table = MemTable::new("db1", "t1", test_schema());
	table.register_index("idx_id", &["id"], "ts").unwrap();

	table.push(test_row(1, 3, 1.5));
	table.push(test_row(2, 2, 2.5));
	table.push(test_row(1, 1, 3.5));
	table.push(test_row(2, 4, 4.5));

	MemTableHandler::from(table)
}

/// `db1` holding `t1`.
pub fn create_test_catalog() -> MemCatalog {
	let mut catalog = MemCatalog::new();
	catalog.register_database("db1").unwrap();
	catalog.register_table("db1", Arc::new(create_test_table())).unwrap();
	catalog
}
