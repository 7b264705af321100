// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{collections::HashMap, sync::Arc};

use tracing::{debug, warn};

use crate::{
	Error,
	catalog::{Catalog, DatabaseDef},
	handler::TableHandler,
};

/// In-memory catalog. Registration happens single-threaded at setup; once
/// shared, the catalog is read-only and lookups are lock-free.
#[derive(Default)]
pub struct MemCatalog {
	databases: HashMap<String, MemDatabase>,
}

struct MemDatabase {
	def: Arc<DatabaseDef>,
	tables: HashMap<String, Arc<dyn TableHandler>>,
}

impl MemCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register_database(&mut self, name: &str) -> crate::Result<()> {
		if self.databases.contains_key(name) {
			warn!(database = name, "database already registered");
			return Err(Error::DatabaseAlreadyExists(name.to_string()));
		}

		debug!(database = name, "register database");
		self.databases.insert(
			name.to_string(),
			MemDatabase {
				def: Arc::new(DatabaseDef {
					name: name.to_string(),
					tables: Vec::new(),
				}),
				tables: HashMap::new(),
			},
		);
		Ok(())
	}

	/// Registers a handler under its own table name.
	pub fn register_table(&mut self, database: &str, handler: Arc<dyn TableHandler>) -> crate::Result<()> {
		let db = self.databases.get_mut(database).ok_or_else(|| Error::DatabaseNotFound(database.to_string()))?;

		let table = handler.name().to_string();
		if db.tables.contains_key(&table) {
			warn!(database, table = table.as_str(), "table already registered");
			return Err(Error::TableAlreadyExists {
				database: database.to_string(),
				table,
			});
		}

		debug!(database, table = table.as_str(), "register table");
		db.tables.insert(table, handler);

		// descriptors are immutable once handed out; replace wholesale
		let mut tables: Vec<String> = db.tables.keys().cloned().collect();
		tables.sort();
		db.def = Arc::new(DatabaseDef {
			name: database.to_string(),
			tables,
		});
		Ok(())
	}
}

impl Catalog for MemCatalog {
	fn index_support(&self) -> bool {
		true
	}

	fn database(&self, name: &str) -> Option<Arc<DatabaseDef>> {
		self.databases.get(name).map(|db| db.def.clone())
	}

	fn table(&self, database: &str, table_name: &str) -> Option<Arc<dyn TableHandler>> {
		self.databases.get(database)?.tables.get(table_name).cloned()
	}
}

#[cfg(test)]
mod tests {

	mod register {
		use std::sync::Arc;

		use crate::{
			Error,
			mem::MemCatalog,
			test_utils::{create_test_catalog, create_test_table},
		};

		#[test]
		fn test_duplicate_database() {
			let mut catalog = create_test_catalog();

			let result = catalog.register_database("db1");
			assert_eq!(result, Err(Error::DatabaseAlreadyExists("db1".to_string())));
		}

		#[test]
		fn test_duplicate_table() {
			let mut catalog = create_test_catalog();

			let result = catalog.register_table("db1", Arc::new(create_test_table()));
			assert_eq!(
				result,
				Err(Error::TableAlreadyExists {
					database: "db1".to_string(),
					table: "t1".to_string(),
				})
			);
		}

		#[test]
		fn test_unknown_database() {
			let mut catalog = MemCatalog::new();

			let result = catalog.register_table("db9", Arc::new(create_test_table()));
			assert_eq!(result, Err(Error::DatabaseNotFound("db9".to_string())));
		}
	}

	mod lookup {
		use crate::{Catalog, DataHandler, test_utils::create_test_catalog};

		#[test]
		fn test_index_support() {
			assert!(create_test_catalog().index_support());
		}

		#[test]
		fn test_database_ok() {
			let catalog = create_test_catalog();

			let db = catalog.database("db1").unwrap();
			assert_eq!(db.name, "db1");
			assert_eq!(db.tables, vec!["t1".to_string()]);
		}

		#[test]
		fn test_database_not_found() {
			let catalog = create_test_catalog();
			assert!(catalog.database("db9").is_none());
		}

		#[test]
		fn test_table_ok() {
			let catalog = create_test_catalog();

			let table = catalog.table("db1", "t1").unwrap();
			assert_eq!(table.name(), "t1");
			assert_eq!(table.database(), "db1");
		}

		#[test]
		fn test_table_not_found() {
			let catalog = create_test_catalog();

			assert!(catalog.table("db1", "t9").is_none());
			assert!(catalog.table("db9", "t1").is_none());
		}
	}

	mod end_to_end {
		use streamdb_core::{Row, Type, Value};

		use crate::{Catalog, ColumnInfo, TableHandler, test_utils::create_test_catalog};

		fn ts_of(row: &Row) -> i64 {
			match row.get(1) {
				Some(Value::Timestamp(ts)) => *ts,
				other => panic!("expected a timestamp in column 1, got {other:?}"),
			}
		}

		#[test]
		fn test_indexed_window_access() {
			let catalog = create_test_catalog();

			let table = catalog.table("db1", "t1").unwrap();

			let index = &table.indexes()["idx_id"];
			assert_eq!(index.keys, vec![ColumnInfo::new("id", Type::Int4, 0)]);
			assert_eq!(index.ts_pos, 1);

			let windows: Vec<(String, Vec<Row>)> =
				table.window_iter("idx_id").unwrap().map(|w| (w.key, w.rows.collect())).collect();

			// one group per distinct id, rows ascending by ts
			assert_eq!(windows.len(), 2);
			assert_eq!(windows[0].0, "1");
			assert_eq!(windows[1].0, "2");
			for (_, rows) in &windows {
				assert_eq!(rows.len(), 2);
				let ts: Vec<i64> = rows.iter().map(ts_of).collect();
				assert!(ts.windows(2).all(|pair| pair[0] <= pair[1]), "rows out of ts order: {ts:?}");
			}
		}
	}
}
