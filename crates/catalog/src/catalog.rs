// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::handler::TableHandler;

/// Descriptor of one registered database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseDef {
	pub name: String,
	pub tables: Vec<String>,
}

/// Name-resolution registry mapping (database, table) names to table
/// handlers.
///
/// Every lookup fails softly: unknown names return `None` and the caller
/// propagates a not-found condition; the catalog never panics on a miss.
pub trait Catalog: Send + Sync {
	/// Whether this catalog's backends support indexed access at all.
	/// Planners branch on this to choose index-based or full-scan plans.
	fn index_support(&self) -> bool;

	/// Descriptor of the named database, or `None` when unknown.
	fn database(&self, name: &str) -> Option<Arc<DatabaseDef>>;

	/// Handler for `database.table_name`, or `None` when unknown. The
	/// single entry point operators use to materialize a table reference
	/// from a fully qualified name.
	fn table(&self, database: &str, table_name: &str) -> Option<Arc<dyn TableHandler>>;
}
