// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Data-access abstraction layer of the query engine.
//!
//! Physical operators read rows, tables and partitions through the handler
//! traits defined here, uniformly over whatever storage backend produced
//! them. The [`Catalog`] trait resolves (database, table) names to handlers,
//! and the column provenance records ([`ColumnSource`], [`SchemaSourceList`])
//! let planners trace every output column back to a source column or a
//! literal constant.
//!
//! Lookups that can legitimately miss (unknown database, table, index or
//! partition key) return `None`; [`Error`] is reserved for genuine faults
//! such as registering a duplicate table.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use catalog::{Catalog, DatabaseDef};
pub use column::{ColumnInfo, ColumnSource, ColumnSourceList};
pub use error::Error;
pub use handler::{
	DataHandler, HandlerKind, IndexDef, IndexHint, OrderType, PartitionHandler, RowHandler, TableHandler, Types,
};
pub use schema::{SchemaSource, SchemaSourceList};

mod catalog;
mod column;
mod error;
mod handler;
pub mod mem;
mod schema;
pub mod test_utils;

pub type Result<T> = std::result::Result<T, Error>;
