// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! In-memory backend: reference implementations of the handler and catalog
//! contracts, used by tests and embedders that materialize small tables.

pub use catalog::MemCatalog;
pub use partition::{MemPartitionHandler, MemSegment};
pub use row::MemRowHandler;
pub use table::{MemTable, MemTableHandler};

mod catalog;
mod partition;
mod row;
mod table;
