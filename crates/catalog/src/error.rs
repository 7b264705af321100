// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use streamdb_core::Type;
use thiserror::Error;

/// Faults raised while assembling catalog metadata.
///
/// Lookups that can legitimately miss never produce an `Error`; they return
/// `None` and the caller falls back to its generic path.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
	#[error("database `{0}` does not exist")]
	DatabaseNotFound(String),

	#[error("database `{0}` is already registered")]
	DatabaseAlreadyExists(String),

	#[error("table `{database}.{table}` is already registered")]
	TableAlreadyExists {
		database: String,
		table: String,
	},

	#[error("index `{0}` is already defined")]
	IndexAlreadyExists(String),

	#[error("column `{column}` does not exist in table `{table}`")]
	ColumnNotFound {
		table: String,
		column: String,
	},

	#[error("column `{column}` of table `{table}` has type {actual}, expected {expected}")]
	ColumnTypeMismatch {
		table: String,
		column: String,
		expected: Type,
		actual: Type,
	},
}
