// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use streamdb_core::{ConstantExpression, Type};

/// Resolved position and type of one column within one schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
	pub ty: Type,
	pub pos: u32,
	pub name: String,
}

impl ColumnInfo {
	pub fn new(name: impl Into<String>, ty: Type, pos: u32) -> Self {
		Self {
			ty,
			pos,
			name: name.into(),
		}
	}
}

/// Provenance of one output column: copied from a column of an input
/// schema, produced by a literal constant, or untracked.
///
/// The `Display` form (`->Column:<schema_idx>:<column_idx>`,
/// `->Value:<literal>`, `->None`) is a stable format consumed by plan
/// printing; do not change it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ColumnSource {
	/// Column at `column_idx` of the `schema_idx`-th input schema.
	Column {
		schema_idx: u32,
		column_idx: u32,
	},
	/// An owned literal node; constructed by move from the planner.
	Const(ConstantExpression),
	#[default]
	None,
}

impl Display for ColumnSource {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ColumnSource::Column {
				schema_idx,
				column_idx,
			} => write!(f, "->Column:{schema_idx}:{column_idx}"),
			ColumnSource::Const(literal) => write!(f, "->Value:{literal}"),
			ColumnSource::None => f.write_str("->None"),
		}
	}
}

/// Provenance of every column of one output schema, in column order.
pub type ColumnSourceList = Vec<ColumnSource>;
