// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use streamdb_core::Schema;

use crate::ColumnSource;

/// One contributing schema of a composite output.
///
/// Non-owning: the referenced schema and column source list are owned by
/// the planner and must outlive this record.
#[derive(Debug, Clone)]
pub struct SchemaSource<'a> {
	pub table_name: String,
	pub schema: &'a Schema,
	pub sources: Option<&'a [ColumnSource]>,
}

impl<'a> SchemaSource<'a> {
	pub fn anonymous(schema: &'a Schema) -> Self {
		Self {
			table_name: String::new(),
			schema,
			sources: None,
		}
	}

	pub fn new(table_name: impl Into<String>, schema: &'a Schema) -> Self {
		Self {
			table_name: table_name.into(),
			schema,
			sources: None,
		}
	}

	pub fn with_sources(table_name: impl Into<String>, schema: &'a Schema, sources: &'a [ColumnSource]) -> Self {
		Self {
			table_name: table_name.into(),
			schema,
			sources: Some(sources),
		}
	}
}

/// Ordered, append-only list of schema sources.
///
/// Insertion order is schema precedence order: slice `i` of the composite
/// output is the `i`-th appended source.
#[derive(Debug, Clone, Default)]
pub struct SchemaSourceList<'a> {
	sources: Vec<SchemaSource<'a>>,
}

impl<'a> SchemaSourceList<'a> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn append(&mut self, source: SchemaSource<'a>) {
		self.sources.push(source);
	}

	pub fn append_schema(&mut self, schema: &'a Schema) {
		self.sources.push(SchemaSource::anonymous(schema));
	}

	pub fn append_named(&mut self, table_name: impl Into<String>, schema: &'a Schema) {
		self.sources.push(SchemaSource::new(table_name, schema));
	}

	pub fn extend(&mut self, other: SchemaSourceList<'a>) {
		self.sources.extend(other.sources);
	}

	pub fn get(&self, idx: usize) -> Option<&SchemaSource<'a>> {
		self.sources.get(idx)
	}

	/// Schema of slice `idx`, or `None` when out of range.
	pub fn schema(&self, idx: usize) -> Option<&'a Schema> {
		self.sources.get(idx).map(|source| source.schema)
	}

	pub fn len(&self) -> usize {
		self.sources.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sources.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &SchemaSource<'a>> {
		self.sources.iter()
	}
}
