// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use expression::ConstantExpression;
pub use row::{BoxedRowIterator, BoxedWindowIterator, Row, RowIterator, Window, WindowIterator};
pub use schema::{ColumnDef, Schema};
pub use value::{Type, Value};

mod expression;
mod row;
mod schema;
mod value;
