// Copyright (c) streamdb.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use crate::Value;

/// A constant expression node produced by the planner and embedded into
/// column provenance. This layer stores and renders it, never evaluates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantExpression {
	value: Value,
}

impl ConstantExpression {
	/// Takes the planner-owned value by move; the node becomes the sole
	/// owner of the literal.
	pub fn new(value: Value) -> Self {
		Self {
			value,
		}
	}

	pub fn value(&self) -> &Value {
		&self.value
	}
}

impl Display for ConstantExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.value {
			Value::Utf8(text) => write!(f, "\"{text}\""),
			value => Display::fmt(value, f),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::ConstantExpression;
	use crate::Value;

	#[test]
	fn test_number() {
		let literal = ConstantExpression::new(Value::Int8(42));
		assert_eq!(literal.to_string(), "42");
	}

	#[test]
	fn test_text_is_quoted() {
		let literal = ConstantExpression::new(Value::Utf8("abc".to_string()));
		assert_eq!(literal.to_string(), "\"abc\"");
	}

	#[test]
	fn test_undefined() {
		let literal = ConstantExpression::new(Value::Undefined);
		assert_eq!(literal.to_string(), "undefined");
	}
}
