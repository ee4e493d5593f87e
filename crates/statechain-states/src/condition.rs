use serde::ser::{Serialize, SerializeMap, Serializer};

/// Comparison applied to a variable of the state input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
  StringEquals,
  StringLessThan,
  StringGreaterThan,
  StringLessThanEquals,
  StringGreaterThanEquals,
  NumericEquals,
  NumericLessThan,
  NumericGreaterThan,
  NumericLessThanEquals,
  NumericGreaterThanEquals,
  BooleanEquals,
  TimestampEquals,
  TimestampLessThan,
  TimestampGreaterThan,
  TimestampLessThanEquals,
  TimestampGreaterThanEquals,
}

impl ComparisonOperator {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::StringEquals => "StringEquals",
      Self::StringLessThan => "StringLessThan",
      Self::StringGreaterThan => "StringGreaterThan",
      Self::StringLessThanEquals => "StringLessThanEquals",
      Self::StringGreaterThanEquals => "StringGreaterThanEquals",
      Self::NumericEquals => "NumericEquals",
      Self::NumericLessThan => "NumericLessThan",
      Self::NumericGreaterThan => "NumericGreaterThan",
      Self::NumericLessThanEquals => "NumericLessThanEquals",
      Self::NumericGreaterThanEquals => "NumericGreaterThanEquals",
      Self::BooleanEquals => "BooleanEquals",
      Self::TimestampEquals => "TimestampEquals",
      Self::TimestampLessThan => "TimestampLessThan",
      Self::TimestampGreaterThan => "TimestampGreaterThan",
      Self::TimestampLessThanEquals => "TimestampLessThanEquals",
      Self::TimestampGreaterThanEquals => "TimestampGreaterThanEquals",
    }
  }
}

/// A rule condition of a [`crate::Choice`] state.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
  Compare {
    variable: String,
    operator: ComparisonOperator,
    value: serde_json::Value,
  },
  And(Vec<Condition>),
  Or(Vec<Condition>),
  Not(Box<Condition>),
}

impl Condition {
  pub fn compare(
    variable: impl Into<String>,
    operator: ComparisonOperator,
    value: impl Into<serde_json::Value>,
  ) -> Self {
    Self::Compare {
      variable: variable.into(),
      operator,
      value: value.into(),
    }
  }

  pub fn string_equals(variable: impl Into<String>, value: impl Into<String>) -> Self {
    Self::compare(variable, ComparisonOperator::StringEquals, text(value))
  }

  pub fn string_less_than(variable: impl Into<String>, value: impl Into<String>) -> Self {
    Self::compare(variable, ComparisonOperator::StringLessThan, text(value))
  }

  pub fn string_greater_than(variable: impl Into<String>, value: impl Into<String>) -> Self {
    Self::compare(variable, ComparisonOperator::StringGreaterThan, text(value))
  }

  pub fn numeric_equals(variable: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
    Self::compare(variable, ComparisonOperator::NumericEquals, value)
  }

  pub fn numeric_less_than(variable: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
    Self::compare(variable, ComparisonOperator::NumericLessThan, value)
  }

  pub fn numeric_greater_than(
    variable: impl Into<String>,
    value: impl Into<serde_json::Value>,
  ) -> Self {
    Self::compare(variable, ComparisonOperator::NumericGreaterThan, value)
  }

  pub fn boolean_equals(variable: impl Into<String>, value: bool) -> Self {
    Self::compare(variable, ComparisonOperator::BooleanEquals, value)
  }

  pub fn timestamp_equals(variable: impl Into<String>, value: impl Into<String>) -> Self {
    Self::compare(variable, ComparisonOperator::TimestampEquals, text(value))
  }

  pub fn timestamp_less_than(variable: impl Into<String>, value: impl Into<String>) -> Self {
    Self::compare(variable, ComparisonOperator::TimestampLessThan, text(value))
  }

  pub fn timestamp_greater_than(variable: impl Into<String>, value: impl Into<String>) -> Self {
    Self::compare(variable, ComparisonOperator::TimestampGreaterThan, text(value))
  }

  pub fn and(conditions: Vec<Condition>) -> Self {
    Self::And(conditions)
  }

  pub fn or(conditions: Vec<Condition>) -> Self {
    Self::Or(conditions)
  }

  pub fn not(condition: Condition) -> Self {
    Self::Not(Box::new(condition))
  }
}

fn text(value: impl Into<String>) -> serde_json::Value {
  serde_json::Value::String(value.into())
}

impl Serialize for Condition {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Compare {
        variable,
        operator,
        value,
      } => {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("Variable", variable)?;
        map.serialize_entry(operator.as_str(), value)?;
        map.end()
      }
      Self::And(conditions) => {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("And", conditions)?;
        map.end()
      }
      Self::Or(conditions) => {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("Or", conditions)?;
        map.end()
      }
      Self::Not(condition) => {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("Not", condition)?;
        map.end()
      }
    }
  }
}
