use serde::{Deserialize, Serialize};

/// A retry policy attached to a state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryProps {
  /// Error names this policy applies to. Empty means every error.
  pub errors: Vec<String>,

  /// Seconds before the first retry attempt.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub interval_seconds: Option<u32>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_attempts: Option<u32>,

  /// Multiplier applied to the interval after each attempt.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub backoff_rate: Option<f64>,
}

impl RetryProps {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_errors<I, S>(mut self, errors: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.errors = errors.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_interval_seconds(mut self, seconds: u32) -> Self {
    self.interval_seconds = Some(seconds);
    self
  }

  pub fn with_max_attempts(mut self, attempts: u32) -> Self {
    self.max_attempts = Some(attempts);
    self
  }

  pub fn with_backoff_rate(mut self, rate: f64) -> Self {
    self.backoff_rate = Some(rate);
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_retry_builder() {
    let retry = RetryProps::new()
      .with_errors(["States.Timeout"])
      .with_interval_seconds(5)
      .with_max_attempts(3)
      .with_backoff_rate(2.0);

    assert_eq!(retry.errors, vec!["States.Timeout"]);
    assert_eq!(retry.interval_seconds, Some(5));
    assert_eq!(retry.max_attempts, Some(3));
    assert_eq!(retry.backoff_rate, Some(2.0));
  }

  #[test]
  fn test_serialize_skips_unset_fields() {
    let value = serde_json::to_value(RetryProps::new().with_max_attempts(2)).unwrap();
    assert_eq!(value, serde_json::json!({ "errors": [], "max_attempts": 2 }));
  }
}
