use serde::{Deserialize, Serialize};

/// Top-level settings of a rendered state machine definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionProps {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comment: Option<String>,

  /// Maximum run time of an execution.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timeout_seconds: Option<u64>,

  /// Version of the state language, e.g. "1.0".
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
}

impl DefinitionProps {
  pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
    self.comment = Some(comment.into());
    self
  }

  pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
    self.timeout_seconds = Some(seconds);
    self
  }

  pub fn with_version(mut self, version: impl Into<String>) -> Self {
    self.version = Some(version.into());
    self
  }
}
