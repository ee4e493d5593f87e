use serde::Serialize;
use statechain_config::{CatchProps, RetryProps};
use statechain_core::{ChainError, State, StateChain, StateGraph};

use crate::transition::to_state_value;

/// Ends the execution with a failure.
#[derive(Debug, Clone)]
pub struct Fail {
  id: String,
  comment: Option<String>,
  error: Option<String>,
  cause: Option<String>,
}

impl Fail {
  pub fn new(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      comment: None,
      error: None,
      cause: None,
    }
  }

  pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
    self.comment = Some(comment.into());
    self
  }

  /// Error name reported for the failed execution.
  pub fn with_error(mut self, error: impl Into<String>) -> Self {
    self.error = Some(error.into());
    self
  }

  /// Human-readable cause of the failure.
  pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
    self.cause = Some(cause.into());
    self
  }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RenderedFail<'a> {
  #[serde(rename = "Type")]
  kind: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  comment: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  error: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  cause: Option<&'a str>,
}

impl State for Fail {
  fn state_id(&self) -> &str {
    &self.id
  }

  fn has_open_next(&self) -> bool {
    false
  }

  fn can_have_catch(&self) -> bool {
    false
  }

  fn add_next(&mut self, _next: &StateChain) -> Result<(), ChainError> {
    Err(ChainError::transition_conflict(
      &self.id,
      "Fail states are terminal and cannot have a Next",
    ))
  }

  // Never reached: the chain checks can_have_catch first.
  fn add_catch(&mut self, _handler: &StateChain, _props: &CatchProps) {}

  // Terminal states have nothing to retry.
  fn add_retry(&mut self, _retry: &RetryProps) {}

  fn accessible_chains(&self) -> Vec<StateChain> {
    Vec::new()
  }

  fn render_state(&self, _graph: &StateGraph) -> Result<serde_json::Value, ChainError> {
    to_state_value(
      &self.id,
      &RenderedFail {
        kind: "Fail",
        comment: self.comment.as_deref(),
        error: self.error.as_deref(),
        cause: self.cause.as_deref(),
      },
    )
  }
}
