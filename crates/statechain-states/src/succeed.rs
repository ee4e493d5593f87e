use serde::Serialize;
use statechain_config::{CatchProps, RetryProps};
use statechain_core::{ChainError, State, StateChain, StateGraph};

use crate::transition::to_state_value;

/// Ends the execution successfully.
#[derive(Debug, Clone)]
pub struct Succeed {
  id: String,
  comment: Option<String>,
  input_path: Option<String>,
  output_path: Option<String>,
}

impl Succeed {
  pub fn new(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      comment: None,
      input_path: None,
      output_path: None,
    }
  }

  pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
    self.comment = Some(comment.into());
    self
  }

  pub fn with_input_path(mut self, path: impl Into<String>) -> Self {
    self.input_path = Some(path.into());
    self
  }

  pub fn with_output_path(mut self, path: impl Into<String>) -> Self {
    self.output_path = Some(path.into());
    self
  }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RenderedSucceed<'a> {
  #[serde(rename = "Type")]
  kind: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  comment: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  input_path: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  output_path: Option<&'a str>,
}

impl State for Succeed {
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
      "Succeed states are terminal and cannot have a Next",
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
      &RenderedSucceed {
        kind: "Succeed",
        comment: self.comment.as_deref(),
        input_path: self.input_path.as_deref(),
        output_path: self.output_path.as_deref(),
      },
    )
  }
}
