use serde::Serialize;
use statechain_config::{CatchProps, RetryProps};
use statechain_core::{ChainError, State, StateChain, StateGraph};

use crate::transition::{Transition, Transitions, to_state_value};

/// Passes its input to its output, optionally injecting a fixed result.
#[derive(Debug, Clone)]
pub struct Pass {
  id: String,
  comment: Option<String>,
  result: Option<serde_json::Value>,
  input_path: Option<String>,
  result_path: Option<String>,
  output_path: Option<String>,
  transitions: Transitions,
}

impl Pass {
  pub fn new(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      comment: None,
      result: None,
      input_path: None,
      result_path: None,
      output_path: None,
      transitions: Transitions::default(),
    }
  }

  pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
    self.comment = Some(comment.into());
    self
  }

  /// Fixed value placed at the result path.
  pub fn with_result(mut self, result: serde_json::Value) -> Self {
    self.result = Some(result);
    self
  }

  pub fn with_input_path(mut self, path: impl Into<String>) -> Self {
    self.input_path = Some(path.into());
    self
  }

  pub fn with_result_path(mut self, path: impl Into<String>) -> Self {
    self.result_path = Some(path.into());
    self
  }

  pub fn with_output_path(mut self, path: impl Into<String>) -> Self {
    self.output_path = Some(path.into());
    self
  }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RenderedPass<'a> {
  #[serde(rename = "Type")]
  kind: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  comment: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  result: Option<&'a serde_json::Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  input_path: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  result_path: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  output_path: Option<&'a str>,
  #[serde(flatten)]
  transition: Transition<'a>,
}

impl State for Pass {
  fn state_id(&self) -> &str {
    &self.id
  }

  fn has_open_next(&self) -> bool {
    !self.transitions.has_next()
  }

  fn can_have_catch(&self) -> bool {
    false
  }

  fn add_next(&mut self, next: &StateChain) -> Result<(), ChainError> {
    self.transitions.set_next(&self.id, next)
  }

  fn add_catch(&mut self, handler: &StateChain, props: &CatchProps) {
    self.transitions.add_catch(handler, props);
  }

  // Kept but not rendered: pass states have no Retry field.
  fn add_retry(&mut self, retry: &RetryProps) {
    self.transitions.add_retry(retry);
  }

  fn accessible_chains(&self) -> Vec<StateChain> {
    self.transitions.chains()
  }

  fn render_state(&self, _graph: &StateGraph) -> Result<serde_json::Value, ChainError> {
    to_state_value(
      &self.id,
      &RenderedPass {
        kind: "Pass",
        comment: self.comment.as_deref(),
        result: self.result.as_ref(),
        input_path: self.input_path.as_deref(),
        result_path: self.result_path.as_deref(),
        output_path: self.output_path.as_deref(),
        transition: self.transitions.render_transition(),
      },
    )
  }
}
