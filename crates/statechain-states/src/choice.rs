use serde::Serialize;
use statechain_config::{CatchProps, RetryProps};
use statechain_core::{ChainError, State, StateChain, StateGraph};

use crate::condition::Condition;
use crate::transition::to_state_value;

/// Branches to the first rule whose condition matches, or to the default.
///
/// A choice never takes a `Next` transition: its outgoing edges are the rule
/// targets and the optional `otherwise` chain.
#[derive(Debug, Clone)]
pub struct Choice {
  id: String,
  comment: Option<String>,
  input_path: Option<String>,
  output_path: Option<String>,
  rules: Vec<(Condition, StateChain)>,
  default: Option<StateChain>,
}

impl Choice {
  pub fn new(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      comment: None,
      input_path: None,
      output_path: None,
      rules: Vec::new(),
      default: None,
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

  /// Go to `next` when `condition` matches. Rules are tried in order.
  pub fn when(mut self, condition: Condition, next: &StateChain) -> Self {
    self.rules.push((condition, next.clone()));
    self
  }

  /// Go to `next` when no rule matches.
  pub fn otherwise(mut self, next: &StateChain) -> Self {
    self.default = Some(next.clone());
    self
  }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RenderedRule<'a> {
  #[serde(flatten)]
  condition: &'a Condition,
  next: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RenderedChoice<'a> {
  #[serde(rename = "Type")]
  kind: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  comment: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  input_path: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  output_path: Option<&'a str>,
  choices: Vec<RenderedRule<'a>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  default: Option<&'a str>,
}

impl State for Choice {
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
      "Choice states cannot have a Next; use otherwise() for the default branch",
    ))
  }

  // Never reached: the chain checks can_have_catch first.
  fn add_catch(&mut self, _handler: &StateChain, _props: &CatchProps) {}

  // Choice states only route; there is no work to retry.
  fn add_retry(&mut self, _retry: &RetryProps) {}

  fn accessible_chains(&self) -> Vec<StateChain> {
    let mut chains: Vec<StateChain> = self.rules.iter().map(|(_, next)| next.clone()).collect();
    chains.extend(self.default.iter().cloned());
    chains
  }

  fn render_state(&self, _graph: &StateGraph) -> Result<serde_json::Value, ChainError> {
    to_state_value(
      &self.id,
      &RenderedChoice {
        kind: "Choice",
        comment: self.comment.as_deref(),
        input_path: self.input_path.as_deref(),
        output_path: self.output_path.as_deref(),
        choices: self
          .rules
          .iter()
          .map(|(condition, next)| RenderedRule {
            condition,
            next: next.start_state(),
          })
          .collect(),
        default: self.default.as_ref().map(|c| c.start_state()),
      },
    )
  }
}
