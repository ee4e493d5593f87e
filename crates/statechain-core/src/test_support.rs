//! Recording state used by the unit tests.

use serde_json::json;
use statechain_config::{CatchProps, PolicyStatement, RetryProps};

use crate::chain::StateChain;
use crate::error::ChainError;
use crate::graph::StateGraph;
use crate::state::State;

#[derive(Debug)]
pub(crate) struct TestState {
  id: String,
  takes_next: bool,
  catchable: bool,
  next: Option<StateChain>,
  catches: Vec<(StateChain, Vec<String>)>,
  retries: Vec<RetryProps>,
  branches: Vec<StateChain>,
  policies: Vec<PolicyStatement>,
}

impl TestState {
  /// Takes a Next transition and supports catch.
  pub(crate) fn open(id: &str) -> Self {
    Self {
      id: id.to_string(),
      takes_next: true,
      catchable: true,
      next: None,
      catches: Vec::new(),
      retries: Vec::new(),
      branches: Vec::new(),
      policies: Vec::new(),
    }
  }

  /// Never takes a Next transition and cannot catch.
  pub(crate) fn terminal(id: &str) -> Self {
    Self {
      takes_next: false,
      catchable: false,
      ..Self::open(id)
    }
  }

  /// Takes a Next transition but cannot catch.
  pub(crate) fn uncatchable(id: &str) -> Self {
    Self {
      catchable: false,
      ..Self::open(id)
    }
  }

  pub(crate) fn with_branch(mut self, branch: StateChain) -> Self {
    self.branches.push(branch);
    self
  }

  pub(crate) fn with_policy(mut self, action: &str) -> Self {
    self
      .policies
      .push(PolicyStatement::allow([action], [self.id.clone()]));
    self
  }
}

impl State for TestState {
  fn state_id(&self) -> &str {
    &self.id
  }

  fn has_open_next(&self) -> bool {
    self.takes_next && self.next.is_none()
  }

  fn can_have_catch(&self) -> bool {
    self.catchable
  }

  fn add_next(&mut self, next: &StateChain) -> Result<(), ChainError> {
    if !self.takes_next {
      return Err(ChainError::transition_conflict(&self.id, "test state is terminal"));
    }
    if self.next.is_some() {
      return Err(ChainError::transition_conflict(&self.id, "already has a Next"));
    }
    self.next = Some(next.clone());
    Ok(())
  }

  fn add_catch(&mut self, handler: &StateChain, props: &CatchProps) {
    self.catches.push((handler.clone(), props.errors.clone()));
  }

  fn add_retry(&mut self, retry: &RetryProps) {
    self.retries.push(retry.clone());
  }

  fn accessible_chains(&self) -> Vec<StateChain> {
    let mut chains: Vec<StateChain> = self.next.iter().cloned().collect();
    chains.extend(self.catches.iter().map(|(handler, _)| handler.clone()));
    chains.extend(self.branches.iter().cloned());
    chains
  }

  fn render_state(&self, _graph: &StateGraph) -> Result<serde_json::Value, ChainError> {
    Ok(json!({
      "next": self.next.as_ref().map(|c| c.start_state()),
      "catches": self
        .catches
        .iter()
        .map(|(handler, errors)| json!({ "next": handler.start_state(), "errors": errors }))
        .collect::<Vec<_>>(),
      "retries": self.retries.len(),
    }))
  }

  fn policy_statements(&self) -> Vec<PolicyStatement> {
    self.policies.clone()
  }
}
