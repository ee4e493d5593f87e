use serde::Serialize;
use statechain_config::{CatchProps, PolicyStatement, RetryProps};
use statechain_core::{ChainError, State, StateChain, StateGraph};

use crate::transition::{RenderedCatch, RenderedRetry, Transition, Transitions, to_state_value};

/// A unit of work performed by an external resource (function, activity, ...).
#[derive(Debug, Clone)]
pub struct Task {
  id: String,
  resource: String,
  comment: Option<String>,
  parameters: Option<serde_json::Value>,
  input_path: Option<String>,
  result_path: Option<String>,
  output_path: Option<String>,
  timeout_seconds: Option<u32>,
  heartbeat_seconds: Option<u32>,
  policy_statements: Vec<PolicyStatement>,
  transitions: Transitions,
}

impl Task {
  /// Create a task invoking the resource with the given ARN.
  pub fn new(id: impl Into<String>, resource: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      resource: resource.into(),
      comment: None,
      parameters: None,
      input_path: None,
      result_path: None,
      output_path: None,
      timeout_seconds: None,
      heartbeat_seconds: None,
      policy_statements: Vec::new(),
      transitions: Transitions::default(),
    }
  }

  pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
    self.comment = Some(comment.into());
    self
  }

  pub fn with_parameters(mut self, parameters: serde_json::Value) -> Self {
    self.parameters = Some(parameters);
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

  pub fn with_timeout_seconds(mut self, seconds: u32) -> Self {
    self.timeout_seconds = Some(seconds);
    self
  }

  pub fn with_heartbeat_seconds(mut self, seconds: u32) -> Self {
    self.heartbeat_seconds = Some(seconds);
    self
  }

  /// Add a permission the execution role needs to run this task.
  pub fn with_policy_statement(mut self, statement: PolicyStatement) -> Self {
    self.policy_statements.push(statement);
    self
  }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RenderedTask<'a> {
  #[serde(rename = "Type")]
  kind: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  comment: Option<&'a str>,
  resource: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  parameters: Option<&'a serde_json::Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  input_path: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  result_path: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  output_path: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  timeout_seconds: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  heartbeat_seconds: Option<u32>,
  #[serde(flatten)]
  transition: Transition<'a>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  retry: Vec<RenderedRetry>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  catch: Vec<RenderedCatch<'a>>,
}

impl State for Task {
  fn state_id(&self) -> &str {
    &self.id
  }

  fn has_open_next(&self) -> bool {
    !self.transitions.has_next()
  }

  fn can_have_catch(&self) -> bool {
    true
  }

  fn add_next(&mut self, next: &StateChain) -> Result<(), ChainError> {
    self.transitions.set_next(&self.id, next)
  }

  fn add_catch(&mut self, handler: &StateChain, props: &CatchProps) {
    self.transitions.add_catch(handler, props);
  }

  fn add_retry(&mut self, retry: &RetryProps) {
    self.transitions.add_retry(retry);
  }

  fn accessible_chains(&self) -> Vec<StateChain> {
    self.transitions.chains()
  }

  fn render_state(&self, _graph: &StateGraph) -> Result<serde_json::Value, ChainError> {
    to_state_value(
      &self.id,
      &RenderedTask {
        kind: "Task",
        comment: self.comment.as_deref(),
        resource: &self.resource,
        parameters: self.parameters.as_ref(),
        input_path: self.input_path.as_deref(),
        result_path: self.result_path.as_deref(),
        output_path: self.output_path.as_deref(),
        timeout_seconds: self.timeout_seconds,
        heartbeat_seconds: self.heartbeat_seconds,
        transition: self.transitions.render_transition(),
        retry: self.transitions.render_retries(),
        catch: self.transitions.render_catches(),
      },
    )
  }

  fn policy_statements(&self) -> Vec<PolicyStatement> {
    self.policy_statements.clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  const HELLO_ARN: &str = "arn:aws:lambda:us-east-1:123456789012:function:hello";

  #[test]
  fn test_render_minimal_task() {
    let graph = StateGraph::new();
    let task = Task::new("hello", HELLO_ARN);

    assert_eq!(
      task.render_state(&graph).unwrap(),
      json!({ "Type": "Task", "Resource": HELLO_ARN, "End": true })
    );
  }

  #[test]
  fn test_render_with_next_retry_and_catch() {
    let mut graph = StateGraph::new();
    let hello = graph
      .add_state(Task::new("hello", HELLO_ARN).with_timeout_seconds(30))
      .unwrap();
    let done = graph.add_state(Task::new("done", HELLO_ARN)).unwrap();
    let recover = graph.add_state(Task::new("recover", HELLO_ARN)).unwrap();

    hello
      .next(&mut graph, &done)
      .unwrap()
      .on_error(
        &mut graph,
        &recover,
        CatchProps::new().with_result_path("$.error"),
      )
      .unwrap()
      .default_retry(&mut graph, RetryProps::new().with_max_attempts(2))
      .unwrap();

    let rendered = graph.state("hello").unwrap().render_state(&graph).unwrap();
    assert_eq!(
      rendered,
      json!({
        "Type": "Task",
        "Resource": HELLO_ARN,
        "TimeoutSeconds": 30,
        "Next": "done",
        "Retry": [{ "ErrorEquals": ["States.ALL"], "MaxAttempts": 2 }],
        "Catch": [{ "ErrorEquals": ["States.ALL"], "Next": "recover", "ResultPath": "$.error" }]
      })
    );
  }

  #[test]
  fn test_second_next_conflicts() {
    let mut graph = StateGraph::new();
    let hello = graph.add_state(Task::new("hello", HELLO_ARN)).unwrap();
    let a = graph.add_state(Task::new("a", HELLO_ARN)).unwrap();
    let b = graph.add_state(Task::new("b", HELLO_ARN)).unwrap();

    hello.next(&mut graph, &a).unwrap();
    let err = hello.next(&mut graph, &b).unwrap_err();

    assert_eq!(
      err.to_string(),
      "state 'hello' cannot take a Next transition: already transitions to 'a'"
    );
  }

  #[test]
  fn test_policy_statements_are_reported() {
    let stmt = PolicyStatement::allow(["lambda:InvokeFunction"], [HELLO_ARN]);
    let task = Task::new("hello", HELLO_ARN).with_policy_statement(stmt.clone());

    assert_eq!(task.policy_statements(), vec![stmt]);
  }
}
