use serde::Serialize;
use statechain_config::{CatchProps, RetryProps};
use statechain_core::{ChainError, State, StateChain, StateGraph, StateMachineDefinition};

use crate::transition::{RenderedCatch, RenderedRetry, Transition, Transitions, to_state_value};

/// Runs several branches concurrently and continues once all have finished.
///
/// Wrapping a chain in a single-branch parallel is also the way to attach an
/// error handler to chains that contain states which cannot catch.
#[derive(Debug, Clone)]
pub struct Parallel {
  id: String,
  comment: Option<String>,
  input_path: Option<String>,
  result_path: Option<String>,
  output_path: Option<String>,
  branches: Vec<StateChain>,
  transitions: Transitions,
}

impl Parallel {
  pub fn new(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      comment: None,
      input_path: None,
      result_path: None,
      output_path: None,
      branches: Vec::new(),
      transitions: Transitions::default(),
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

  pub fn with_result_path(mut self, path: impl Into<String>) -> Self {
    self.result_path = Some(path.into());
    self
  }

  pub fn with_output_path(mut self, path: impl Into<String>) -> Self {
    self.output_path = Some(path.into());
    self
  }

  /// Add a branch starting at the start state of `branch`.
  pub fn branch(mut self, branch: &StateChain) -> Self {
    self.branches.push(branch.clone());
    self
  }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RenderedParallel<'a> {
  #[serde(rename = "Type")]
  kind: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  comment: Option<&'a str>,
  branches: Vec<StateMachineDefinition>,
  #[serde(skip_serializing_if = "Option::is_none")]
  input_path: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  result_path: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  output_path: Option<&'a str>,
  #[serde(flatten)]
  transition: Transition<'a>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  retry: Vec<RenderedRetry>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  catch: Vec<RenderedCatch<'a>>,
}

impl State for Parallel {
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
    let mut chains = self.transitions.chains();
    chains.extend(self.branches.iter().cloned());
    chains
  }

  fn render_state(&self, graph: &StateGraph) -> Result<serde_json::Value, ChainError> {
    // A branch that reaches this state again would nest its own render forever.
    for branch in &self.branches {
      if branch.closure(graph)?.all_states().contains(&self.id) {
        return Err(ChainError::Render {
          state_id: self.id.clone(),
          message: format!(
            "branch starting at '{}' leads back to its parallel",
            branch.start_state()
          ),
        });
      }
    }

    let branches = self
      .branches
      .iter()
      .map(|branch| branch.definition(graph))
      .collect::<Result<Vec<_>, _>>()?;

    to_state_value(
      &self.id,
      &RenderedParallel {
        kind: "Parallel",
        comment: self.comment.as_deref(),
        branches,
        input_path: self.input_path.as_deref(),
        result_path: self.result_path.as_deref(),
        output_path: self.output_path.as_deref(),
        transition: self.transitions.render_transition(),
        retry: self.transitions.render_retries(),
        catch: self.transitions.render_catches(),
      },
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Pass, Wait};
  use serde_json::json;

  #[test]
  fn test_render_branches_as_nested_definitions() {
    let mut graph = StateGraph::new();
    let left = graph.add_state(Pass::new("left")).unwrap();
    let pause = graph.add_state(Wait::seconds("pause", 1)).unwrap();
    let right = graph.add_state(Pass::new("right")).unwrap();
    let right = right.next(&mut graph, &pause).unwrap();

    let fan_out = Parallel::new("fan_out").branch(&left).branch(&right);

    assert_eq!(
      fan_out.render_state(&graph).unwrap(),
      json!({
        "Type": "Parallel",
        "Branches": [
          { "StartAt": "left", "States": { "left": { "Type": "Pass", "End": true } } },
          {
            "StartAt": "right",
            "States": {
              "right": { "Type": "Pass", "Next": "pause" },
              "pause": { "Type": "Wait", "Seconds": 1, "End": true }
            }
          }
        ],
        "End": true
      })
    );
  }

  #[test]
  fn test_branch_leading_back_to_parallel_fails_to_render() {
    let mut graph = StateGraph::new();
    let inner = graph.add_state(Pass::new("inner")).unwrap();
    let par = graph
      .add_state(Parallel::new("par").branch(&inner))
      .unwrap();
    inner.next(&mut graph, &par).unwrap();

    let err = par.render(&graph).unwrap_err();
    assert_eq!(
      err,
      ChainError::Render {
        state_id: "par".to_string(),
        message: "branch starting at 'inner' leads back to its parallel".to_string(),
      }
    );
  }

  #[test]
  fn test_nested_parallel_cycle_fails_to_render() {
    let mut graph = StateGraph::new();
    let inner = graph.add_state(Pass::new("inner")).unwrap();
    let outer = graph
      .add_state(Parallel::new("outer").branch(&inner))
      .unwrap();
    let nested = graph
      .add_state(Parallel::new("nested").branch(&outer))
      .unwrap();
    inner.next(&mut graph, &nested).unwrap();

    assert!(matches!(
      nested.render(&graph),
      Err(ChainError::Render { .. })
    ));
    assert!(matches!(
      outer.render(&graph),
      Err(ChainError::Render { .. })
    ));
  }

  #[test]
  fn test_wrapping_lets_uncatchable_chains_catch() {
    let mut graph = StateGraph::new();
    let pass = graph.add_state(Pass::new("pass")).unwrap();
    let pause = graph.add_state(Wait::seconds("pause", 1)).unwrap();
    let inner = pass.next(&mut graph, &pause).unwrap();
    let handler = graph.add_state(Pass::new("handler")).unwrap();

    assert!(matches!(
      inner.on_error(&mut graph, &handler, CatchProps::new()),
      Err(ChainError::CatchNotSupported { .. })
    ));

    let wrapped = graph
      .add_state(Parallel::new("wrapped").branch(&inner))
      .unwrap();
    let chain = wrapped
      .on_error(&mut graph, &handler, CatchProps::new())
      .unwrap();

    assert_eq!(chain.active_states().iter().collect::<Vec<_>>(), vec!["wrapped"]);
    let rendered = graph.state("wrapped").unwrap().render_state(&graph).unwrap();
    assert_eq!(
      rendered["Catch"],
      json!([{ "ErrorEquals": ["States.ALL"], "Next": "handler" }])
    );
  }

  #[test]
  fn test_branches_are_accessible() {
    let mut graph = StateGraph::new();
    let left = graph.add_state(Pass::new("left")).unwrap();
    let fan_out = Parallel::new("fan_out").branch(&left);

    let starts: Vec<_> = fan_out
      .accessible_chains()
      .iter()
      .map(|c| c.start_state().to_string())
      .collect();
    assert_eq!(starts, vec!["left"]);
  }
}
