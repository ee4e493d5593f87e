use serde::{Deserialize, Serialize};
use statechain_config::{CatchProps, RetryProps};
use statechain_core::{ChainError, State, StateChain, StateGraph};

use crate::transition::{Transition, Transitions, to_state_value};

/// How long a [`Wait`] state pauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaitTime {
  /// A fixed number of seconds.
  Seconds(u64),
  /// Until an absolute ISO-8601 timestamp.
  Timestamp(String),
  /// Seconds read from the input at the given path.
  SecondsPath(String),
  /// Timestamp read from the input at the given path.
  TimestampPath(String),
}

/// Delays the execution before continuing.
#[derive(Debug, Clone)]
pub struct Wait {
  id: String,
  comment: Option<String>,
  time: WaitTime,
  input_path: Option<String>,
  output_path: Option<String>,
  transitions: Transitions,
}

impl Wait {
  pub fn new(id: impl Into<String>, time: WaitTime) -> Self {
    Self {
      id: id.into(),
      comment: None,
      time,
      input_path: None,
      output_path: None,
      transitions: Transitions::default(),
    }
  }

  pub fn seconds(id: impl Into<String>, seconds: u64) -> Self {
    Self::new(id, WaitTime::Seconds(seconds))
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
struct RenderedWait<'a> {
  #[serde(rename = "Type")]
  kind: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  comment: Option<&'a str>,
  #[serde(flatten)]
  time: &'a WaitTime,
  #[serde(skip_serializing_if = "Option::is_none")]
  input_path: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  output_path: Option<&'a str>,
  #[serde(flatten)]
  transition: Transition<'a>,
}

impl State for Wait {
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

  // Kept but not rendered: wait states have no Retry field.
  fn add_retry(&mut self, retry: &RetryProps) {
    self.transitions.add_retry(retry);
  }

  fn accessible_chains(&self) -> Vec<StateChain> {
    self.transitions.chains()
  }

  fn render_state(&self, _graph: &StateGraph) -> Result<serde_json::Value, ChainError> {
    to_state_value(
      &self.id,
      &RenderedWait {
        kind: "Wait",
        comment: self.comment.as_deref(),
        time: &self.time,
        input_path: self.input_path.as_deref(),
        output_path: self.output_path.as_deref(),
        transition: self.transitions.render_transition(),
      },
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_render_each_wait_time() {
    let graph = StateGraph::new();
    let cases = [
      (WaitTime::Seconds(10), json!({ "Seconds": 10 })),
      (
        WaitTime::Timestamp("2026-01-01T00:00:00Z".to_string()),
        json!({ "Timestamp": "2026-01-01T00:00:00Z" }),
      ),
      (
        WaitTime::SecondsPath("$.delay".to_string()),
        json!({ "SecondsPath": "$.delay" }),
      ),
      (
        WaitTime::TimestampPath("$.until".to_string()),
        json!({ "TimestampPath": "$.until" }),
      ),
    ];

    for (time, expected) in cases {
      let rendered = Wait::new("pause", time).render_state(&graph).unwrap();
      let (key, value) = expected.as_object().unwrap().iter().next().unwrap();
      assert_eq!(rendered["Type"], "Wait");
      assert_eq!(&rendered[key], value);
      assert_eq!(rendered["End"], true);
    }
  }

  #[test]
  fn test_wait_chains_like_any_open_state() {
    let mut graph = StateGraph::new();
    let pause = graph.add_state(Wait::seconds("pause", 5)).unwrap();
    let after = graph.add_state(Wait::seconds("after", 5)).unwrap();

    let chain = pause.next(&mut graph, &after).unwrap();

    assert!(chain.active_states().contains("after"));
    assert_eq!(
      graph.state("pause").unwrap().render_state(&graph).unwrap()["Next"],
      "after"
    );
  }
}
