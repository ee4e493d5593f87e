//! Edges and rendering pieces shared by the state kinds.

use serde::Serialize;
use statechain_config::{CatchProps, Errors, RetryProps};
use statechain_core::{ChainError, StateChain};

/// Outgoing edges of a state that takes a `Next` transition.
#[derive(Debug, Clone, Default)]
pub(crate) struct Transitions {
  next: Option<StateChain>,
  catches: Vec<(StateChain, CatchProps)>,
  retries: Vec<RetryProps>,
}

impl Transitions {
  pub(crate) fn has_next(&self) -> bool {
    self.next.is_some()
  }

  pub(crate) fn set_next(&mut self, state_id: &str, next: &StateChain) -> Result<(), ChainError> {
    if let Some(existing) = &self.next {
      return Err(ChainError::transition_conflict(
        state_id,
        format!("already transitions to '{}'", existing.start_state()),
      ));
    }
    self.next = Some(next.clone());
    Ok(())
  }

  pub(crate) fn add_catch(&mut self, handler: &StateChain, props: &CatchProps) {
    self.catches.push((handler.clone(), props.clone()));
  }

  pub(crate) fn add_retry(&mut self, retry: &RetryProps) {
    self.retries.push(retry.clone());
  }

  /// The `Next` chain followed by every handler chain.
  pub(crate) fn chains(&self) -> Vec<StateChain> {
    let mut chains: Vec<StateChain> = self.next.iter().cloned().collect();
    chains.extend(self.catches.iter().map(|(handler, _)| handler.clone()));
    chains
  }

  pub(crate) fn render_transition(&self) -> Transition<'_> {
    match &self.next {
      Some(next) => Transition::Next(next.start_state()),
      None => Transition::End(true),
    }
  }

  pub(crate) fn render_retries(&self) -> Vec<RenderedRetry> {
    self
      .retries
      .iter()
      .map(|retry| RenderedRetry {
        error_equals: errors_or_all(&retry.errors),
        interval_seconds: retry.interval_seconds,
        max_attempts: retry.max_attempts,
        backoff_rate: retry.backoff_rate,
      })
      .collect()
  }

  pub(crate) fn render_catches(&self) -> Vec<RenderedCatch<'_>> {
    self
      .catches
      .iter()
      .map(|(handler, props)| RenderedCatch {
        error_equals: errors_or_all(&props.errors),
        next: handler.start_state(),
        result_path: props.result_path.as_deref(),
      })
      .collect()
  }
}

fn errors_or_all(errors: &[String]) -> Vec<String> {
  if errors.is_empty() {
    Errors::all()
  } else {
    errors.to_vec()
  }
}

/// `"Next": <id>` or `"End": true`, flattened into a rendered state.
#[derive(Debug, Serialize)]
pub(crate) enum Transition<'a> {
  Next(&'a str),
  End(bool),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RenderedRetry {
  error_equals: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  interval_seconds: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  max_attempts: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  backoff_rate: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RenderedCatch<'a> {
  error_equals: Vec<String>,
  next: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  result_path: Option<&'a str>,
}

/// Serialize a rendered state, reporting failures against its id.
pub(crate) fn to_state_value<T: Serialize>(
  state_id: &str,
  rendered: &T,
) -> Result<serde_json::Value, ChainError> {
  serde_json::to_value(rendered).map_err(|e| ChainError::Render {
    state_id: state_id.to_string(),
    message: e.to_string(),
  })
}
