use std::collections::VecDeque;

use statechain_config::{CatchProps, DefinitionProps, RetryProps};
use tracing::{debug, instrument, trace};

use crate::error::ChainError;
use crate::graph::StateGraph;
use crate::render::{RenderedStateMachine, StateMachineDefinition};
use crate::set::StateSet;

/// A fragment of a state machine under construction.
///
/// Holds identifier sets over a [`StateGraph`]: every state folded in so far
/// and the states that are still valid continuation points. The start state is
/// fixed when the chain is created and survives every operation.
///
/// Operations that extend the chain return a new value and leave the
/// receiver's sets untouched, but the states they link are mutated in the
/// arena and that is visible through every chain referencing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChain {
  start: String,
  all: StateSet,
  active: StateSet,
}

impl StateChain {
  /// Chain around a single state.
  ///
  /// The start state is seeded as active even when its kind never takes a
  /// `Next`, so the first `next()` fails with the state's own error instead
  /// of [`ChainError::NoOpenContinuation`].
  pub(crate) fn new(start: impl Into<String>) -> Self {
    let start = start.into();
    let mut all = StateSet::new();
    all.insert(start.clone());
    let active = all.clone();

    Self { start, all, active }
  }

  pub fn start_state(&self) -> &str {
    &self.start
  }

  /// Every state folded into this chain so far.
  pub fn all_states(&self) -> &StateSet {
    &self.all
  }

  /// States whose `Next` transition is still open.
  pub fn active_states(&self) -> &StateSet {
    &self.active
  }

  /// Append `next` after every active state of this chain.
  ///
  /// The returned chain contains the states of both chains and continues from
  /// the active states of `next` that can still take a transition.
  pub fn next(&self, graph: &mut StateGraph, next: &StateChain) -> Result<StateChain, ChainError> {
    if self.active.is_empty() {
      return Err(ChainError::NoOpenContinuation);
    }
    for id in &self.active {
      graph.state(id)?;
    }

    for id in &self.active {
      graph.state_mut(id)?.add_next(next)?;
    }

    let from: Vec<&str> = self.active.iter().collect();
    debug!(from = ?from, to = %next.start, "chained states");

    let mut ret = self.clone();
    ret.absorb(next);
    // Seeded start states that never take a Next stop being continuation
    // points once they are folded into a longer chain.
    ret.active = StateSet::new();
    for id in &next.active {
      if graph.state(id)?.has_open_next() {
        ret.active.insert(id);
      }
    }
    Ok(ret)
  }

  /// Attach `handler` as an error handler to every state of this chain.
  ///
  /// Fails without touching any state if one of them cannot catch errors. The
  /// handler's states become part of the result, its active states do not:
  /// error handlers are off the main continuation path.
  pub fn on_error(
    &self,
    graph: &mut StateGraph,
    handler: &StateChain,
    props: CatchProps,
  ) -> Result<StateChain, ChainError> {
    let props = props.or_match_all();

    let mut unsupported = Vec::new();
    for id in &self.all {
      if !graph.state(id)?.can_have_catch() {
        unsupported.push(id.to_string());
      }
    }
    if !unsupported.is_empty() {
      return Err(ChainError::CatchNotSupported {
        state_ids: unsupported,
      });
    }

    for id in &self.all {
      graph.state_mut(id)?.add_catch(handler, &props);
    }

    debug!(
      states = self.all.len(),
      handler = %handler.start,
      errors = ?props.errors,
      "attached error handler"
    );

    let mut ret = self.clone();
    ret.absorb(handler);
    Ok(ret)
  }

  /// Every state reachable from the start state.
  ///
  /// The active states of the result are recomputed from the states
  /// themselves and may differ from the incrementally tracked ones.
  pub fn closure(&self, graph: &StateGraph) -> Result<StateChain, ChainError> {
    let mut ret = StateChain::new(self.start.clone());

    let mut queue: VecDeque<StateChain> = graph.state(&self.start)?.accessible_chains().into();
    while let Some(chain) = queue.pop_front() {
      for id in &chain.all {
        if ret.all.insert(id) {
          trace!(state_id = %id, "state reachable");
          queue.extend(graph.state(id)?.accessible_chains());
        }
      }
    }

    let mut active = StateSet::new();
    for id in &ret.all {
      if graph.state(id)?.has_open_next() {
        active.insert(id);
      }
    }
    ret.active = active;

    Ok(ret)
  }

  /// Render the closure of this chain.
  pub fn render(&self, graph: &StateGraph) -> Result<RenderedStateMachine, ChainError> {
    self.render_with(graph, &DefinitionProps::default())
  }

  /// Render the closure of this chain with top-level definition settings.
  #[instrument(name = "render_state_machine", skip_all, fields(start_at = %self.start))]
  pub fn render_with(
    &self,
    graph: &StateGraph,
    props: &DefinitionProps,
  ) -> Result<RenderedStateMachine, ChainError> {
    let closed = self.closure(graph)?;

    let mut states = serde_json::Map::new();
    let mut policy_statements = Vec::new();
    for id in &closed.all {
      let state = graph.state(id)?;
      states.insert(id.to_string(), state.render_state(graph)?);
      policy_statements.extend(state.policy_statements());
    }

    debug!(
      states = states.len(),
      policy_statements = policy_statements.len(),
      "rendered state machine"
    );

    Ok(RenderedStateMachine {
      state_machine_definition: StateMachineDefinition {
        start_at: self.start.clone(),
        states,
        comment: props.comment.clone(),
        timeout_seconds: props.timeout_seconds,
        version: props.version.clone(),
      },
      policy_statements,
    })
  }

  /// Render only the definition, e.g. for a nested branch.
  pub fn definition(&self, graph: &StateGraph) -> Result<StateMachineDefinition, ChainError> {
    Ok(self.render(graph)?.state_machine_definition)
  }

  /// Apply `retry` to every state of this chain, whatever its kind.
  ///
  /// Returns the same chain.
  pub fn default_retry(
    self,
    graph: &mut StateGraph,
    retry: RetryProps,
  ) -> Result<StateChain, ChainError> {
    for id in &self.all {
      graph.state(id)?;
    }
    for id in &self.all {
      graph.state_mut(id)?.add_retry(&retry);
    }

    debug!(states = self.all.len(), "applied default retry");
    Ok(self)
  }

  /// Fold the states of `other` into this chain without making any of them
  /// continuation points.
  pub(crate) fn absorb(&mut self, other: &StateChain) {
    self.all.extend_from(&other.all);
  }
}
