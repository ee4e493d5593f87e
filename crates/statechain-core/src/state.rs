use std::fmt::Debug;

use statechain_config::{CatchProps, PolicyStatement, RetryProps};

use crate::chain::StateChain;
use crate::error::ChainError;
use crate::graph::StateGraph;

/// The contract every vertex of a state machine graph provides.
///
/// Concrete kinds (task, parallel, choice, ...) implement this; the chain
/// builder only ever talks to states through it. States are owned by a
/// [`StateGraph`] and mutated in place when edges are attached.
pub trait State: Debug {
  /// Identifier of this state, unique within a graph. Used as the key in the
  /// rendered `States` map.
  fn state_id(&self) -> &str;

  /// Whether a `Next` transition may still be assigned.
  ///
  /// Stays `false` forever for kinds that never take one (terminal and
  /// branching kinds).
  fn has_open_next(&self) -> bool;

  /// Whether error handlers may be attached to this state.
  fn can_have_catch(&self) -> bool;

  /// Assign the default transition.
  ///
  /// Must fail with [`ChainError::TransitionConflict`] when a transition is
  /// already assigned or this kind does not allow one, describing why.
  fn add_next(&mut self, next: &StateChain) -> Result<(), ChainError>;

  /// Attach an error handler. Only called after [`State::can_have_catch`]
  /// returned `true` for every state of the chain.
  fn add_catch(&mut self, handler: &StateChain, props: &CatchProps);

  fn add_retry(&mut self, retry: &RetryProps);

  /// Every chain directly reachable from this state: the default transition,
  /// error handlers and kind-specific nested chains such as parallel branches.
  fn accessible_chains(&self) -> Vec<StateChain>;

  /// Render the serializable form of this state. The graph is available so
  /// compound kinds can render their nested chains.
  fn render_state(&self, graph: &StateGraph) -> Result<serde_json::Value, ChainError>;

  /// Permission statements this state needs at execution time.
  fn policy_statements(&self) -> Vec<PolicyStatement> {
    Vec::new()
  }
}
