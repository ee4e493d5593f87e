use std::collections::HashMap;

use tracing::debug;

use crate::chain::StateChain;
use crate::error::ChainError;
use crate::state::State;

/// Arena owning every state of a definition under construction.
///
/// Chains refer to states by identifier; all mutation goes through the arena
/// so that a state is visible, with its attached edges, from every chain that
/// references it.
#[derive(Debug, Default)]
pub struct StateGraph {
  states: HashMap<String, Box<dyn State>>,
}

impl StateGraph {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a state and return the single-state chain starting at it.
  pub fn add_state<S: State + 'static>(&mut self, state: S) -> Result<StateChain, ChainError> {
    let id = state.state_id().to_string();
    if self.states.contains_key(&id) {
      return Err(ChainError::DuplicateStateId(id));
    }

    debug!(state_id = %id, "state added");
    self.states.insert(id.clone(), Box::new(state));
    Ok(StateChain::new(id))
  }

  /// Get a state by identifier.
  pub fn state(&self, id: &str) -> Result<&(dyn State + 'static), ChainError> {
    self
      .states
      .get(id)
      .map(|s| s.as_ref())
      .ok_or_else(|| ChainError::UnknownState(id.to_string()))
  }

  pub(crate) fn state_mut(&mut self, id: &str) -> Result<&mut (dyn State + 'static), ChainError> {
    match self.states.get_mut(id) {
      Some(state) => Ok(state.as_mut()),
      None => Err(ChainError::UnknownState(id.to_string())),
    }
  }

  pub fn contains(&self, id: &str) -> bool {
    self.states.contains_key(id)
  }

  pub fn len(&self) -> usize {
    self.states.len()
  }

  pub fn is_empty(&self) -> bool {
    self.states.is_empty()
  }
}
