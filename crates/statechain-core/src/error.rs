use thiserror::Error;

/// Build-time errors raised while assembling or rendering a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
  /// The chain has no state with an open `Next` transition to continue from.
  #[error("cannot add to chain: there are no chainable states without a \"Next\" transition")]
  NoOpenContinuation,

  /// A state refused a `Next` transition (already assigned, or its kind
  /// never takes one).
  #[error("state '{state_id}' cannot take a Next transition: {reason}")]
  TransitionConflict { state_id: String, reason: String },

  /// Error handlers can only be attached when every state in the chain
  /// supports catching.
  #[error(
    "chain contains states that cannot catch errors ({}); wrap the chain in a Parallel state to catch errors",
    .state_ids.join(", ")
  )]
  CatchNotSupported { state_ids: Vec<String> },

  #[error("state id already defined: {0}")]
  DuplicateStateId(String),

  #[error("state not found: {0}")]
  UnknownState(String),

  #[error("failed to render state '{state_id}': {message}")]
  Render { state_id: String, message: String },
}

impl ChainError {
  /// Convenience for state kinds rejecting a `Next` transition.
  pub fn transition_conflict(state_id: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::TransitionConflict {
      state_id: state_id.into(),
      reason: reason.into(),
    }
  }
}
