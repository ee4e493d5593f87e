//! Statechain Core
//!
//! Builds state machine definitions out of composable chain fragments.
//!
//! States live in a single [`StateGraph`] arena keyed by their identifier.
//! A [`StateChain`] never owns a state; it holds two identifier sets over the
//! arena:
//! - every state folded into the chain so far
//! - the states whose `Next` transition is still open (continuation points)
//!
//! Chain operations return a new chain value but mutate the shared states in
//! the arena: structural sharing of the graph, value semantics of the index
//! sets. A chain therefore describes "the graph as of this point in
//! construction", not a frozen view.
//!
//! Rendering always recomputes the reachable closure from the start state and
//! produces a [`RenderedStateMachine`].

mod chain;
mod error;
mod graph;
mod render;
mod set;
mod state;

#[cfg(test)]
mod test_support;

pub use chain::StateChain;
pub use error::ChainError;
pub use graph::StateGraph;
pub use render::{RenderedStateMachine, StateMachineDefinition};
pub use set::StateSet;
pub use state::State;
