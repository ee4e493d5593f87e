//! Statechain
//!
//! Builds declarative state machine definitions out of composable fragments:
//! chain states, attach error handlers and retry policies, then render the
//! reachable graph together with the permission statements it needs.
//!
//! ```
//! use statechain::{CatchProps, StateGraph, Pass, Succeed, Task};
//!
//! let mut graph = StateGraph::new();
//! let work = graph.add_state(Task::new("work", "arn:aws:lambda:us-east-1:123456789012:function:work"))?;
//! let recover = graph.add_state(Pass::new("recover"))?;
//! let done = graph.add_state(Succeed::new("done"))?;
//!
//! let chain = work
//!   .on_error(&mut graph, &recover, CatchProps::new())?
//!   .next(&mut graph, &done)?;
//!
//! let rendered = chain.render(&graph)?;
//! assert_eq!(rendered.definition().start_at, "work");
//! assert_eq!(rendered.definition().states.len(), 3);
//! # Ok::<(), statechain::ChainError>(())
//! ```

pub use statechain_config::{
  CatchProps, DefinitionProps, Effect, Errors, PolicyStatement, RetryProps,
};
pub use statechain_core::{
  ChainError, RenderedStateMachine, State, StateChain, StateGraph, StateMachineDefinition,
  StateSet,
};
pub use statechain_states::{
  Choice, ComparisonOperator, Condition, Fail, Parallel, Pass, Succeed, Task, Wait, WaitTime,
};
