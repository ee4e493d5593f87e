//! Statechain Config
//!
//! Plain, serializable option types consumed by the chain builder and the
//! concrete state kinds. Nothing in here knows about the graph; these are the
//! values callers pass in (or load from JSON) when attaching catch handlers,
//! retry policies and top-level definition settings.

mod catch;
mod definition;
mod errors;
mod policy;
mod retry;

pub use catch::CatchProps;
pub use definition::DefinitionProps;
pub use errors::Errors;
pub use policy::{Effect, PolicyStatement};
pub use retry::RetryProps;
