//! Statechain States
//!
//! Concrete state kinds implementing the [`statechain_core::State`] contract
//! and rendering to the step-function state language.
//!
//! | Kind | Takes `Next` | Catches errors |
//! |------|--------------|----------------|
//! | [`Task`] | yes | yes |
//! | [`Parallel`] | yes | yes |
//! | [`Pass`] | yes | no |
//! | [`Wait`] | yes | no |
//! | [`Choice`] | no (use `otherwise`) | no |
//! | [`Succeed`] / [`Fail`] | no | no |
//!
//! Every kind accepts retry policies; only task and parallel states render
//! them.

mod choice;
mod condition;
mod fail;
mod parallel;
mod pass;
mod succeed;
mod task;
mod transition;
mod wait;

pub use choice::Choice;
pub use condition::{ComparisonOperator, Condition};
pub use fail::Fail;
pub use parallel::Parallel;
pub use pass::Pass;
pub use succeed::Succeed;
pub use task::Task;
pub use wait::{Wait, WaitTime};
