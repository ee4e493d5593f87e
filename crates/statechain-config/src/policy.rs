use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
  #[default]
  Allow,
  Deny,
}

/// A permission statement required by a state at execution time.
///
/// The chain builder never inspects these; it only gathers them from every
/// reachable state so the caller can attach them to the execution role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
  pub effect: Effect,
  #[serde(rename = "Action")]
  pub actions: Vec<String>,
  #[serde(rename = "Resource")]
  pub resources: Vec<String>,
}

impl PolicyStatement {
  /// An `Allow` statement for the given actions on the given resources.
  pub fn allow<A, R>(actions: A, resources: R) -> Self
  where
    A: IntoIterator,
    A::Item: Into<String>,
    R: IntoIterator,
    R::Item: Into<String>,
  {
    Self {
      effect: Effect::Allow,
      actions: actions.into_iter().map(Into::into).collect(),
      resources: resources.into_iter().map(Into::into).collect(),
    }
  }
}
