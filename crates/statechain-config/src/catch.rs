use serde::{Deserialize, Serialize};

use crate::errors::Errors;

/// Options for an error handler attached with `on_error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchProps {
  /// Error names this handler matches. Empty means every error.
  pub errors: Vec<String>,

  /// Where to place the error output in the handler's input.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub result_path: Option<String>,
}

impl CatchProps {
  pub fn new() -> Self {
    Self::default()
  }

  /// Match only the given error names.
  pub fn with_errors<I, S>(mut self, errors: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.errors = errors.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_result_path(mut self, path: impl Into<String>) -> Self {
    self.result_path = Some(path.into());
    self
  }

  /// Replace an empty error list with the match-all pattern.
  pub fn or_match_all(mut self) -> Self {
    if self.errors.is_empty() {
      self.errors = Errors::all();
    }
    self
  }
}
