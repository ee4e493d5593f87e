/// Predefined error names understood by the state language.
pub struct Errors;

impl Errors {
  /// Matches any error.
  pub const ALL: &'static str = "States.ALL";
  /// A task ran longer than its timeout or missed a heartbeat.
  pub const TIMEOUT: &'static str = "States.Timeout";
  pub const TASKS_FAILED: &'static str = "States.TaskFailed";
  pub const PERMISSIONS: &'static str = "States.Permissions";
  pub const RESULT_PATH_MATCH_FAILURE: &'static str = "States.ResultPathMatchFailure";
  /// A branch of a parallel state failed.
  pub const BRANCH_FAILED: &'static str = "States.BranchFailed";
  /// A choice state found no matching rule and has no default.
  pub const NO_CHOICE_MATCHED: &'static str = "States.NoChoiceMatched";

  /// Error list that matches everything.
  pub fn all() -> Vec<String> {
    vec![Self::ALL.to_string()]
  }
}
