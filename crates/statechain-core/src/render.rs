use serde::{Deserialize, Serialize};
use statechain_config::PolicyStatement;

/// The serializable state machine definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StateMachineDefinition {
  pub start_at: String,
  /// Rendered states keyed by state id.
  pub states: serde_json::Map<String, serde_json::Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub comment: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub timeout_seconds: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
}

/// Output of rendering a chain: the definition plus every permission
/// statement gathered from the reachable states, in traversal order and
/// without deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderedStateMachine {
  pub state_machine_definition: StateMachineDefinition,
  pub policy_statements: Vec<PolicyStatement>,
}

impl RenderedStateMachine {
  pub fn definition(&self) -> &StateMachineDefinition {
    &self.state_machine_definition
  }

  /// The definition as a pretty-printed JSON document.
  pub fn definition_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&self.state_machine_definition)
  }
}
