//! Agent configuration handling.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for agents.
///
/// ```json
/// {"seed": 12345}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Optional RNG seed for reproducible decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl AgentConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Parse from optional JSON. Missing or malformed config yields defaults.
    pub fn from_json(json: Option<&JsonValue>) -> Self {
        json.and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }
}
