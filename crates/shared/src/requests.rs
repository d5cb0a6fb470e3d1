//! Request bodies accepted by the engine.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/choice`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice: Option<String>,
}

impl ChoiceRequest {
    pub fn new(choice: impl Into<String>) -> Self {
        Self {
            choice: Some(choice.into()),
        }
    }
}

/// Body of `POST /api/load`.
///
/// `state` stays untyped here; the engine shape-checks it before accepting it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<serde_json::Value>,
}

impl LoadRequest {
    pub fn new(state: serde_json::Value) -> Self {
        Self { state: Some(state) }
    }
}
