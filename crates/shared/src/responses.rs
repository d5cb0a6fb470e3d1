//! Response bodies returned by the engine.

use serde::{Deserialize, Serialize};

use rpgpt_domain::GameState;

/// Fixed client-facing messages.
///
/// Downstream failures collapse into these strings; details
/// only reach the engine log.
pub mod messages {
    pub const INVALID_CHOICE: &str = "Invalid choice";
    pub const GENERATION_FAILED: &str = "Failed to generate response";
    pub const INVALID_GAME_STATE: &str = "Invalid game state";
    pub const GAME_STATE_LOADED: &str = "Game state loaded successfully";
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body of a successful `POST /api/load`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadResponse {
    pub message: String,
    #[serde(rename = "gameState")]
    pub game_state: GameState,
}

impl LoadResponse {
    pub fn loaded(game_state: GameState) -> Self {
        Self {
            message: messages::GAME_STATE_LOADED.to_string(),
            game_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_response_uses_camel_case_state_field() {
        let value = serde_json::to_value(LoadResponse::loaded(GameState::seed())).unwrap();

        assert_eq!(value["message"], messages::GAME_STATE_LOADED);
        assert_eq!(value["gameState"]["choices"][0], "Go north");
    }
}
