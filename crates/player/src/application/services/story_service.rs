//! Story Service - Application service for the story API
//!
//! Typed wrapper over [`RawApiPort`] for the engine's state, choice, save
//! and load endpoints.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use rpgpt_domain::GameState;
use rpgpt_shared::{routes, ChoiceRequest, LoadRequest, LoadResponse};

use crate::ports::outbound::{ApiError, RawApiPort};

pub struct StoryService {
    api: Arc<dyn RawApiPort>,
}

impl StoryService {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Current state held by the engine.
    pub async fn get_state(&self) -> Result<GameState, ApiError> {
        parse(self.api.get_json(routes::STATE).await?)
    }

    /// Submit one of the offered choices and get the next state.
    pub async fn submit_choice(&self, choice: &str) -> Result<GameState, ApiError> {
        let body = to_value(&ChoiceRequest::new(choice))?;
        parse(self.api.post_json(routes::CHOICE, &body).await?)
    }

    /// Full state export from the engine, history included.
    pub async fn export_state(&self) -> Result<GameState, ApiError> {
        parse(self.api.get_json(routes::SAVE).await?)
    }

    /// Replace the engine's state with `state` and return what it accepted.
    pub async fn import_state(&self, state: serde_json::Value) -> Result<GameState, ApiError> {
        let body = to_value(&LoadRequest::new(state))?;
        let response: LoadResponse = parse(self.api.post_json(routes::LOAD, &body).await?)?;
        tracing::info!(message = %response.message, "Engine accepted game state");
        Ok(response.game_state)
    }
}

fn to_value<T: Serialize>(body: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))
}

fn parse<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use serde_json::json;

    fn service(api: MockRawApiPort) -> StoryService {
        StoryService::new(Arc::new(api))
    }

    #[tokio::test]
    async fn test_get_state() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json()
            .withf(|path| path == "/api/state")
            .times(1)
            .returning(|_| Ok(serde_json::to_value(GameState::seed()).unwrap()));

        assert_eq!(service(api).get_state().await.unwrap(), GameState::seed());
    }

    #[tokio::test]
    async fn test_submit_choice_posts_choice_body() {
        let mut api = MockRawApiPort::new();
        api.expect_post_json()
            .withf(|path, body| path == "/api/choice" && *body == json!({ "choice": "Go north" }))
            .times(1)
            .returning(|_, _| {
                Ok(json!({ "content": "Hills.", "choices": ["Climb"], "history": [] }))
            });

        let state = service(api).submit_choice("Go north").await.unwrap();

        assert_eq!(state.content, "Hills.");
        assert_eq!(state.choices, vec!["Climb"]);
    }

    #[tokio::test]
    async fn test_engine_error_is_passed_through() {
        let mut api = MockRawApiPort::new();
        api.expect_post_json().times(1).returning(|_, _| {
            Err(ApiError::HttpError {
                status: 500,
                message: "Failed to generate response".into(),
            })
        });

        let err = service(api).submit_choice("Go north").await.unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_unexpected_body_is_a_parse_error() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json()
            .times(1)
            .returning(|_| Ok(json!({ "unexpected": true })));

        assert!(matches!(
            service(api).get_state().await,
            Err(ApiError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_export_reads_save_endpoint() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json()
            .withf(|path| path == "/api/save")
            .times(1)
            .returning(|_| Ok(serde_json::to_value(GameState::seed()).unwrap()));

        assert_eq!(service(api).export_state().await.unwrap(), GameState::seed());
    }

    #[tokio::test]
    async fn test_import_wraps_state_and_unwraps_response() {
        let state = json!({ "content": "A cave.", "choices": ["Enter"], "history": [] });
        let expected_body = json!({ "state": state.clone() });
        let mut api = MockRawApiPort::new();
        api.expect_post_json()
            .withf(move |path, body| path == "/api/load" && *body == expected_body)
            .times(1)
            .returning(|_, body| {
                Ok(json!({
                    "message": "Game state loaded successfully",
                    "gameState": body["state"].clone()
                }))
            });

        let loaded = service(api).import_state(state).await.unwrap();
        assert_eq!(loaded.content, "A cave.");
    }
}
