//! Load state use case.
//!
//! Replaces the whole game state with one supplied by the client, typically a
//! file written earlier by [`super::SaveState`]. The payload is shape-checked
//! before it is accepted.

use std::sync::Arc;

use rpgpt_domain::{DomainError, GameState};

use crate::stores::GameStateStore;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

impl From<DomainError> for LoadError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidState(reason) => Self::InvalidState(reason),
            other => Self::InvalidState(other.to_string()),
        }
    }
}

pub struct LoadState {
    store: Arc<GameStateStore>,
}

impl LoadState {
    pub fn new(store: Arc<GameStateStore>) -> Self {
        Self { store }
    }

    /// Validate `value` and make it the current state.
    ///
    /// `None` (field absent or JSON `null`) is rejected like any other
    /// non-object. Waits for an in-flight advance to finish first.
    pub async fn execute(&self, value: Option<serde_json::Value>) -> Result<GameState, LoadError> {
        let value = value.ok_or_else(|| LoadError::InvalidState("no state supplied".into()))?;
        let state = GameState::from_json(value).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected game state");
        })?;

        let turn = self.store.begin_turn().await;
        turn.commit(state.clone()).await;

        tracing::info!(
            choices = state.choices.len(),
            turns = state.history.len(),
            "Game state loaded"
        );
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_replaces_state() {
        let store = Arc::new(GameStateStore::seeded());
        let loaded = LoadState::new(store.clone())
            .execute(Some(json!({
                "content": "A cave.",
                "choices": ["Enter", "Leave"],
                "history": [{ "content": "Forest.", "choices": ["Go north"], "choiceMade": "Go north" }]
            })))
            .await
            .unwrap();

        assert_eq!(loaded.content, "A cave.");
        assert_eq!(loaded.history[0].choice_made, "Go north");
        assert_eq!(store.snapshot().await, loaded);
    }

    #[tokio::test]
    async fn test_saved_state_round_trips() {
        let mut original = GameState::new("Marsh.", vec!["Wade".into(), "Wait".into()]);
        original.history.push(rpgpt_domain::HistoryEntry {
            content: "Forest.".into(),
            choices: vec!["Go east".into()],
            choice_made: "Go east".into(),
        });
        let saved = serde_json::to_value(&original).unwrap();

        let store = Arc::new(GameStateStore::seeded());
        LoadState::new(store.clone()).execute(Some(saved)).await.unwrap();

        assert_eq!(store.snapshot().await, original);
    }

    #[tokio::test]
    async fn test_rejects_missing_and_non_object_state() {
        let store = Arc::new(GameStateStore::seeded());
        let load = LoadState::new(store.clone());

        for value in [None, Some(json!("state")), Some(json!(null)), Some(json!([1, 2]))] {
            assert!(matches!(
                load.execute(value).await,
                Err(LoadError::InvalidState(_))
            ));
        }
        assert_eq!(store.snapshot().await, GameState::seed());
    }

    #[tokio::test]
    async fn test_rejects_choices_that_are_not_strings() {
        let store = Arc::new(GameStateStore::seeded());

        let result = LoadState::new(store.clone())
            .execute(Some(json!({ "content": "A cave.", "choices": [1, 2] })))
            .await;

        assert!(matches!(result, Err(LoadError::InvalidState(_))));
        assert_eq!(store.snapshot().await, GameState::seed());
    }
}
