//! Read-only access to the current game state.

use std::sync::Arc;

use rpgpt_domain::GameState;

use crate::stores::GameStateStore;

/// Return the current state verbatim.
pub struct GetState {
    store: Arc<GameStateStore>,
}

impl GetState {
    pub fn new(store: Arc<GameStateStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> GameState {
        self.store.snapshot().await
    }
}

/// Export the current state for writing to a save file.
///
/// Same data as [`GetState`]; the HTTP layer marks the response as a download.
pub struct SaveState {
    store: Arc<GameStateStore>,
}

impl SaveState {
    pub fn new(store: Arc<GameStateStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> GameState {
        let state = self.store.snapshot().await;
        tracing::debug!(turns = state.history.len(), "Exporting game state");
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_and_save_return_the_same_state() {
        let state = GameState::new("A cave.", vec!["Enter".into(), "Leave".into()]);
        let store = Arc::new(GameStateStore::new(state.clone()));

        assert_eq!(GetState::new(store.clone()).execute().await, state);
        assert_eq!(SaveState::new(store).execute().await, state);
    }
}
