//! Game state storage for runtime state.
//!
//! Holds the one [`GameState`] the engine serves. Readers take a snapshot
//! under a read lock. Writers first take the turn lock through
//! [`GameStateStore::begin_turn`], so an advance that is waiting on the
//! completion service and a concurrent load cannot overwrite each other,
//! while readers keep seeing the last committed state.

use tokio::sync::{Mutex, MutexGuard, RwLock};

use rpgpt_domain::GameState;

pub struct GameStateStore {
    state: RwLock<GameState>,
    turn: Mutex<()>,
}

impl GameStateStore {
    pub fn new(initial: GameState) -> Self {
        Self {
            state: RwLock::new(initial),
            turn: Mutex::new(()),
        }
    }

    /// Store starting from the seed state.
    pub fn seeded() -> Self {
        Self::new(GameState::seed())
    }

    /// Clone of the last committed state.
    pub async fn snapshot(&self) -> GameState {
        self.state.read().await.clone()
    }

    /// Wait for exclusive write access. Held until the guard is dropped or committed.
    pub async fn begin_turn(&self) -> TurnGuard<'_> {
        let lock = self.turn.lock().await;
        TurnGuard { store: self, _lock: lock }
    }
}

impl Default for GameStateStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Exclusive write access to a [`GameStateStore`].
pub struct TurnGuard<'a> {
    store: &'a GameStateStore,
    _lock: MutexGuard<'a, ()>,
}

impl TurnGuard<'_> {
    /// State as of the start of this turn. Stable while the guard is held.
    pub async fn current(&self) -> GameState {
        self.store.snapshot().await
    }

    /// Replace the whole state and release the turn.
    pub async fn commit(self, state: GameState) {
        *self.store.state.write().await = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpgpt_domain::StoryBeat;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_starts_from_seed() {
        let store = GameStateStore::default();
        assert_eq!(store.snapshot().await, GameState::seed());
    }

    #[tokio::test]
    async fn test_commit_replaces_state() {
        let store = GameStateStore::seeded();
        let next = GameState::new("A cave.", vec!["Enter".into()]);

        let turn = store.begin_turn().await;
        turn.commit(next.clone()).await;

        assert_eq!(store.snapshot().await, next);
    }

    #[tokio::test]
    async fn test_dropped_turn_leaves_state_untouched() {
        let store = GameStateStore::seeded();
        {
            let turn = store.begin_turn().await;
            let mut state = turn.current().await;
            state
                .advance(
                    "Go north",
                    StoryBeat {
                        content: "Hills.".into(),
                        choices: vec!["Climb".into()],
                    },
                )
                .unwrap();
        }
        assert_eq!(store.snapshot().await, GameState::seed());
    }

    #[tokio::test]
    async fn test_readers_do_not_wait_for_an_open_turn() {
        let store = GameStateStore::seeded();
        let _turn = store.begin_turn().await;

        let snapshot = tokio::time::timeout(Duration::from_millis(100), store.snapshot())
            .await
            .expect("snapshot blocked behind the turn lock");
        assert_eq!(snapshot, GameState::seed());
    }

    #[tokio::test]
    async fn test_turns_are_serialized() {
        let store = Arc::new(GameStateStore::seeded());
        let first = store.begin_turn().await;

        let waiter = {
            let store = store.clone();
            tokio::spawn(async move {
                let turn = store.begin_turn().await;
                let seen = turn.current().await;
                turn.commit(GameState::new("second", vec![])).await;
                seen
            })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        first.commit(GameState::new("first", vec![])).await;

        let seen_by_second = waiter.await.unwrap();
        assert_eq!(seen_by_second.content, "first");
        assert_eq!(store.snapshot().await.content, "second");
    }
}
