//! In-memory state storage modules.
//!
//! Stores manage runtime state that lives only as long as the engine process:
//! - `GameStateStore` - the current game state and its turn lock

pub mod game_state;

pub use game_state::{GameStateStore, TurnGuard};
