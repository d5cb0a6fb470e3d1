//! RPGPT Domain - game state and story beat types shared by engine and player.

extern crate self as rpgpt_domain;

pub mod error;
pub mod game_state;
pub mod story_reply;

pub use error::DomainError;
pub use game_state::{GameState, HistoryEntry, SEED_CHOICES, SEED_CONTENT};
pub use story_reply::{parse_story_reply, StoryBeat, StoryParseError, CHOICES_MARKER, STORY_MARKER};
