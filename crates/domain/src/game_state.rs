//! Game state aggregate
//!
//! The single record of where the story currently stands: the narrative text,
//! the options offered to the player, and an append-only log of the turns
//! already taken.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;
use crate::story_reply::StoryBeat;

/// Opening narrative shown before the first choice is made.
pub const SEED_CONTENT: &str =
    "You find yourself in a dark forest. Paths stretch out to the north and east.";

/// Opening choices offered alongside [`SEED_CONTENT`].
pub const SEED_CHOICES: [&str; 2] = ["Go north", "Go east"];

/// Snapshot of the state immediately before a choice was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub content: String,
    pub choices: Vec<String>,
    #[serde(rename = "choiceMade")]
    pub choice_made: String,
}

/// Current narrative text, available choices, and turn history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub content: String,
    pub choices: Vec<String>,
    /// A missing or `null` history loads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub history: Vec<HistoryEntry>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<HistoryEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<HistoryEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GameState {
    /// Create a state with the given content and choices and no history.
    pub fn new(content: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            content: content.into(),
            choices,
            history: Vec::new(),
        }
    }

    /// The opening state of every new game.
    pub fn seed() -> Self {
        Self::new(
            SEED_CONTENT,
            SEED_CHOICES.iter().map(|c| c.to_string()).collect(),
        )
    }

    /// Build a state from an untrusted JSON value.
    ///
    /// The value must be an object with a string `content`, an array of
    /// strings `choices`, and optionally a well-formed `history` array.
    pub fn from_json(value: serde_json::Value) -> Result<Self, DomainError> {
        if !value.is_object() {
            return Err(DomainError::invalid_state("expected a JSON object"));
        }
        serde_json::from_value(value).map_err(|e| DomainError::invalid_state(e.to_string()))
    }

    /// Whether `choice` is one of the options currently on offer.
    pub fn offers(&self, choice: &str) -> bool {
        !choice.is_empty() && self.choices.iter().any(|c| c == choice)
    }

    /// Fail with [`DomainError::InvalidChoice`] unless `choice` is on offer.
    pub fn ensure_offers(&self, choice: &str) -> Result<(), DomainError> {
        if self.offers(choice) {
            Ok(())
        } else {
            Err(DomainError::invalid_choice(choice))
        }
    }

    /// Apply `choice`, moving the story on to `beat`.
    ///
    /// Records the pre-advance content and choices in history, then replaces
    /// them with the beat's. Nothing changes if the choice is not on offer.
    pub fn advance(&mut self, choice: &str, beat: StoryBeat) -> Result<(), DomainError> {
        self.ensure_offers(choice)?;

        let previous_content = std::mem::replace(&mut self.content, beat.content);
        let previous_choices = std::mem::replace(&mut self.choices, beat.choices);
        self.history.push(HistoryEntry {
            content: previous_content,
            choices: previous_choices,
            choice_made: choice.to_string(),
        });
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::seed()
    }
}
