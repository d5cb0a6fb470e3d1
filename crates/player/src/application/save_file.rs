//! Save files on the player's machine.
//!
//! Two layouts share the `.json` extension:
//! - a local save, `{content, choices}`, written and read entirely client-side
//! - a full [`GameState`] exported by the engine's save endpoint, which is
//!   handed back to the engine untouched when loaded

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rpgpt_domain::GameState;

#[derive(Debug, thiserror::Error)]
pub enum SaveFileError {
    #[error("Save file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Save file is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What the player keeps in a local save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub content: String,
    pub choices: Vec<String>,
}

impl SaveFile {
    pub fn new(content: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            content: content.into(),
            choices,
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<(), SaveFileError> {
        write_pretty(path, self)
    }

    pub fn read_from(path: &Path) -> Result<Self, SaveFileError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl From<&GameState> for SaveFile {
    fn from(state: &GameState) -> Self {
        Self::new(state.content.clone(), state.choices.clone())
    }
}

/// Write a full engine state export.
pub fn write_game_state(path: &Path, state: &GameState) -> Result<(), SaveFileError> {
    write_pretty(path, state)
}

/// Read any JSON document; the engine decides whether it is a valid state.
pub fn read_json(path: &Path) -> Result<serde_json::Value, SaveFileError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), SaveFileError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_local_save_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gameState.json");
        let save = SaveFile::new("A cave.", vec!["Enter".into(), "Leave".into()]);

        save.write_to(&path).unwrap();

        assert_eq!(SaveFile::read_from(&path).unwrap(), save);
    }

    #[test]
    fn test_local_save_only_has_content_and_choices() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");
        let mut state = GameState::seed();
        state.history.push(rpgpt_domain::HistoryEntry {
            content: "Before.".into(),
            choices: vec!["Wait".into()],
            choice_made: "Wait".into(),
        });

        SaveFile::from(&state).write_to(&path).unwrap();

        let value = read_json(&path).unwrap();
        assert_eq!(value["content"], state.content.as_str());
        assert!(value.get("history").is_none());
    }

    #[test]
    fn test_local_save_reads_full_state_files_too() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("server.json");
        write_game_state(&path, &GameState::seed()).unwrap();

        let save = SaveFile::read_from(&path).unwrap();
        assert_eq!(save.choices, vec!["Go north", "Go east"]);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"content": "x", "choices": "nope"}"#).unwrap();

        assert!(matches!(
            SaveFile::read_from(&path),
            Err(SaveFileError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            SaveFile::read_from(&dir.path().join("absent.json")),
            Err(SaveFileError::Io(_))
        ));
    }
}
