//! Story view state with typewriter effect
//!
//! Holds what the story panel and choice buttons show, and drives the
//! character-by-character reveal of newly generated content.

use std::time::Duration;

use dioxus::prelude::*;

use crate::application::typewriter::{reveal_prefixes, REVEAL_INTERVAL_MS};

/// Story state for the main view.
#[derive(Clone, Copy, PartialEq)]
pub struct StoryViewState {
    /// Full text of the current beat
    pub content: Signal<String>,
    /// Text currently on screen (typewriter progress)
    pub displayed_text: Signal<String>,
    /// Choice button labels
    pub choices: Signal<Vec<String>>,
    /// A choice has been submitted and no reply has arrived yet
    pub is_busy: Signal<bool>,
    /// Whether the typewriter is still animating
    pub is_typing: Signal<bool>,
    /// Incremented for every new beat; a running reveal stops when it changes
    pub reveal_version: Signal<u32>,
}

impl StoryViewState {
    /// Create the state with empty values. Call from `use_hook`.
    pub fn new() -> Self {
        Self {
            content: Signal::new(String::new()),
            displayed_text: Signal::new(String::new()),
            choices: Signal::new(Vec::new()),
            is_busy: Signal::new(false),
            is_typing: Signal::new(false),
            reveal_version: Signal::new(0),
        }
    }

    /// Show `content` at once, cancelling any reveal in progress.
    pub fn show(&mut self, content: String, choices: Vec<String>) {
        self.is_typing.set(false);
        self.displayed_text.set(content.clone());
        self.content.set(content);
        self.choices.set(choices);
        self.bump_version();
    }

    /// Clear the panel and reveal `content` one character at a time.
    /// The choices are replaced immediately.
    pub fn reveal(&mut self, content: String, choices: Vec<String>) {
        self.displayed_text.set(String::new());
        self.content.set(content);
        self.choices.set(choices);
        self.is_typing.set(true);
        self.bump_version();
    }

    /// Jump to the end of the current reveal.
    pub fn skip_reveal(&mut self) {
        let full = self.content.peek().clone();
        self.displayed_text.set(full);
        self.is_typing.set(false);
    }

    fn bump_version(&mut self) {
        let current = *self.reveal_version.peek();
        self.reveal_version.set(current.wrapping_add(1));
    }
}

/// Which controls accept input.
///
/// While a choice is in flight nothing may replace the state, since the reply
/// would overwrite it when it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub choose: bool,
    pub save: bool,
    pub load: bool,
}

impl Controls {
    pub fn for_busy(is_busy: bool) -> Self {
        Self {
            choose: !is_busy,
            save: true,
            load: !is_busy,
        }
    }
}

impl Default for StoryViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook for running the typewriter effect
///
/// Restarts whenever `reveal_version` changes. The spawned task exits early
/// if the reveal is skipped or superseded by a newer beat.
pub fn use_typewriter_effect(state: StoryViewState) {
    let StoryViewState {
        content,
        mut displayed_text,
        mut is_typing,
        reveal_version,
        ..
    } = state;

    use_effect(move || {
        // Reading the version subscribes this effect to it
        let started_version = *reveal_version.read();

        if !*is_typing.peek() {
            return;
        }
        let text = content.peek().clone();
        if text.is_empty() {
            is_typing.set(false);
            return;
        }

        spawn(async move {
            for prefix in reveal_prefixes(&text) {
                if !*is_typing.peek() || *reveal_version.peek() != started_version {
                    return;
                }
                displayed_text.set(prefix.to_string());
                tokio::time::sleep(Duration::from_millis(REVEAL_INTERVAL_MS)).await;
            }

            if *reveal_version.peek() == started_version {
                is_typing.set(false);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_choice_locks_choices_and_loads() {
        let controls = Controls::for_busy(true);

        assert!(!controls.choose);
        assert!(!controls.load);
        assert!(controls.save);
    }

    #[test]
    fn test_idle_view_enables_everything() {
        assert_eq!(
            Controls::for_busy(false),
            Controls {
                choose: true,
                save: true,
                load: true,
            }
        );
    }
}
