//! Completion reply parsing
//!
//! The completion service is asked to answer in a fixed plain-text layout:
//!
//! ```text
//! Story: <next part of the story>
//! Choices:
//! 1. <choice 1>
//! 2. <choice 2>
//! ```
//!
//! The reply is best-effort text, so this module locates the two section
//! markers by plain search and salvages whatever numbered lines it can.
//!
//! # Example
//!
//! ```
//! use rpgpt_domain::parse_story_reply;
//!
//! let beat = parse_story_reply("Story: A wolf howls.\nChoices:\n1. Hide\n2. Run").unwrap();
//! assert_eq!(beat.content, "A wolf howls.");
//! assert_eq!(beat.choices, vec!["Hide", "Run"]);
//! ```

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker that opens the story section of a reply.
pub const STORY_MARKER: &str = "Story:";

/// Marker that opens the choices section of a reply.
pub const CHOICES_MARKER: &str = "Choices:";

/// Line prefixes accepted as choice lines (after trimming).
const CHOICE_LINE_PREFIXES: [&str; 4] = ["1.", "2.", "3.", "4."];

static CHOICE_NUMBER_REGEX: OnceLock<regex_lite::Regex> = OnceLock::new();

/// The next story beat extracted from a completion reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryBeat {
    /// Narrative text for the new current state
    pub content: String,
    /// Options offered to the player, in reply order
    pub choices: Vec<String>,
}

/// Why a completion reply could not be turned into a [`StoryBeat`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoryParseError {
    /// The reply lacks the `Story:` or `Choices:` marker
    #[error("completion reply is missing the Story:/Choices: layout")]
    MalformedModelResponse,

    /// The choices section held no usable numbered line
    #[error("completion reply produced no usable choices")]
    NoChoicesProduced,
}

/// Parse a raw completion reply into a story beat.
///
/// The story text runs from `Story:` up to the `Choices:` marker (or to the end
/// of the reply when `Choices:` comes first). Choice lines are the lines after
/// `Choices:` that start with `1.` through `4.`; their number prefix is removed
/// and blank results are dropped.
pub fn parse_story_reply(reply: &str) -> Result<StoryBeat, StoryParseError> {
    let text = reply.trim();

    let story_start = text
        .find(STORY_MARKER)
        .ok_or(StoryParseError::MalformedModelResponse)?;
    let choices_start = text
        .find(CHOICES_MARKER)
        .ok_or(StoryParseError::MalformedModelResponse)?;

    let story_body = &text[story_start + STORY_MARKER.len()..];
    let story = if choices_start > story_start {
        &text[story_start + STORY_MARKER.len()..choices_start]
    } else {
        story_body
    };

    let choices = parse_choice_lines(&text[choices_start + CHOICES_MARKER.len()..]);
    if choices.is_empty() {
        return Err(StoryParseError::NoChoicesProduced);
    }

    Ok(StoryBeat {
        content: story.trim().to_string(),
        choices,
    })
}

fn parse_choice_lines(section: &str) -> Vec<String> {
    let re = CHOICE_NUMBER_REGEX.get_or_init(|| {
        regex_lite::Regex::new(r"^\d+\.\s*").expect("CHOICE_NUMBER_REGEX pattern is invalid")
    });

    section
        .lines()
        .map(str::trim)
        .filter(|line| CHOICE_LINE_PREFIXES.iter().any(|p| line.starts_with(p)))
        .map(|line| re.replace(line, "").trim().to_string())
        .filter(|choice| !choice.is_empty())
        .collect()
}
