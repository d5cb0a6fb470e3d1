//! Display-time cleanup of story text.

use rpgpt_domain::CHOICES_MARKER;

/// Cut `content` at the first `Choices:` marker, if any.
///
/// The choices block belongs in the buttons, not the story panel, so a reply
/// that leaked it into the narrative is trimmed before display.
pub fn filter_content(content: &str) -> &str {
    match content.find(CHOICES_MARKER) {
        Some(index) => &content[..index],
        None => content,
    }
}
