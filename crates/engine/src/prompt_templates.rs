//! Configurable LLM prompt templates used by the engine.
//!
//! Each template has a key, a hard-coded default, and an environment variable
//! override named after the key (`story.turn` -> `RPGPT_PROMPT_STORY_TURN`).

/// All prompt template keys as constants.
pub mod keys {
    /// Prompt sent to the model for every story turn.
    pub const STORY_TURN: &str = "story.turn";
}

/// Default values for all prompt templates.
pub mod defaults {
    /// Turn prompt. `{choice}` is the option the player picked and
    /// `{content}` the narrative text currently on screen.
    pub const STORY_TURN: &str = r#"The player has chosen: "{choice}". Current game state: "{content}". Respond with the next part of the story and a list of 2-4 choices. Format your response as:
Story: <new content>
Choices:
1. <choice 1>
2. <choice 2>
(add up to 4 choices)"#;
}

/// Convert a template key to its environment variable name.
pub fn key_to_env_var(key: &str) -> String {
    format!("RPGPT_PROMPT_{}", key.to_uppercase().replace('.', "_"))
}

/// The resolved turn prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryPrompt {
    template: String,
}

impl StoryPrompt {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Resolve the template from the environment, falling back to the default.
    pub fn from_env() -> Self {
        Self::resolve(|var| std::env::var(var).ok())
    }

    /// Resolve the template through `lookup`; blank overrides are ignored.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_var = key_to_env_var(keys::STORY_TURN);
        match lookup(&env_var).filter(|v| !v.trim().is_empty()) {
            Some(template) => {
                tracing::info!(env_var = %env_var, "Using prompt template override");
                Self::new(template)
            }
            None => Self::default(),
        }
    }

    /// Fill in the chosen option and the current narrative text.
    pub fn render(&self, choice: &str, content: &str) -> String {
        // Substitute `{content}` last so story text containing "{choice}" is left alone.
        self.template
            .replace("{choice}", choice)
            .replace("{content}", content)
    }
}

impl Default for StoryPrompt {
    fn default() -> Self {
        Self::new(defaults::STORY_TURN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_to_env_var() {
        assert_eq!(key_to_env_var("story.turn"), "RPGPT_PROMPT_STORY_TURN");
    }

    #[test]
    fn test_default_render() {
        let prompt = StoryPrompt::default().render("Go north", "A dark forest.");

        assert!(prompt.starts_with(
            r#"The player has chosen: "Go north". Current game state: "A dark forest.""#
        ));
        assert!(prompt.contains("\nStory: <new content>\nChoices:\n1. <choice 1>"));
        assert!(prompt.ends_with("(add up to 4 choices)"));
    }

    #[test]
    fn test_render_does_not_expand_placeholders_inside_content() {
        let prompt = StoryPrompt::new("{choice}|{content}").render("Wait", "Sign reads {choice}");
        assert_eq!(prompt, "Wait|Sign reads {choice}");
    }

    #[test]
    fn test_resolve_prefers_env_override() {
        let prompt = StoryPrompt::resolve(|var| {
            (var == "RPGPT_PROMPT_STORY_TURN").then(|| "Chose {choice}".to_string())
        });
        assert_eq!(prompt.render("Swim", "River"), "Chose Swim");
    }

    #[test]
    fn test_resolve_ignores_blank_override() {
        let prompt = StoryPrompt::resolve(|_| Some("   ".to_string()));
        assert_eq!(prompt, StoryPrompt::default());
    }
}
