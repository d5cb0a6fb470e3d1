//! Application state and composition.

use std::sync::Arc;

use crate::config::{LlmConfig, DEFAULT_MAX_TOKENS};
use crate::infrastructure::ports::LlmPort;
use crate::prompt_templates::StoryPrompt;
use crate::stores::GameStateStore;
use crate::use_cases;

/// Main application state.
///
/// Holds the use cases, all sharing one game state store.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub story: use_cases::StoryUseCases,
}

/// Generation settings applied to every story turn.
#[derive(Debug, Clone)]
pub struct StorySettings {
    pub prompt: StoryPrompt,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

impl StorySettings {
    pub fn from_config(config: &LlmConfig, prompt: StoryPrompt) -> Self {
        Self {
            prompt,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            prompt: StoryPrompt::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
        }
    }
}

impl App {
    /// Wire the use cases around `store` and `llm`.
    pub fn new(llm: Arc<dyn LlmPort>, store: Arc<GameStateStore>, settings: StorySettings) -> Self {
        let get_state = Arc::new(use_cases::story::GetState::new(store.clone()));
        let save = Arc::new(use_cases::story::SaveState::new(store.clone()));
        let load = Arc::new(use_cases::story::LoadState::new(store.clone()));
        let advance = Arc::new(
            use_cases::story::AdvanceStory::new(store, llm, settings.prompt)
                .with_max_tokens(settings.max_tokens)
                .with_temperature(settings.temperature),
        );

        let use_cases = UseCases {
            story: use_cases::StoryUseCases::new(get_state, advance, save, load),
        };

        Self { use_cases }
    }
}
