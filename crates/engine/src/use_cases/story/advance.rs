//! Advance story use case.
//!
//! Applies the player's choice: asks the completion service for the next beat,
//! parses it, and replaces the current state, recording the previous one in
//! history. Any failure leaves the state as it was.

use std::sync::Arc;

use rpgpt_domain::{parse_story_reply, GameState, StoryParseError};

use crate::config::DEFAULT_MAX_TOKENS;
use crate::infrastructure::ports::{FinishReason, LlmError, LlmPort, LlmRequest};
use crate::prompt_templates::StoryPrompt;
use crate::stores::GameStateStore;

#[derive(Debug, thiserror::Error)]
pub enum AdvanceError {
    #[error("Choice {0:?} is not on offer")]
    InvalidChoice(String),
    #[error("Unusable completion reply: {0}")]
    Parse(#[from] StoryParseError),
    #[error("Completion service error: {0}")]
    Llm(#[from] LlmError),
}

/// Advance story use case.
pub struct AdvanceStory {
    store: Arc<GameStateStore>,
    llm: Arc<dyn LlmPort>,
    prompt: StoryPrompt,
    max_tokens: u32,
    temperature: Option<f32>,
}

impl AdvanceStory {
    pub fn new(store: Arc<GameStateStore>, llm: Arc<dyn LlmPort>, prompt: StoryPrompt) -> Self {
        Self {
            store,
            llm,
            prompt,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Apply `choice` and return the new state.
    ///
    /// The turn lock is held for the whole call, so a second advance or a load
    /// waits for this one to finish. Readers are not blocked.
    pub async fn execute(&self, choice: &str) -> Result<GameState, AdvanceError> {
        let turn = self.store.begin_turn().await;
        let mut state = turn.current().await;

        if !state.offers(choice) {
            tracing::warn!(choice = %choice, offered = ?state.choices, "Rejected choice");
            return Err(AdvanceError::InvalidChoice(choice.to_string()));
        }

        let request = LlmRequest::new(self.prompt.render(choice, &state.content))
            .with_max_tokens(Some(self.max_tokens))
            .with_temperature(self.temperature);

        tracing::info!(choice = %choice, turn = state.history.len() + 1, "Requesting next story beat");
        let response = self.llm.generate(request).await?;

        if let Some(usage) = response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion usage"
            );
        }
        if response.finish_reason == FinishReason::Length {
            tracing::debug!("Completion hit the token limit; parsing what arrived");
        }

        let beat = parse_story_reply(&response.content).inspect_err(|e| {
            tracing::debug!(error = %e, reply = %response.content, "Completion reply did not parse");
        })?;

        state
            .advance(choice, beat)
            .map_err(|_| AdvanceError::InvalidChoice(choice.to_string()))?;

        tracing::info!(
            choices = state.choices.len(),
            turns = state.history.len(),
            "Story advanced"
        );
        turn.commit(state.clone()).await;
        Ok(state)
    }
}
