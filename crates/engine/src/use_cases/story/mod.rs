//! Story use cases.
//!
//! The story flow is:
//! 1. Player reads the current state (GetState)
//! 2. Player picks one of the offered choices (AdvanceStory)
//! 3. The completion service writes the next beat, which replaces the state
//! 4. At any point the state can be exported (SaveState) or replaced (LoadState)

use std::sync::Arc;

mod advance;
mod load;
mod snapshot;

pub use advance::{AdvanceError, AdvanceStory};
pub use load::{LoadError, LoadState};
pub use snapshot::{GetState, SaveState};

/// Container for story use cases.
pub struct StoryUseCases {
    pub get_state: Arc<GetState>,
    pub advance: Arc<AdvanceStory>,
    pub save: Arc<SaveState>,
    pub load: Arc<LoadState>,
}

impl StoryUseCases {
    pub fn new(
        get_state: Arc<GetState>,
        advance: Arc<AdvanceStory>,
        save: Arc<SaveState>,
        load: Arc<LoadState>,
    ) -> Self {
        Self {
            get_state,
            advance,
            save,
            load,
        }
    }
}
