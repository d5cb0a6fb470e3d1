//! Services provided to components through Dioxus context.

use std::sync::Arc;

use crate::application::StoryService;

#[derive(Clone)]
pub struct Services {
    pub story: Arc<StoryService>,
}

impl Services {
    pub fn new(story: Arc<StoryService>) -> Self {
        Self { story }
    }
}
