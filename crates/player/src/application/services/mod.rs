//! Application services.

pub mod story_service;

pub use story_service::StoryService;
