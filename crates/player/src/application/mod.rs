//! Application layer: engine services and client-side story logic.

pub mod content_filter;
pub mod save_file;
pub mod services;
pub mod typewriter;

pub use content_filter::filter_content;
pub use save_file::{SaveFile, SaveFileError};
pub use services::StoryService;
