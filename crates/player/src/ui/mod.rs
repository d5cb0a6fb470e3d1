//! Dioxus UI for the desktop player.

pub mod app;
pub mod services;
pub mod state;

pub use app::{app, STYLES};
pub use services::Services;
pub use state::{Controls, StoryViewState};
