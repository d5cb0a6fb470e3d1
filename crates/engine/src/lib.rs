//! RPGPT Engine library.
//!
//! This crate contains all server-side code for the RPGPT story engine.
//!
//! ## Structure
//!
//! - `stores/` - The in-memory game state and its turn lock
//! - `use_cases/` - Story operations (get, advance, save, load)
//! - `infrastructure/` - Completion service port, OpenAI client, retry wrapper
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration
//! - `prompt_templates` - Overridable LLM prompts

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod prompt_templates;
pub mod stores;
pub mod use_cases;

pub use app::App;
