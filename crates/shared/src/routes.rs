//! HTTP route paths served by the engine.

pub const HEALTH: &str = "/api/health";
pub const STATE: &str = "/api/state";
pub const CHOICE: &str = "/api/choice";
pub const SAVE: &str = "/api/save";
pub const LOAD: &str = "/api/load";

/// File name suggested to browsers when downloading a save.
pub const SAVE_FILE_NAME: &str = "gameState.json";
