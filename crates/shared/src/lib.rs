//! RPGPT Shared - Wire types for Engine and Player communication
//!
//! This crate contains the JSON bodies exchanged over the HTTP API:
//! - Request DTOs (`ChoiceRequest`, `LoadRequest`)
//! - Response DTOs (`LoadResponse`, `ErrorResponse`)
//! - Route paths and fixed client-facing messages
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, and the domain types
//! 2. **No business logic** - Pure data types and serialization

pub mod requests;
pub mod responses;
pub mod routes;

pub use requests::{ChoiceRequest, LoadRequest};
pub use responses::{messages, ErrorResponse, LoadResponse};

// The game state travels over the wire exactly as the domain defines it.
pub use rpgpt_domain::{GameState, HistoryEntry};
