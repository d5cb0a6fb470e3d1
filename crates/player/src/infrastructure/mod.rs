//! Infrastructure adapters for the desktop player.

pub mod http_client;
pub mod platform;

pub use http_client::ApiAdapter;
