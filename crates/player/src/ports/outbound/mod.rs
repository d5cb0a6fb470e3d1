//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to talk to the engine without depending on
//! a concrete HTTP client.

pub mod api_port;
pub mod raw_api_port;

pub use api_port::ApiError;
pub use raw_api_port::RawApiPort;

#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
