//! RPGPT Player crate.
//!
//! Desktop client for the RPGPT engine: UI, application logic, and
//! infrastructure adapters.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::app;
