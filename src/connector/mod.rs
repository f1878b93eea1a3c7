//! # Connector Layer
//!
//! External integrations implementing the application ports:
//! - Completion providers (OpenAI text completions, offline mock)
//! - Relay client used by the Query Form
//! - The relay's HTTP API, configuration and command dispatch

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
