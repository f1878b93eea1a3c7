//! # Domain Layer
//!
//! Queries, completion payloads, prompt templating and the Query Form's
//! display state. Nothing in here performs I/O.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
