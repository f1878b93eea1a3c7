pub mod config;
pub mod container;
pub mod controller;
pub mod http;
pub mod router;

pub use config::{ConfigError, ConfigOverrides, RelayConfig};
pub use container::Container;
pub use router::Router;
