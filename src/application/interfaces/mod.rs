mod completion_provider;
mod relay_client;

pub use completion_provider::*;
pub use relay_client::*;
