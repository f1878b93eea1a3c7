use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use super::super::http::{build_app, serve, shutdown_signal};
use super::super::Container;

pub struct ServeController<'a> {
    container: &'a Container,
}

impl<'a> ServeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn serve(&self) -> Result<String> {
        let config = self.container.config();
        config.validate_for_serving()?;

        let address = config.bind_address();
        info!("Binding to {address}");
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {address}"))?;

        let app = build_app(self.container.optimize_use_case());
        serve(listener, app, shutdown_signal()).await?;

        Ok("Server shutting down...".to_string())
    }
}
