use anyhow::{anyhow, Result};

use crate::domain::{ResultState, UpdatePolicy};

use super::super::Container;

/// One-shot form submission: set the query, trigger once, report the result.
pub struct OptimizeController<'a> {
    container: &'a Container,
}

impl<'a> OptimizeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn optimize(&self, query: String) -> Result<String> {
        let form = self
            .container
            .query_form_use_case(UpdatePolicy::LatestIssuedOnly);

        form.set_query(query);
        form.submit().await;

        match form.result() {
            ResultState::Success(result) => Ok(result.into_text()),
            ResultState::Error(message) => Err(anyhow!(message)),
            ResultState::Idle => Err(anyhow!("no response received from relay")),
        }
    }
}
