use anyhow::Result;

use crate::domain::UpdatePolicy;
use crate::Commands;

use super::container::Container;
use super::controller::{FormController, OptimizeController, ServeController};

pub struct Router<'a> {
    serve_controller: ServeController<'a>,
    optimize_controller: OptimizeController<'a>,
    form_controller: FormController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            serve_controller: ServeController::new(container),
            optimize_controller: OptimizeController::new(container),
            form_controller: FormController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Serve => self.serve_controller.serve().await,
            Commands::Optimize { query } => self.optimize_controller.optimize(query).await,
            Commands::Form { last_resolved_wins } => {
                let policy = if last_resolved_wins {
                    UpdatePolicy::LastResolvedWins
                } else {
                    UpdatePolicy::LatestIssuedOnly
                };
                self.form_controller.run(policy).await
            }
        }
    }
}
