use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::warn;

use crate::domain::{ApplyOutcome, UpdatePolicy};

use super::super::Container;

const HELP: &str = "\
Type a search query and press Enter to optimize it.
  :go    re-submit the current query
  :show  redraw the form
  :quit  exit (waits for pending requests)";

/// Interactive terminal rendition of the Query Form.
///
/// Each submission runs in its own task, so a new query can be entered while
/// earlier ones are still pending; the form redraws whenever a response is
/// applied.
pub struct FormController<'a> {
    container: &'a Container,
}

impl<'a> FormController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn run(&self, policy: UpdatePolicy) -> Result<String> {
        self.run_with(policy, BufReader::new(tokio::io::stdin())).await
    }

    /// Drive the form from any line source. Returns the final rendering once
    /// input ends and every pending submission has resolved.
    pub async fn run_with<R>(&self, policy: UpdatePolicy, input: R) -> Result<String>
    where
        R: AsyncBufRead + Unpin,
    {
        let form = self.container.query_form_use_case(policy);
        let mut lines = input.lines();
        let mut in_flight = JoinSet::new();

        println!("{HELP}\n");
        println!("{}", form.render());

        while let Some(line) = lines.next_line().await? {
            match line.trim() {
                ":quit" | ":q" => break,
                ":show" => {
                    println!("{}", form.render());
                    continue;
                }
                ":go" => {}
                _ => form.set_query(line.clone()),
            }

            let pending = form.submit();
            let view = form.clone();
            in_flight.spawn(async move {
                if pending.await == ApplyOutcome::Applied {
                    println!("\n{}", view.render());
                }
            });
        }

        while let Some(joined) = in_flight.join_next().await {
            if let Err(e) = joined {
                warn!("Form submission task failed: {e}");
            }
        }

        Ok(form.render())
    }
}
