use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::application::RelayClient;
use crate::domain::{ApplyOutcome, QueryForm, ResultState, UpdatePolicy};

/// Drives a [`QueryForm`] against a [`RelayClient`].
///
/// Cheap to clone; clones share the same form state, so several submissions
/// can be in flight at once. The lock is never held across an `.await`.
#[derive(Clone)]
pub struct QueryFormUseCase {
    relay: Arc<dyn RelayClient>,
    form: Arc<Mutex<QueryForm>>,
}

impl QueryFormUseCase {
    pub fn new(relay: Arc<dyn RelayClient>, policy: UpdatePolicy) -> Self {
        Self {
            relay,
            form: Arc::new(Mutex::new(QueryForm::new(policy))),
        }
    }

    pub fn set_query(&self, text: impl Into<String>) {
        self.lock().set_query(text);
    }

    /// Trigger action. The request is issued for the query as it is *now*;
    /// the returned future only waits for the relay and applies the response.
    pub fn submit(&self) -> impl Future<Output = ApplyOutcome> + Send + 'static {
        let (ticket, query) = self.lock().issue();
        let relay = Arc::clone(&self.relay);
        let form = Arc::clone(&self.form);

        async move {
            let response = match relay.optimize(&query).await {
                Ok(result) => Ok(result),
                Err(e) => {
                    warn!("Error fetching optimized results for request {ticket}: {e}");
                    Err(format!("Request failed: {e}"))
                }
            };

            let outcome = lock(&form).apply(ticket, response);
            if outcome == ApplyOutcome::Stale {
                debug!("Discarding stale response for request {ticket}");
            }
            outcome
        }
    }

    pub fn render(&self) -> String {
        self.lock().render()
    }

    pub fn result_area(&self) -> String {
        self.lock().result_area()
    }

    pub fn result(&self) -> ResultState {
        self.lock().result().clone()
    }

    fn lock(&self) -> MutexGuard<'_, QueryForm> {
        lock(&self.form)
    }
}

fn lock(form: &Mutex<QueryForm>) -> MutexGuard<'_, QueryForm> {
    form.lock().unwrap_or_else(PoisonError::into_inner)
}
