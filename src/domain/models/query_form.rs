use std::fmt;

use super::{OptimizationResult, Query};

/// How the form reacts to responses that resolve in a different order than
/// they were issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Every resolving response overwrites the result; failures are only
    /// logged and leave the previous result on screen.
    LastResolvedWins,
    /// Only the response to the most recently issued request is applied;
    /// failures replace the result with an error message.
    #[default]
    LatestIssuedOnly,
}

/// Sequence number attached to each trigger action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultState {
    #[default]
    Idle,
    Success(OptimizationResult),
    Error(String),
}

/// What [`QueryForm::apply`] did with a resolved response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer request has been issued since this one.
    Stale,
    /// Failure swallowed under [`UpdatePolicy::LastResolvedWins`].
    Ignored,
}

/// State behind the search form: the text being edited and the last result
/// shown.
#[derive(Debug, Clone, Default)]
pub struct QueryForm {
    query: Query,
    result: ResultState,
    policy: UpdatePolicy,
    issued: u64,
}

impl QueryForm {
    pub fn new(policy: UpdatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = Query::new(text);
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn result(&self) -> &ResultState {
        &self.result
    }

    /// Start a request for the current query. The returned query is a
    /// snapshot; later edits do not affect the in-flight request.
    pub fn issue(&mut self) -> (RequestTicket, Query) {
        self.issued += 1;
        (RequestTicket(self.issued), self.query.clone())
    }

    pub fn latest_ticket(&self) -> Option<RequestTicket> {
        (self.issued > 0).then_some(RequestTicket(self.issued))
    }

    pub fn apply(
        &mut self,
        ticket: RequestTicket,
        response: Result<OptimizationResult, String>,
    ) -> ApplyOutcome {
        match self.policy {
            UpdatePolicy::LastResolvedWins => match response {
                Ok(result) => {
                    self.result = ResultState::Success(result);
                    ApplyOutcome::Applied
                }
                Err(_) => ApplyOutcome::Ignored,
            },
            UpdatePolicy::LatestIssuedOnly => {
                if ticket.0 != self.issued {
                    return ApplyOutcome::Stale;
                }
                self.result = match response {
                    Ok(result) => ResultState::Success(result),
                    Err(message) => ResultState::Error(message),
                };
                ApplyOutcome::Applied
            }
        }
    }

    /// Contents of the result area, exactly as displayed.
    pub fn result_area(&self) -> String {
        match &self.result {
            ResultState::Idle => String::new(),
            ResultState::Success(result) => result.text().to_string(),
            ResultState::Error(message) => format!("Error: {message}"),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "Search query: {}\n[Optimize Search]\n{}",
            self.query,
            self.result_area()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(text: &str) -> Result<OptimizationResult, String> {
        Ok(OptimizationResult::new(text))
    }

    #[test]
    fn starts_idle_with_empty_query() {
        let form = QueryForm::new(UpdatePolicy::default());
        assert_eq!(form.result(), &ResultState::Idle);
        assert!(form.query().is_empty());
        assert_eq!(form.result_area(), "");
        assert_eq!(form.latest_ticket(), None);
    }

    #[test]
    fn issue_snapshots_the_query() {
        let mut form = QueryForm::new(UpdatePolicy::LatestIssuedOnly);
        form.set_query("cats");
        let (ticket, query) = form.issue();
        form.set_query("dogs");

        assert_eq!(query.as_str(), "cats");
        assert_eq!(ticket.sequence(), 1);
        assert_eq!(form.query().as_str(), "dogs");
    }

    #[test]
    fn tickets_increase_monotonically() {
        let mut form = QueryForm::default();
        let (a, _) = form.issue();
        let (b, _) = form.issue();
        assert!(b > a);
        assert_eq!(form.latest_ticket(), Some(b));
    }

    #[test]
    fn success_is_rendered_verbatim() {
        let mut form = QueryForm::new(UpdatePolicy::LatestIssuedOnly);
        form.set_query("cats");
        let (ticket, _) = form.issue();

        assert_eq!(form.apply(ticket, ok("Top cats results...")), ApplyOutcome::Applied);
        assert_eq!(form.result_area(), "Top cats results...");
        assert!(form.render().contains("Search query: cats"));
        assert!(form.render().ends_with("Top cats results..."));
    }

    #[test]
    fn last_resolved_wins_lets_a_late_stale_response_overwrite() {
        let mut form = QueryForm::new(UpdatePolicy::LastResolvedWins);
        form.set_query("A");
        let (a, _) = form.issue();
        form.set_query("B");
        let (b, _) = form.issue();

        form.apply(b, ok("result B"));
        form.apply(a, ok("result A"));

        assert_eq!(form.result_area(), "result A");
    }

    #[test]
    fn last_resolved_wins_keeps_previous_result_on_failure() {
        let mut form = QueryForm::new(UpdatePolicy::LastResolvedWins);
        let (first, _) = form.issue();
        form.apply(first, ok("kept"));
        let (second, _) = form.issue();

        assert_eq!(
            form.apply(second, Err("boom".to_string())),
            ApplyOutcome::Ignored
        );
        assert_eq!(form.result_area(), "kept");
    }

    #[test]
    fn latest_issued_only_discards_stale_responses() {
        let mut form = QueryForm::new(UpdatePolicy::LatestIssuedOnly);
        form.set_query("A");
        let (a, _) = form.issue();
        form.set_query("B");
        let (b, _) = form.issue();

        assert_eq!(form.apply(b, ok("result B")), ApplyOutcome::Applied);
        assert_eq!(form.apply(a, ok("result A")), ApplyOutcome::Stale);
        assert_eq!(form.result_area(), "result B");
    }

    #[test]
    fn latest_issued_only_surfaces_failures() {
        let mut form = QueryForm::new(UpdatePolicy::LatestIssuedOnly);
        let (first, _) = form.issue();
        form.apply(first, ok("old"));
        let (second, _) = form.issue();
        form.apply(second, Err("relay unreachable".to_string()));

        assert_eq!(
            form.result(),
            &ResultState::Error("relay unreachable".to_string())
        );
        assert_eq!(form.result_area(), "Error: relay unreachable");
    }
}
