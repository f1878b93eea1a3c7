pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{CompletionProvider, OptimizeSearchUseCase, QueryFormUseCase, RelayClient};

pub use connector::{
    ConfigError, ConfigOverrides, Container, HttpRelayClient, MockCompletion,
    OpenAiCompletionClient, RelayConfig, Router,
};

pub use domain::{
    ApplyOutcome, CompletionRequest, DomainError, OptimizationResult, PromptTemplate, Query,
    QueryForm, RequestTicket, ResultState, UpdatePolicy,
};
