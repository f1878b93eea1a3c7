use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use search_optimizer::{Commands, ConfigOverrides, Container, RelayConfig, Router};

#[derive(Parser)]
#[command(name = "search-optimizer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Port for the relay to listen on [env: PORT] [default: 3001]
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Bind to 0.0.0.0 instead of 127.0.0.1
    #[arg(long, global = true)]
    public: bool,

    /// Completion provider base URL [env: OPENAI_BASE_URL]
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Completion model [env: OPENAI_MODEL] [default: text-davinci-003]
    #[arg(long, global = true)]
    model: Option<String>,

    /// Response-length cap sent to the provider [default: 150]
    #[arg(long, global = true)]
    max_tokens: Option<u32>,

    /// Give up on the provider after this many seconds [default: 30]
    #[arg(long, global = true)]
    upstream_timeout_secs: Option<u64>,

    /// Answer from a deterministic offline provider; no API key needed
    #[arg(long, global = true)]
    mock_provider: bool,

    /// Relay base URL used by `optimize` and `form` [env: RELAY_URL]
    #[arg(long, global = true)]
    relay_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            port: self.port,
            public: self.public,
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            upstream_timeout_secs: self.upstream_timeout_secs,
            mock_provider: self.mock_provider,
            relay_url: self.relay_url.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RelayConfig::from_env(cli.overrides())?;
    let container = Container::new(config);
    let router = Router::new(&container);

    let output = router.route(cli.command).await?;
    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
