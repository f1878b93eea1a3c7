use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the relay service: POST /search-optimization
    Serve,

    /// Send one query to a running relay and print the optimized results
    Optimize { query: String },

    /// Interactive search form backed by a running relay
    Form {
        /// Apply every response as it arrives, even if a newer query was sent
        #[arg(long)]
        last_resolved_wins: bool,
    },
}
