//! # Bookshelf CLI Entry Point
//!
//! Parses process flags, builds the per-invocation call context, and hands
//! the remaining words to the command dispatcher.
//!
//! ## Usage
//!
//! ```bash
//! # List the catalog
//! bookshelf list
//!
//! # Retrieve / delete by id
//! bookshelf get 123
//! bookshelf delete 123
//!
//! # Insert a book
//! bookshelf insert 7 "Dune" "Herbert"
//!
//! # Stream inserted books until the server closes
//! bookshelf watch
//!
//! # Against a non-default endpoint
//! bookshelf --address 10.0.0.5:50051 list
//! ```

use anyhow::Result;
use argh::FromArgs;

use bookshelf_cli::commands::{self, Config};
use bookshelf_client::CallContext;

/// command-line client for the bookshelf catalog service
#[derive(FromArgs)]
struct Cli {
    /// address of the catalog service
    #[argh(option, default = "\"127.0.0.1:50051\".into()")]
    address: String,

    /// command followed by its arguments: get, list, insert, delete, watch
    #[argh(positional, greedy)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    // Diagnostics go to stderr so stdout stays clean for the rendered JSON
    // (piping to jq, etc.). Default level is quiet; RUST_LOG overrides.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config {
        address: cli.address,
    };
    let ctx = CallContext::new();

    commands::dispatch(&config, &ctx, &cli.args).await
}
