//! agentprov - unattended monitoring agent provisioning

use agentprov_cli::cli::{Cli, failure_code};
use agentprov_cli::output::{OutputContext, json};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let json_mode = cli.json;
    let no_color = cli.no_color;
    if let Err(e) = cli.run().await {
        let (code, reason) = failure_code(&e);
        let message = format!("{e:#}");
        match json::format_error(&message, reason) {
            Ok(out) if json_mode => println!("{out}"),
            _ => OutputContext::new(no_color, false).error(&format!("Error: {message}")),
        }
        std::process::exit(code);
    }
}

/// Logs go to stderr, filtered by `AGENTPROV_LOG` (default `warn`).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("AGENTPROV_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
