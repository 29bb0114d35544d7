use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use trivia_api::settings::Settings;
use trivia_api::db;
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Overrides TRIVIA_BIND_ADDR
    #[clap(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::load().context("Invalid configuration")?;
    let pool = db::establish_connection(&settings.database_url)
        .await
        .with_context(|| format!("Cannot connect to {}", settings.database_url))?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;

    run_server(pool, cli.bind.unwrap_or(settings.bind_addr)).await
}
