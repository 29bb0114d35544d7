use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trivia_api::db::{self, transfer};
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database url, e.g. sqlite:trivia.db
    db_url: String,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace categories and questions with categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Write categories.csv and questions.csv into a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let pool = db::establish_connection(&cli.db_url)
        .await
        .context("Cannot connect to DB")?;
    db::run_migrations(&pool).await?;
    match cli.command {
        Commands::Export { path } => transfer::export_data(&pool, &path)
            .await
            .context("Cannot export"),
        Commands::Import { path } => transfer::import_data(&pool, &path)
            .await
            .context("Cannot import"),
    }
}
