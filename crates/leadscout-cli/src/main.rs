mod output;
mod progress;
mod search;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadscout")]
#[command(about = "Find local businesses and their contact emails from a plain-language request")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search maps listings for a request and scrape a contact email for each
    Search {
        /// What to look for, e.g. "best pediatricians in Pune"
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
        /// How many results to fetch
        #[arg(long, short = 'n', default_value_t = 20, allow_negative_numbers = true)]
        count: i64,
        /// Also write the results to this CSV file
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("nothing to do; try `leadscout search \"best dentists in Pune\"`");
        return Ok(());
    };

    let config = leadscout_core::load_app_config().context("failed to load configuration")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match command {
        Commands::Search { prompt, count, csv } => {
            search::run_search(&config, &prompt.join(" "), count, csv.as_deref()).await
        }
    }
}
