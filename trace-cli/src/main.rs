//! TRACE CLI
//!
//! Candidate discovery for team formation: live directory search with
//! simulated trust signals, ranked, with a static catalog fallback.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use trace_core::skill_match;
use trace_directory::check_directory_connection;
use trace_pipeline::{SearchService, TraceConfig};

#[derive(Parser)]
#[command(name = "trace-finder")]
#[command(author, version, about = "TRACE: candidate discovery for team formation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(short, long, global = true, env = "TRACE_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "1", global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for candidates (empty query lists the catalog)
    Search {
        /// Free-text query
        #[arg(default_value = "")]
        query: String,

        /// Directory hits to request
        #[arg(long)]
        limit: Option<usize>,

        /// Ranked candidates to keep
        #[arg(long)]
        top: Option<usize>,

        /// Directory access token (or set GITHUB_TOKEN env var)
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Print only the candidate list
        #[arg(long)]
        candidates_only: bool,
    },

    /// Print the static catalog
    Catalog,

    /// Score held skills against required skills
    Match {
        /// Skills the candidate has (comma-separated)
        #[arg(long, value_delimiter = ',')]
        have: Vec<String>,

        /// Skills the team needs (comma-separated)
        #[arg(long, value_delimiter = ',')]
        need: Vec<String>,
    },

    /// Check directory reachability
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut config = TraceConfig::load(cli.config.as_deref())
        .with_context(|| "Failed to load configuration")?;

    match cli.command {
        Commands::Search {
            query,
            limit,
            top,
            token,
            candidates_only,
        } => {
            if let Some(limit) = limit {
                config.directory.search_limit = limit;
            }
            if let Some(top) = top {
                config.ranking.top_n = top;
            }
            if token.is_some() {
                config.directory.token = token;
            }
            config.validate()?;

            run_search(&config, &query, candidates_only).await?;
        }
        Commands::Catalog => {
            print_json(&config.catalog()?)?;
        }
        Commands::Match { have, need } => {
            print_json(&skill_match(&trim_all(have), &trim_all(need)))?;
        }
        Commands::Status => {
            check_status(&config).await?;
        }
    }

    Ok(())
}

async fn run_search(config: &TraceConfig, query: &str, candidates_only: bool) -> Result<()> {
    let catalog = config.catalog()?;
    let service = SearchService::from_config(config, catalog)?;

    let response = service.search(query).await;

    if candidates_only {
        print_json(&response.candidates)
    } else {
        print_json(&response)
    }
}

async fn check_status(config: &TraceConfig) -> Result<()> {
    eprintln!("Checking directory at {}...", config.directory.base_url);

    match check_directory_connection(&config.directory).await {
        Ok(true) => {
            println!("✅ Directory is reachable");
            println!("   API root: {}", config.directory.base_url);
            if config.directory.token.is_none() {
                println!("   No token configured: unauthenticated rate limits apply");
            }
        }
        Ok(false) => {
            println!("❌ Directory is not reachable");
            println!("   Searches will fall back to the static catalog");
        }
        Err(e) => {
            println!("❌ Error checking directory: {}", e);
        }
    }

    Ok(())
}

fn trim_all(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
