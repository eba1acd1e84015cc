//! LOCC CLI
//!
//! Command-line status view over the monitoring agent's logs. Reads the same
//! files as the API server, through the same query service.
//!
//! # Usage
//!
//! ```bash
//! locc --help
//! locc health
//! locc alerts --limit 50
//! locc --json summary
//! ```

#![deny(unsafe_code)]

mod render;

use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::config::{LogSources, DEFAULT_ALERT_LOG, DEFAULT_HEALING_LOG, DEFAULT_HEALTH_LOG};
use shared::query::QueryService;
use std::io::Write;
use std::path::PathBuf;

/// LOCC CLI - LinuxOps Control Center status view
#[derive(Parser)]
#[command(name = "locc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Health snapshot log (JSON lines)
    #[arg(long, env = "LOCC_HEALTH_LOG", default_value = DEFAULT_HEALTH_LOG)]
    health_log: PathBuf,

    /// Alert transition log
    #[arg(long, env = "LOCC_ALERT_LOG", default_value = DEFAULT_ALERT_LOG)]
    alert_log: PathBuf,

    /// Self-healing log
    #[arg(long, env = "LOCC_HEALING_LOG", default_value = DEFAULT_HEALING_LOG)]
    healing_log: PathBuf,

    /// Print the API's JSON response instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the latest health snapshot
    Health,
    /// Show recent alert transitions
    Alerts {
        /// Number of most recent entries
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Show recent self-healing events
    Healing {
        /// Number of most recent entries
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
    /// Show health availability and the latest alerts and healing events
    Summary,
}

impl Cli {
    fn sources(&self) -> LogSources {
        LogSources::new(&self.health_log, &self.alert_log, &self.healing_log)
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        writeln!(out, "LOCC CLI v{}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "Use --help for usage information")?;
        return Ok(());
    };

    let service = QueryService::from_sources(cli.sources());
    tracing::debug!(sources = ?cli.sources(), "Reading agent logs");

    match command {
        Commands::Health => {
            let response = service.get_health();
            if cli.json {
                print_json(out, &response)
            } else {
                render::health(out, &response.data)
            }
        }
        Commands::Alerts { limit } => {
            let response = service.get_alerts(*limit);
            if cli.json {
                print_json(out, &response)
            } else {
                render::alerts(out, &response.alerts)
            }
        }
        Commands::Healing { limit } => {
            let response = service.get_healing(*limit);
            if cli.json {
                print_json(out, &response)
            } else {
                render::healing(out, &response.events)
            }
        }
        Commands::Summary => {
            let response = service.get_summary();
            if cli.json {
                print_json(out, &response)
            } else {
                render::summary(out, &response)
            }
        }
    }
}

fn print_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
