use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for healthlog
/// Ingests the event-tracking sheet into SQLite and reports weekly drink totals
#[derive(Parser, Debug)]
#[command(
    name = "healthlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ingest a personal event-tracking sheet into SQLite and summarise weekly drinks",
    long_about = None
)]
pub struct Cli {
    /// Configuration file (default: ./config.yaml, then ~/.healthlog/config.yaml)
    #[arg(global = true, long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db", value_name = "PATH")]
    pub db: Option<String>,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty database
    Init {
        #[arg(long, help = "Drop and recreate an existing database")]
        force: bool,
    },

    /// Rebuild the database from the tracking sheet
    Update {
        #[arg(
            long,
            value_name = "FILE",
            help = "Read rows from a local CSV export instead of the Google Sheet"
        )]
        csv: Option<PathBuf>,
    },

    /// Show database state and row counts
    Status,

    /// Print weekly drink totals
    Weekly {
        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (e.g. 2024-01:2024-03)"
        )]
        range: Option<String>,
    },

    /// Export weekly drink totals
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,
    },
}
