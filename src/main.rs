// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::Path;

use crate::app_config::{Config, LogLevel};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod database;
mod errors;
mod repository;
mod store_context;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a translation record as JSON
    Get {
        /// Record identifier
        id: i64,
    },

    /// Create a translation record from a JSON object of field values
    Create {
        /// JSON object, e.g. '{"original": "Hello", "translated": "Bonjour"}'
        data: String,
    },

    /// Overlay a JSON object of field values onto an existing record
    Update {
        /// Record identifier
        id: i64,
        /// JSON object of the fields to change
        data: String,
    },

    /// Delete a translation record
    Delete {
        /// Record identifier
        id: i64,
    },

    /// List the most recently updated records
    List {
        /// Maximum number of records to print
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Print database statistics
    Stats,

    /// Generate shell completions for trstore
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// trstore - Translation Record Store
///
/// Stores translation records in SQLite and exposes the record gateway as a
/// small CLI.
#[derive(Parser, Debug)]
#[command(name = "trstore")]
#[command(version = "0.1.0")]
#[command(about = "Translation record store")]
#[command(long_about = "trstore stores translation records in SQLite, scoped per storefront.

EXAMPLES:
    trstore create '{\"original\": \"Hello\", \"translated\": \"Bonjour\"}'
    trstore get 1                               # Print record 1 as JSON
    trstore update 1 '{\"translated\": \"Salut\"}' # Overlay fields onto record 1
    trstore delete 1                            # Remove record 1
    trstore list --limit 5                      # Show the 5 most recent records
    trstore stats                               # Database statistics
    trstore completions bash > trstore.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't exist, a
    default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Database file path (overrides the configured path)
    #[arg(short, long)]
    database: Option<std::path::PathBuf>,

    /// Store scope applied to records saved without one
    #[arg(short, long)]
    store_id: Option<i64>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Custom logger writing colored, timestamped lines to stderr
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    /// Initialize the global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    /// ANSI color code for a log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default.
    // The level is updated after the config is loaded.
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Completions need no configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "trstore", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    // Load or create configuration
    let config_path = &cli.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        config
            .save(config_path)
            .context("Failed to write default config")?;
        config
    };

    // Override config with CLI options if provided
    if let Some(database) = &cli.database {
        config.database_path = Some(database.clone());
    }
    if let Some(store_id) = cli.store_id {
        config.default_store_id = store_id;
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Get { id } => controller.get(id).await,
        Commands::Create { data } => controller.create(&data).await,
        Commands::Update { id, data } => controller.update(id, &data).await,
        Commands::Delete { id } => controller.delete(id).await,
        Commands::List { limit } => controller.list(limit).await,
        Commands::Stats => controller.stats().await,
        Commands::Completions { .. } => unreachable!("handled above"),
    }
}
