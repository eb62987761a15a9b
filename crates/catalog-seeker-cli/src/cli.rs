//! Command-line definition for `catseek`.

use std::path::PathBuf;

use catalog_seeker::Strategy;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputMode;

/// Search a product catalog by name with linear and binary search.
#[derive(Debug, Parser)]
#[command(name = "catseek", version)]
#[command(about = "Search a product catalog by name with linear and binary search")]
pub struct Cli {
    /// Catalog file (.json, .yaml or .yml); the built-in demo catalog is used otherwise
    #[arg(long, global = true, env = "CATSEEK_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Log level for messages written to stderr
    #[arg(
        long,
        global = true,
        value_enum,
        env = "CATSEEK_LOG",
        default_value_t = LogLevel::Warn
    )]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find a product by name
    Find(FindArgs),

    /// List the catalog
    List(ListArgs),

    /// Compare the work each strategy does for one lookup
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Product name to look for
    pub name: String,

    /// Which search to run
    #[arg(long, value_enum, default_value_t = StrategyChoice::Both)]
    pub strategy: StrategyChoice,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Sort by name before listing
    #[arg(long)]
    pub sorted: bool,

    /// Sort with case-sensitive ordering (implies --sorted)
    #[arg(long)]
    pub case_sensitive: bool,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Product name to look for
    pub name: String,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// The `--strategy` flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyChoice {
    Linear,
    Binary,
    #[default]
    Both,
}

impl StrategyChoice {
    /// The strategies to run, in order.
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            StrategyChoice::Linear => &[Strategy::Linear],
            StrategyChoice::Binary => &[Strategy::Binary],
            StrategyChoice::Both => &Strategy::ALL,
        }
    }
}
