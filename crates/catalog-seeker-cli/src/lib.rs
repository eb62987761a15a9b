//! Command-line driver for `catalog-seeker`.
//!
//! The `catseek` binary loads a catalog (the built-in demo products or a
//! JSON/YAML file), runs linear and binary search on it and prints the result
//! as text, JSON or YAML. Logs go to stderr so structured output on stdout
//! stays parseable.

pub mod cli;
pub mod commands;
pub mod loader;
pub mod output;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, LogLevel};

/// Installs the global tracing subscriber.
pub fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs a parsed command and returns the rendered output.
pub fn run(cli: &Cli) -> Result<String> {
    let catalog =
        loader::load_catalog(cli.catalog.as_deref()).with_context(|| match &cli.catalog {
            Some(path) => format!("could not load catalog {}", path.display()),
            None => "could not build the demo catalog".to_string(),
        })?;

    let rendered = match &cli.command {
        Command::Find(args) => output::render(&commands::find(&catalog, args), cli.output),
        Command::List(args) => output::render(&commands::list(&catalog, args), cli.output),
        Command::Analyze(args) => output::render(&commands::analyze(&catalog, args), cli.output),
    };
    rendered.context("could not render output")
}
