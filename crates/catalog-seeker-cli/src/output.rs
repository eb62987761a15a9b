//! Output mode control.
//!
//! [`OutputMode`] selects between the plain text rendering of a command's
//! result and direct serialization of the same data.

use serde::Serialize;
use thiserror::Error;

/// Controls how command output is rendered.
///
/// This is the user-facing enum for the `--output` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Human-readable lines
    #[default]
    Text,
    /// Serialize data as JSON
    Json,
    /// Serialize data as YAML
    Yaml,
}

/// Errors that can occur during serialization.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Command results that can be shown as text or serialized.
pub trait Render: Serialize {
    /// Renders the plain text form, without a trailing newline.
    fn render_text(&self) -> String;
}

/// Renders a command result in the given mode.
pub fn render<T: Render>(data: &T, mode: OutputMode) -> Result<String, OutputError> {
    match mode {
        OutputMode::Text => Ok(data.render_text()),
        OutputMode::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputMode::Yaml => {
            let mut output = serde_yaml::to_string(data)?;
            if output.ends_with('\n') {
                output.pop();
            }
            Ok(output)
        }
    }
}
