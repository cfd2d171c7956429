// ABOUTME: Output format abstraction for rendering panel command results
// ABOUTME: Supports human-readable text (default) and JSON for scripting hosts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! The panel returns typed [`CommandOutput`] values; this module turns them
//! into something a host can print.
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, progress bars and report tables for terminals
//! - **JSON**: Stable machine-readable output, one object per command
//!
//! ## Usage
//!
//! ```rust,no_run
//! use health_tracker_panel::config::PanelConfig;
//! use health_tracker_panel::formatters::{format_output, OutputFormat};
//! use health_tracker_panel::panel::{Command, HealthPanel};
//!
//! let mut panel = HealthPanel::new(PanelConfig::default().with_seed(7));
//! let output = panel.execute(Command::TrackWater);
//! if let Ok(formatted) = format_output(&output, OutputFormat::Json) {
//!     println!("{}", formatted.data);
//! }
//! ```

/// Plain-text renderer
pub mod text;

use crate::panel::CommandOutput;
use health_core::errors::{AppError, ErrorResponse};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON, one object per command result
    Json,
}

impl OutputFormat {
    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(FormatError {
                message: format!("unknown output format '{other}', expected text or json"),
                format: Self::default(),
            }),
        }
    }
}

/// Formatted output containing the rendered data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data as a string
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string())
    }
}

fn to_json<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    serde_json::to_string(data).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })
}

/// Render a command result in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output(
    output: &CommandOutput,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => text::render_output(output),
        OutputFormat::Json => to_json(output, format)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Render a command result as pretty-printed JSON, or text unchanged
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output_pretty(
    output: &CommandOutput,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => text::render_output(output),
        OutputFormat::Json => serde_json::to_string_pretty(output).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Render an error in the requested format
///
/// JSON errors use the [`ErrorResponse`] envelope; text errors print the
/// error's display string.
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_error(error: &AppError, format: OutputFormat) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => format!("Error: {error}"),
        OutputFormat::Json => to_json(&ErrorResponse::from(error), format)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}
