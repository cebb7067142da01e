// Output formatting — plain-text report, JSON, and terminal display.

pub mod json;
pub mod terminal;
pub mod text;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::info;

use crate::pipeline::Report;

/// Serialization format for a written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Banner-style plain text, the layout of the historical output.txt
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format {other:?} (expected \"text\" or \"json\")"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Write `report` to `out` in the chosen format.
pub fn write_report<W: Write>(report: &Report, format: OutputFormat, out: W) -> Result<()> {
    match format {
        OutputFormat::Text => text::write_report(report, out),
        OutputFormat::Json => json::write_report(report, out),
    }
}

/// Create (or truncate) `path` and write `report` into it.
///
/// Errors name the path, whether creation or writing failed.
pub fn write_report_file(report: &Report, format: OutputFormat, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create report file {}", path.display()))?;
    write_report(report, format, BufWriter::new(file))
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    info!(path = %path.display(), %format, "Report written");
    Ok(())
}
