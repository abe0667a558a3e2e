//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) with specialized
//! views for document summaries, navigation indexes, code samples and
//! edit outcomes, plus progress indicators.

use crate::cli::OutputFormat;
use crate::error::Result;
use akira_core::{Dialect, Document, NavigationIndex};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, trace};

/// Condensed facts about a parsed document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    pub valid: bool,
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,
    pub servers: Vec<String>,
    pub paths: usize,
    pub endpoints: usize,
    pub schemas: usize,
    pub security_schemes: Vec<String>,
}

impl DocumentSummary {
    pub fn of(document: &Document) -> Self {
        Self {
            valid: true,
            title: document.info.title.clone(),
            version: document.info.version.clone(),
            openapi: document.openapi.clone(),
            servers: document.servers.iter().map(|s| s.url.clone()).collect(),
            paths: document.paths.len(),
            endpoints: document.endpoint_count(),
            schemas: document.components.schemas.len(),
            security_schemes: document
                .components
                .security_schemes
                .iter()
                .map(|(name, _)| name.clone())
                .collect(),
        }
    }
}

/// One generated code sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleView {
    pub endpoint: String,
    pub dialect: Dialect,
    pub code: String,
}

/// Outcome of committing an edited specification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplyReport {
    pub committed: bool,
    pub revision: u64,
    pub endpoints: usize,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a document summary
    fn format_summary(&self, summary: &DocumentSummary) -> Result<String>;

    /// Format a navigation index, optionally grouped by path
    fn format_navigation(&self, index: &NavigationIndex, grouped: bool) -> Result<String>;

    /// Format generated samples
    fn format_samples(&self, samples: &[SampleView]) -> Result<String>;

    /// Format an edit outcome
    fn format_apply_report(&self, report: &ApplyReport) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_summary(&self, summary: &DocumentSummary) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_summary_human(summary)),
            _ => self.format(summary),
        }
    }

    fn format_navigation(&self, index: &NavigationIndex, grouped: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_navigation_human(index, grouped)),
            _ if grouped => self.format(&index.groups()),
            _ => self.format(index),
        }
    }

    fn format_samples(&self, samples: &[SampleView]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_samples_human(samples)),
            _ => self.format(&samples),
        }
    }

    fn format_apply_report(&self, report: &ApplyReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_apply_report_human(report)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            format,
            use_color,
            show_progress: !quiet && io::stderr().is_terminal(),
            quiet,
            verbose,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        verbose: u8,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            show_progress: false, // No progress bars with custom writers
            quiet,
            verbose,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Disable progress indicators regardless of the terminal
    pub fn set_show_progress(&mut self, show: bool) {
        self.show_progress = self.show_progress && show;
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        trace!("Outputting data in {:?} format", self.format);

        let formatted = self.format.format(value)?;
        self.emit(&formatted)
    }

    /// Write a document summary
    pub fn summary(&mut self, summary: &DocumentSummary) -> Result<()> {
        let formatted = self.format.format_summary(summary)?;
        self.emit(&formatted)
    }

    /// Write a navigation index
    pub fn navigation(&mut self, index: &NavigationIndex, grouped: bool) -> Result<()> {
        let formatted = self.format.format_navigation(index, grouped)?;
        self.emit(&formatted)
    }

    /// Write generated samples
    pub fn samples(&mut self, samples: &[SampleView]) -> Result<()> {
        let formatted = self.format.format_samples(samples)?;
        self.emit(&formatted)
    }

    /// Write an edit outcome
    pub fn apply_report(&mut self, report: &ApplyReport) -> Result<()> {
        let formatted = self.format.format_apply_report(report)?;
        self.emit(&formatted)
    }

    /// Human output ends with a newline; machine formats are written as-is
    fn emit(&mut self, formatted: &str) -> Result<()> {
        if self.format == OutputFormat::Human || !formatted.ends_with('\n') {
            self.writeln(formatted.trim_end_matches('\n'))
        } else {
            self.write(formatted)
        }
    }

    /// Create a spinner for indeterminate progress
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(default_spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    /// Check if verbose output should be shown
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }
}

/// Helper function to create a spinner style
pub fn default_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Render rows under headers with aligned columns
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let pad = |cells: Vec<String>| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| match widths.get(i) {
                Some(width) => format!("{:width$}", cell, width = *width),
                None => cell.clone(),
            })
            .collect::<Vec<_>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let mut output = pad(headers.iter().map(|h| h.to_string()).collect());
    output.push('\n');
    output.push_str(
        &widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    );
    output.push('\n');
    for row in rows {
        output.push_str(&pad(row.clone()));
        output.push('\n');
    }
    output
}

/// Format a document summary for human reading
fn format_summary_human(summary: &DocumentSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("📘 {} (version {})\n", summary.title, summary.version));
    if let Some(openapi) = &summary.openapi {
        output.push_str(&format!("  OpenAPI: {}\n", openapi));
    }
    if summary.servers.is_empty() {
        output.push_str("  Servers: none declared\n");
    } else {
        output.push_str(&format!("  Servers: {}\n", summary.servers.join(", ")));
    }
    output.push_str(&format!(
        "  Endpoints: {} across {} path(s)\n",
        summary.endpoints, summary.paths
    ));
    output.push_str(&format!("  Schemas: {}\n", summary.schemas));
    if !summary.security_schemes.is_empty() {
        output.push_str(&format!(
            "  Security schemes: {}\n",
            summary.security_schemes.join(", ")
        ));
    }

    output
}

/// Format a navigation index for human reading
fn format_navigation_human(index: &NavigationIndex, grouped: bool) -> String {
    if index.is_empty() {
        return "No endpoints declared\n".to_string();
    }

    if grouped {
        let mut output = String::new();
        for group in index.groups() {
            output.push_str(&format!("{}\n", group.path));
            for entry in group.entries {
                output.push_str(&format!("  {:<7} {}", entry.method.as_upper(), entry.id));
                if let Some(summary) = &entry.summary {
                    output.push_str(&format!("  {}", summary));
                }
                output.push('\n');
            }
        }
        return output;
    }

    let rows = index
        .entries()
        .iter()
        .map(|entry| {
            vec![
                entry.id.clone(),
                entry.label.clone(),
                entry.summary.clone().unwrap_or_default(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&["ID", "ENDPOINT", "SUMMARY"], &rows)
}

/// Format generated samples for human reading
fn format_samples_human(samples: &[SampleView]) -> String {
    let mut output = String::new();

    for (i, sample) in samples.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "── {} · {} ──\n{}\n",
            sample.endpoint,
            sample.dialect.display_name(),
            sample.code
        ));
    }

    output
}

/// Format an edit outcome for human reading
fn format_apply_report_human(report: &ApplyReport) -> String {
    let mut output = String::new();

    if report.committed {
        output.push_str(&format!(
            "✅ Edit committed (revision {}, {} endpoint(s))\n",
            report.revision, report.endpoints
        ));
    } else {
        output.push_str(&format!(
            "❌ Edit rejected; keeping revision {} ({} endpoint(s))\n",
            report.revision, report.endpoints
        ));
        if let Some(error) = &report.error {
            output.push_str(&format!("  💬 {}\n", error));
        }
    }

    for id in &report.added {
        output.push_str(&format!("  + {}\n", id));
    }
    for id in &report.removed {
        output.push_str(&format!("  - {}\n", id));
    }

    output
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
