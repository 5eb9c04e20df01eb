//! Output formatting for the CLI.
//!
//! This module provides text and JSON writers for generated mappings, plus
//! human-readable status messages.

use codeowner_core::Mapping;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// JSON output format for generated mappings.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Mappings in rendered order.
    pub mappings: Vec<&'a Mapping>,
}

impl<'a> JsonOutput<'a> {
    /// Creates JSON output from mappings already in rendered order.
    pub fn new(mappings: Vec<&'a Mapping>) -> Self {
        Self { mappings }
    }

    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// Result of comparing generated text with the existing CODEOWNERS file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Existing CODEOWNERS file, if one was found.
    pub codeowners: Option<String>,
    /// Whether the existing file matches the generated text.
    pub up_to_date: bool,
}

impl CheckReport {
    /// Builds a report from the existing file and its content, if any.
    pub fn new(existing: Option<(&Path, &str)>, generated: &str) -> Self {
        match existing {
            Some((path, content)) => Self {
                codeowners: Some(path.display().to_string()),
                up_to_date: content == generated,
            },
            None => Self {
                codeowners: None,
                up_to_date: false,
            },
        }
    }

    /// Writes the report in JSON format.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes the outcome of a check.
    pub fn write_check_report(&mut self, report: &CheckReport) -> std::io::Result<()> {
        let (message, ok) = match (&report.codeowners, report.up_to_date) {
            (Some(path), true) => (format!("✓ {} is up to date", path), true),
            (Some(path), false) => (format!("✗ {} is out of date", path), false),
            (None, _) => ("✗ no CODEOWNERS file found".to_string(), false),
        };

        if !self.use_colors {
            writeln!(self.writer, "{}", message)
        } else if ok {
            writeln!(self.writer, "{}", message.green().bold())
        } else {
            writeln!(self.writer, "{}", message.red().bold())
        }
    }

    /// Writes an advisory notice.
    pub fn write_notice(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{}", message.yellow())
        } else {
            writeln!(self.writer, "{}", message)
        }
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)
        } else {
            writeln!(self.writer, "Error: {}", message)
        }
    }
}
