//! Rendering of script listings.
//!
//! This module provides presenters that write a [`Report`] in one of the
//! supported formats: an aligned table, a plain list, or JSON.

pub mod json;
pub mod list;
pub mod table;

use crate::filter::ScriptFilter;
use crate::parser::{Manifest, ScriptEntry};
use std::ffi::OsStr;
use std::io::{self, Write};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned two-column table with a count line
    #[default]
    Table,
    /// One `name: command` line per script
    List,
    /// JSON object mapping script names to commands
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "list" => Ok(OutputFormat::List),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: '{}'. Valid formats: table, list, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::List => write!(f, "list"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Switches shared by every presenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentOptions {
    /// Leave out the command text.
    pub names_only: bool,
    /// Emit ANSI styling. Only the table format uses it.
    pub color: bool,
}

impl PresentOptions {
    /// True when a `NO_COLOR` value asks for plain output: any non-empty
    /// value counts, including `0` and `false`.
    pub fn no_color_requested(value: Option<&OsStr>) -> bool {
        value.is_some_and(|v| !v.is_empty())
    }
}

/// Data container for presentation.
///
/// Holds the already-filtered entries together with the project details
/// shown in the table heading.
#[derive(Debug, Clone)]
pub struct Report {
    /// Heading shown above the table
    pub title: String,
    /// Project description, if the manifest has one
    pub description: Option<String>,
    /// Entries to render, in display order
    pub entries: Vec<ScriptEntry>,
    /// Filter pattern that produced `entries`, if any
    pub filter: Option<String>,
}

impl Report {
    /// Build a report from a manifest, applying `filter` when given.
    ///
    /// The title is the manifest name, or `fallback_title` when unnamed.
    pub fn from_manifest(
        manifest: &Manifest,
        fallback_title: &str,
        filter: Option<&ScriptFilter>,
    ) -> Self {
        let entries = manifest.entries();
        let entries = match filter {
            Some(f) => f.apply(entries),
            None => entries,
        };

        Self {
            title: manifest
                .name
                .clone()
                .unwrap_or_else(|| fallback_title.to_string()),
            description: manifest.description.clone(),
            entries,
            filter: filter.map(|f| f.pattern().to_string()),
        }
    }

    /// Number of entries in the report
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there is nothing to list
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Notice printed when there are no entries.
    pub fn empty_message(&self) -> String {
        match self.filter.as_deref() {
            Some(pattern) if !pattern.is_empty() => {
                format!("No scripts matching '{}' found", pattern)
            }
            _ => "No scripts found in package.json".to_string(),
        }
    }
}

/// Trait for presenters.
pub trait Presenter {
    /// Write the report to the given writer.
    fn present<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()>;
}

/// Present the report in the specified format.
pub fn present<W: Write>(
    format: OutputFormat,
    options: PresentOptions,
    report: &Report,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => table::TablePresenter::new(options).present(report, writer),
        OutputFormat::List => list::ListPresenter::new(options).present(report, writer),
        OutputFormat::Json => json::JsonPresenter::new(options).present(report, writer),
    }
}

/// Present the report and flush it.
///
/// A reader that goes away early (e.g. `sl | head -1`) is not an error.
pub fn write_report<W: Write>(
    format: OutputFormat,
    options: PresentOptions,
    report: &Report,
    writer: &mut W,
) -> io::Result<()> {
    match present(format, options, report, writer).and_then(|_| writer.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Present the report to a string.
pub fn present_to_string(
    format: OutputFormat,
    options: PresentOptions,
    report: &Report,
) -> io::Result<String> {
    let mut buffer = Vec::new();
    present(format, options, report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
