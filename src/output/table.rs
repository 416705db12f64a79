//! Table presenter.
//!
//! Renders scripts as an aligned two-column table under the project title,
//! followed by a count line.

use super::{PresentOptions, Presenter, Report};
use crossterm::style::{StyledContent, Stylize};
use std::io::{self, Write};

const NAME_HEADER: &str = "Script";
const COMMAND_HEADER: &str = "Command";
const GAP: &str = "  ";

/// Table presenter implementation.
pub struct TablePresenter {
    options: PresentOptions,
}

impl TablePresenter {
    pub fn new(options: PresentOptions) -> Self {
        Self { options }
    }

    /// Styles `text` when color is enabled. Padding must already be applied
    /// so escape codes don't skew column widths.
    fn paint(&self, text: String, style: impl FnOnce(String) -> StyledContent<String>) -> String {
        if self.options.color {
            style(text).to_string()
        } else {
            text
        }
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

impl Presenter for TablePresenter {
    fn present<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()> {
        if report.is_empty() {
            return writeln!(writer, "{}", report.empty_message());
        }

        writeln!(writer, "{}", self.paint(report.title.clone(), |s| s.green().bold()))?;
        if let Some(description) = &report.description {
            writeln!(writer, "{}", self.paint(description.clone(), |s| s.dim()))?;
        }
        writeln!(writer)?;

        let name_width = report
            .entries
            .iter()
            .map(|e| width(&e.name))
            .chain(std::iter::once(width(NAME_HEADER)))
            .max()
            .unwrap_or(0);

        if self.options.names_only {
            writeln!(writer, "{}", self.paint(NAME_HEADER.to_string(), |s| s.bold()))?;
            writeln!(
                writer,
                "{}",
                self.paint("-".repeat(name_width), |s| s.dark_grey())
            )?;
            for entry in &report.entries {
                writeln!(writer, "{}", self.paint(entry.name.clone(), |s| s.cyan()))?;
            }
        } else {
            let command_width = report
                .entries
                .iter()
                .map(|e| width(&e.command))
                .chain(std::iter::once(width(COMMAND_HEADER)))
                .max()
                .unwrap_or(0);

            let header = format!("{:<name_width$}{GAP}{COMMAND_HEADER}", NAME_HEADER);
            writeln!(writer, "{}", self.paint(header, |s| s.bold()))?;

            let rule = format!("{}{GAP}{}", "-".repeat(name_width), "-".repeat(command_width));
            writeln!(writer, "{}", self.paint(rule, |s| s.dark_grey()))?;

            for entry in &report.entries {
                let name = self.paint(format!("{:<name_width$}", entry.name), |s| s.cyan());
                writeln!(writer, "{}{GAP}{}", name, entry.command)?;
            }
        }

        writeln!(writer)?;
        writeln!(writer, "Found {} script(s)", report.len())
    }
}
