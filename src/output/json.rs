//! JSON presenter implementation.
//!
//! Writes the filtered scripts as a JSON object for machine-readable output.

use super::{PresentOptions, Presenter, Report};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// JSON presenter implementation.
///
/// Emits `{"name": "command", ...}`, or an array of names when
/// `names_only` is set. An empty report yields `{}` / `[]`.
pub struct JsonPresenter {
    options: PresentOptions,
}

impl JsonPresenter {
    pub fn new(options: PresentOptions) -> Self {
        Self { options }
    }
}

impl Presenter for JsonPresenter {
    fn present<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()> {
        let json = if self.options.names_only {
            let names: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();
            serde_json::to_string_pretty(&names)
        } else {
            let scripts: BTreeMap<&str, &str> = report
                .entries
                .iter()
                .map(|e| (e.name.as_str(), e.command.as_str()))
                .collect();
            serde_json::to_string_pretty(&scripts)
        }
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
