//! Plain list presenter.

use super::{PresentOptions, Presenter, Report};
use std::io::{self, Write};

/// List presenter implementation.
pub struct ListPresenter {
    options: PresentOptions,
}

impl ListPresenter {
    pub fn new(options: PresentOptions) -> Self {
        Self { options }
    }
}

impl Presenter for ListPresenter {
    fn present<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()> {
        if report.is_empty() {
            return writeln!(writer, "{}", report.empty_message());
        }

        for entry in &report.entries {
            if self.options.names_only {
                writeln!(writer, "{}", entry.name)?;
            } else {
                writeln!(writer, "{}", entry)?;
            }
        }

        Ok(())
    }
}
