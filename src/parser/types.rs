//! Shared types for manifest parsing.
//!
//! This module defines the decoded manifest and the script entries
//! derived from it.

use std::collections::BTreeMap;
use std::fmt;

/// The fields of a package.json that script listing cares about.
///
/// Everything else in the file is ignored. `scripts` is keyed by script
/// name, so names are unique and iterate in ascending order.
///
/// # Example
///
/// ```
/// use script_list::parser::parse_str;
///
/// let pkg = parse_str(r#"{"name": "my-app", "scripts": {"dev": "vite"}}"#).unwrap();
/// assert_eq!(pkg.name, Some("my-app".to_string()));
/// assert_eq!(pkg.script_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// The name of the package.
    pub name: Option<String>,

    /// A brief description of the package.
    pub description: Option<String>,

    /// Script name to shell command. Empty when the manifest declares none.
    pub scripts: BTreeMap<String, String>,
}

impl Manifest {
    /// Returns true if at least one script is declared.
    pub fn has_scripts(&self) -> bool {
        !self.scripts.is_empty()
    }

    /// Returns the number of declared scripts.
    pub fn script_count(&self) -> usize {
        self.scripts.len()
    }

    /// Returns every script as a [`ScriptEntry`], sorted by name.
    pub fn entries(&self) -> Vec<ScriptEntry> {
        self.scripts
            .iter()
            .map(|(name, command)| ScriptEntry::new(name, command))
            .collect()
    }
}

/// A single name → command pair from `scripts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    /// The script name (e.g., "build", "test:unit").
    pub name: String,

    /// The shell command the script runs.
    pub command: String,
}

impl ScriptEntry {
    /// Creates a new ScriptEntry instance.
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

impl fmt::Display for ScriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.command)
    }
}
