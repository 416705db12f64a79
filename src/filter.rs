//! Script name filtering.

use crate::parser::ScriptEntry;

/// Case-insensitive substring match on script names.
///
/// # Example
///
/// ```
/// use script_list::filter::ScriptFilter;
///
/// let filter = ScriptFilter::new("TEST");
/// assert!(filter.matches("test:unit"));
/// assert!(!filter.matches("build"));
/// ```
#[derive(Debug, Clone)]
pub struct ScriptFilter {
    pattern: String,
    needle: String,
}

impl ScriptFilter {
    /// Creates a filter for `pattern`. An empty pattern matches everything.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let needle = pattern.to_lowercase();
        Self { pattern, needle }
    }

    /// The pattern as given by the user.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true if `name` contains the pattern, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.needle)
    }

    /// Keeps the entries whose names match, preserving their order.
    pub fn apply(&self, entries: Vec<ScriptEntry>) -> Vec<ScriptEntry> {
        entries
            .into_iter()
            .filter(|e| self.matches(&e.name))
            .collect()
    }
}
