//! Parser for npm package.json files.
//!
//! This module reads a package.json and turns it into a [`Manifest`],
//! applying the shape checks on `scripts`.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::types::Manifest;

/// Errors that can occur during package.json parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The manifest does not exist or could not be read.
    #[error("No package.json found at {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The contents are not well-formed JSON or have the wrong shape.
    #[error("Invalid package.json: {reason}")]
    InvalidFormat { reason: String },
}

impl ParseError {
    fn invalid(reason: impl Into<String>) -> Self {
        ParseError::InvalidFormat {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::invalid(err.to_string())
    }
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// The consulted top-level fields, kept loosely typed so shape problems
/// can be reported (or ignored) field by field.
#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    scripts: Option<Value>,
}

/// Parses a package.json file from a file path.
///
/// Any failure to read the file, including a path that names a directory,
/// is reported as [`ParseError::NotFound`]. Contents that are not valid
/// UTF-8 are [`ParseError::InvalidFormat`].
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use script_list::parser::package_json::parse_file;
///
/// let pkg = parse_file(Path::new("package.json")).unwrap();
/// println!("Package: {:?}", pkg.name);
/// ```
pub fn parse_file(path: &Path) -> ParseResult<Manifest> {
    debug!(path = %path.display(), "reading manifest");

    let content = fs::read(path).map_err(|source| ParseError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    parse_slice(&content)
}

/// Parses a package.json from a string.
///
/// A missing or `null` `scripts` field yields an empty mapping. Script
/// values that are not strings are skipped with a warning; they are never
/// coerced. Non-string `name` or `description` values are treated as absent.
///
/// # Example
///
/// ```
/// use script_list::parser::package_json::parse_str;
///
/// let json = r#"{"name": "my-app", "scripts": {"build": "tsc", "watch": true}}"#;
/// let pkg = parse_str(json).unwrap();
/// assert_eq!(pkg.name, Some("my-app".to_string()));
/// assert_eq!(pkg.script_count(), 1);
/// ```
pub fn parse_str(content: &str) -> ParseResult<Manifest> {
    parse_slice(content.as_bytes())
}

/// Parses a package.json from raw bytes, as read from disk.
pub fn parse_slice(content: &[u8]) -> ParseResult<Manifest> {
    let value: Value = serde_json::from_slice(content)?;

    if !value.is_object() {
        return Err(ParseError::invalid(format!(
            "expected a JSON object at the top level, found {}",
            kind_of(&value)
        )));
    }

    let raw: RawManifest = serde_json::from_value(value)?;

    let scripts = match raw.scripts {
        None => BTreeMap::new(),
        Some(Value::Object(map)) => extract_scripts(map),
        Some(other) => {
            return Err(ParseError::invalid(format!(
                "`scripts` must be an object, found {}",
                kind_of(&other)
            )))
        }
    };

    let manifest = Manifest {
        name: into_string(raw.name),
        description: into_string(raw.description),
        scripts,
    };

    debug!(
        name = manifest.name.as_deref().unwrap_or("<unnamed>"),
        scripts = manifest.script_count(),
        "parsed manifest"
    );

    Ok(manifest)
}

fn extract_scripts(map: serde_json::Map<String, Value>) -> BTreeMap<String, String> {
    let mut scripts = BTreeMap::new();

    for (name, value) in map {
        match value {
            Value::String(command) => {
                scripts.insert(name, command);
            }
            other => {
                warn!(script = %name, kind = kind_of(&other), "skipping script with non-string command");
            }
        }
    }

    scripts
}

fn into_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
