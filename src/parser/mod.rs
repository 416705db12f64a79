//! Parser module for script-list.
//!
//! Reads a package.json and extracts the project name, description and
//! `scripts` mapping. All other fields are ignored.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use script_list::parser::package_json;
//!
//! let pkg = package_json::parse_file(Path::new("package.json")).unwrap();
//!
//! for entry in pkg.entries() {
//!     println!("{}", entry);
//! }
//! ```

pub mod package_json;
pub mod types;

// Re-export commonly used types for convenience
pub use package_json::{parse_file, parse_slice, parse_str, ParseError, ParseResult};

pub use types::{Manifest, ScriptEntry};
