//! Resolves which manifest file a run should read.
//!
//! The locator never touches the filesystem for existence checks; a missing
//! file is reported by the parser when it tries to read it.

use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Manifest file name used when no path is given on the command line.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Returns the manifest path to read: `path` if supplied, otherwise
/// [`DEFAULT_MANIFEST`] relative to the working directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use script_list::locator::locate;
///
/// assert_eq!(locate(None), Path::new("package.json"));
/// assert_eq!(locate(Some(Path::new("app/package.json"))), Path::new("app/package.json"));
/// ```
pub fn locate(path: Option<&Path>) -> PathBuf {
    match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(DEFAULT_MANIFEST),
    }
}

/// Name of the directory holding the manifest at `path`.
///
/// Relative paths resolve against the current working directory, and `..`
/// components are resolved before the name is taken. Returns `"unknown"`
/// if no name can be derived.
pub fn display_dir(path: &Path) -> String {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());

    let dir = match parent {
        Some(p) if p.is_absolute() => Some(p.to_path_buf()),
        Some(p) => env::current_dir().ok().map(|cwd| cwd.join(p)),
        None => env::current_dir().ok(),
    };

    dir.map(|d| fs::canonicalize(&d).unwrap_or_else(|_| normalize(&d)))
        .as_deref()
        .and_then(|d| d.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Lexically resolves `.` and `..` components, for paths that don't exist.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
