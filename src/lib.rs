//! script-list - list the scripts declared in a package.json
//!
//! The crate is a three-stage pipeline: [`locator`] picks the manifest path,
//! [`parser`] decodes it, and [`output`] renders the (optionally
//! [`filter`]ed) scripts as a table, list, or JSON.

pub mod filter;
pub mod locator;
pub mod output;
pub mod parser;
