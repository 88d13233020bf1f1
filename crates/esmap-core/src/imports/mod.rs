//! Import discovery for JavaScript/TypeScript source text.
//!
//! Provides a pattern-based scanner for ES import declarations.

mod scan;

pub use scan::{scan_specifiers, ImportForm, ScannedImport};
