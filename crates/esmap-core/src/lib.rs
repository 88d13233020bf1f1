#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! Generate browser import maps from the import declarations in source text.
//!
//! ```
//! let map = esmap_core::scan("import { Button } from 'antd';");
//! assert_eq!(
//!     map.get("antd"),
//!     Some("https://esm.sh/antd?standalone&deps=react@18.2.0")
//! );
//! ```

pub mod config;
pub mod error;
pub mod import_map;
pub mod imports;
pub mod resolve;
pub mod version;

pub use config::ResolverConfig;
pub use error::Error;
pub use import_map::ImportMap;
pub use imports::{scan_specifiers, ImportForm, ScannedImport};
pub use resolve::{scan, scan_with, Resolver};
pub use version::VERSION;
