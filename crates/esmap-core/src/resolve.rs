//! Specifier to CDN URL resolution.
//!
//! Two tiers: an exact-match override table of pinned URLs, then a generic
//! rule that appends the specifier to the resolution host (with a React
//! `deps` pin when the specifier mentions react). Results start from a
//! default seed that is separate from the override table.

use crate::config::ResolverConfig;
use crate::error::Error;
use crate::import_map::ImportMap;
use crate::imports::scan_specifiers;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Pinned URLs for packages needing exact resolution.
///
/// `{host}` and `{react}` are filled from [`ResolverConfig`].
const OVERRIDE_TABLE: &[(&str, &str)] = &[
    ("react", "{host}/react@{react}"),
    ("react-dom/client", "{host}/react-dom@{react}/client"),
    ("react-dom/", "{host}/react-dom@{react}/"),
    ("react-dom", "{host}/react-dom@{react}/"),
    ("lucide-react", "{host}/lucide-react/?deps=react@{react}"),
    (
        "react-error-boundary",
        "{host}/react-error-boundary/?deps=react@{react}",
    ),
    ("antd", "{host}/antd?standalone&deps=react@{react}"),
];

/// Entries present in every generated map before scanning.
const DEFAULT_SEED: &[(&str, &str)] = &[
    ("react", "{host}/react@{react}"),
    ("react-dom/", "{host}/react-dom@{react}/"),
    (
        "react-error-boundary",
        "{host}/react-error-boundary/?deps=react@{react}",
    ),
];

fn render(template: &str, config: &ResolverConfig) -> String {
    template
        .replace("{react}", &config.react_version)
        .replace("{host}", config.host())
}

/// Resolves specifiers to URLs. Immutable once built.
#[derive(Debug, Clone)]
pub struct Resolver {
    config: ResolverConfig,
    overrides: HashMap<String, String>,
    seed: ImportMap,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl Resolver {
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        let overrides = OVERRIDE_TABLE
            .iter()
            .map(|(spec, template)| ((*spec).to_string(), render(template, &config)))
            .collect();

        let mut seed = ImportMap::new();
        for (spec, template) in DEFAULT_SEED {
            seed.insert(*spec, render(template, &config));
        }

        Self {
            config,
            overrides,
            seed,
        }
    }

    /// Process-wide resolver built from the default config.
    #[must_use]
    pub fn global() -> &'static Resolver {
        static GLOBAL: OnceLock<Resolver> = OnceLock::new();
        GLOBAL.get_or_init(Resolver::default)
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Pinned URL for `specifier`, by exact key only.
    #[must_use]
    pub fn override_for(&self, specifier: &str) -> Option<&str> {
        self.overrides.get(specifier).map(String::as_str)
    }

    /// The map every scan starts from.
    #[must_use]
    pub fn seed(&self) -> &ImportMap {
        &self.seed
    }

    /// Resolve a single specifier.
    #[must_use]
    pub fn resolve(&self, specifier: &str) -> String {
        if let Some(url) = self.override_for(specifier) {
            return url.to_string();
        }

        let host = self.config.host();
        if specifier.contains("react") {
            format!(
                "{host}/{specifier}?deps=react@{}",
                self.config.react_version
            )
        } else {
            format!("{host}/{specifier}")
        }
    }

    /// Scan `source` and build its import map on top of the default seed.
    #[must_use]
    pub fn scan(&self, source: &str) -> ImportMap {
        let mut map = self.seed.clone();
        let found = scan_specifiers(source);
        debug!(imports = found.len(), bytes = source.len(), "scanned source");

        for import in found {
            let url = self.resolve(&import.specifier);
            map.insert(import.specifier, url);
        }

        map
    }

    /// Read a source file and scan it.
    pub fn scan_file(&self, path: &Path) -> Result<ImportMap, Error> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "scanning file");
        Ok(self.scan(&source))
    }
}

/// Scan `source` with the default resolver.
#[must_use]
pub fn scan(source: &str) -> ImportMap {
    Resolver::global().scan(source)
}

/// Scan `source` with a specific resolver.
#[must_use]
pub fn scan_with(resolver: &Resolver, source: &str) -> ImportMap {
    resolver.scan(source)
}
