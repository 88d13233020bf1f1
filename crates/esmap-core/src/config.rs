use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default CDN root for resolved specifiers.
pub const DEFAULT_RESOLUTION_HOST: &str = "https://esm.sh";

/// Default React version pinned across overrides and the fallback rule.
pub const DEFAULT_REACT_VERSION: &str = "18.2.0";

/// Resolution settings shared by the override table, the default seed and
/// the fallback rule.
///
/// On disk this is a JSON object; both keys are optional:
///
/// ```json
/// { "resolutionHost": "https://esm.sh", "reactVersion": "18.2.0" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// CDN root, e.g. `https://esm.sh`.
    pub resolution_host: String,

    /// React version appended as `?deps=react@<version>`.
    pub react_version: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resolution_host: DEFAULT_RESOLUTION_HOST.to_string(),
            react_version: DEFAULT_REACT_VERSION.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the resolution host.
    #[must_use]
    pub fn with_resolution_host(mut self, host: impl Into<String>) -> Self {
        self.resolution_host = host.into();
        self
    }

    /// Set the pinned React version.
    #[must_use]
    pub fn with_react_version(mut self, version: impl Into<String>) -> Self {
        self.react_version = version.into();
        self
    }

    /// The host with any trailing slashes removed.
    #[must_use]
    pub fn host(&self) -> &str {
        self.resolution_host.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.resolution_host, "https://esm.sh");
        assert_eq!(config.react_version, "18.2.0");
    }

    #[test]
    fn test_host_trims_trailing_slash() {
        let config = ResolverConfig::default().with_resolution_host("https://cdn.example/");
        assert_eq!(config.host(), "https://cdn.example");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ResolverConfig = serde_json::from_str(r#"{"reactVersion":"18.3.1"}"#).unwrap();
        assert_eq!(config.react_version, "18.3.1");
        assert_eq!(config.resolution_host, DEFAULT_RESOLUTION_HOST);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("esmap.json");
        std::fs::write(&path, r#"{"resolutionHost":"https://cdn.test"}"#).unwrap();

        let config = ResolverConfig::load(&path).unwrap();
        assert_eq!(config.resolution_host, "https://cdn.test");
        assert_eq!(config.react_version, DEFAULT_REACT_VERSION);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ResolverConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("esmap.json");
        std::fs::write(&path, r#"{"host":"https://cdn.test"}"#).unwrap();

        let err = ResolverConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }
}
