//! Service configuration with TOML file support.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the Credo service.
///
/// Can be loaded from a TOML file via [`ServiceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). File settings are the base; CLI
/// flags and env vars override them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Data directory for the certificate store.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Port the verification pages are served on.
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Bound on a single store lookup, in milliseconds. Expiry renders the
    /// same generic failure as a no-match.
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,

    /// LMDB map size in bytes.
    #[serde(default = "default_map_size")]
    pub map_size: usize,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ServiceConfig {
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            http_port: default_http_port(),
            lookup_timeout_ms: default_lookup_timeout_ms(),
            map_size: default_map_size(),
            log_level: default_log_level(),
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_data_dir() -> PathBuf {
    PathBuf::from("./credo_data")
}

fn default_http_port() -> u16 {
    8080
}

fn default_lookup_timeout_ms() -> u64 {
    5000
}

fn default_map_size() -> usize {
    credo_store_lmdb::environment::DEFAULT_MAP_SIZE
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.lookup_timeout_ms, 5000);
        assert_eq!(config.data_dir, PathBuf::from("./credo_data"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: ServiceConfig = toml::from_str(
            r#"
            http_port = 9090
            lookup_timeout_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.http_port, 9090);
        assert_eq!(config.lookup_timeout_ms, 250);
        assert_eq!(config.data_dir, PathBuf::from("./credo_data"));
    }
}
