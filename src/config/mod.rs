use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::Role;

const DEFAULT_TICK_RATE_MS: u64 = 200;
const DEFAULT_STATUS_TTL_MS: u64 = 3000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Role accepted upstream; the shell starts logged in with it.
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub tick_rate_ms: Option<u64>,

    #[serde(default)]
    pub status_ttl_ms: Option<u64>,

    #[serde(default)]
    pub log_file: Option<PathBuf>,

    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str::<Config>(content).context("parse config")
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS).max(10))
    }

    pub fn status_ttl(&self) -> Duration {
        Duration::from_millis(self.status_ttl_ms.unwrap_or(DEFAULT_STATUS_TTL_MS))
    }

    /// Startup role, if one is configured. Unknown names are an error, never a default.
    pub fn startup_role(&self) -> Result<Option<Role>> {
        self.role
            .as_deref()
            .map(|raw| raw.parse::<Role>())
            .transpose()
            .context("config field `role`")
    }
}

/// Load the configuration.
///
/// An explicit path must exist and parse. The implicit locations fall back to
/// defaults when the file is absent or broken.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };
    match load_from(&path) {
        Ok(config) => Ok(config),
        Err(_) => Ok(Config::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Config> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(err).with_context(|| format!("config not found: {}", path.display()));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read config {}", path.display()));
        }
    };
    Config::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("MEDSUPPLY_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("medsupply").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("medsupply").join("config.toml"));
    }

    directories::ProjectDirs::from("ai", "medsupply", "medsupply")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Log file used when neither `--log-file` nor `log_file` is given.
pub fn default_log_file() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("medsupply.log"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("medsupply"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("medsupply"));
    }
    directories::ProjectDirs::from("ai", "medsupply", "medsupply")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(200));
        assert_eq!(config.status_ttl(), Duration::from_millis(3000));
        assert_eq!(config.startup_role().unwrap(), None);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml_str(
            r#"
            role = "supplier"
            tick_rate_ms = 50
            status_ttl_ms = 1500
            log_file = "/tmp/medsupply-test.log"
            log_filter = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.startup_role().unwrap(), Some(Role::Supplier));
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
        assert_eq!(config.status_ttl(), Duration::from_millis(1500));
        assert_eq!(
            config.log_file.as_deref(),
            Some(Path::new("/tmp/medsupply-test.log"))
        );
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_tick_rate_has_floor() {
        let config = Config::from_toml_str("tick_rate_ms = 0").unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
    }

    #[test]
    fn test_invalid_role_is_error() {
        let config = Config::from_toml_str(r#"role = "root""#).unwrap();
        assert!(config.startup_role().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_toml_str("theme = \"dark\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "role = \"community\"\n").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.startup_role().unwrap(), Some(Role::Community));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("config not found"));
    }

    #[test]
    fn test_explicit_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        assert!(load(Some(&path)).is_err());
    }

    #[test]
    fn test_implicit_config_falls_back_to_defaults() {
        // Only test in this crate touching MEDSUPPLY_CONFIG
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::env::set_var("MEDSUPPLY_CONFIG", &path);
        let missing = load(None).unwrap();
        assert_eq!(missing.tick_rate(), Duration::from_millis(200));
        assert_eq!(missing.startup_role().unwrap(), None);

        fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        let malformed = load(None).unwrap();
        assert_eq!(malformed.tick_rate(), Duration::from_millis(200));

        fs::write(&path, "tick_rate_ms = 50\n").unwrap();
        let valid = load(None).unwrap();
        assert_eq!(valid.tick_rate(), Duration::from_millis(50));
        std::env::remove_var("MEDSUPPLY_CONFIG");
    }
}
