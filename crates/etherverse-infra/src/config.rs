//! Configuration loader for Etherverse.
//!
//! Reads `config.toml` from an explicit path (`--config` / `ETHERVERSE_CONFIG`)
//! or from `{config_dir}/etherverse/config.toml`, and deserializes it into
//! [`EtherverseConfig`]. The implicit location falls back to defaults when the
//! file is missing or malformed; an explicit path must exist and parse.

use std::path::{Path, PathBuf};

use etherverse_types::config::EtherverseConfig;
use etherverse_types::error::ConfigError;

/// `{config_dir}/etherverse/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("etherverse").join("config.toml"))
}

/// Load configuration.
///
/// - `Some(path)`: the file must exist and parse, see [`load_config_strict`].
/// - `None`: [`load_config`] on the default location, or defaults if there is
///   no config directory.
pub async fn resolve_config(explicit: Option<&Path>) -> Result<EtherverseConfig, ConfigError> {
    match explicit {
        Some(path) => load_config_strict(path).await,
        None => match default_config_path() {
            Some(path) => Ok(load_config(&path).await),
            None => Ok(EtherverseConfig::default()),
        },
    }
}

/// Load configuration from `config_path`, falling back to defaults.
///
/// - If the file does not exist, returns [`EtherverseConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
pub async fn load_config(config_path: &Path) -> EtherverseConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return EtherverseConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return EtherverseConfig::default();
        }
    };

    match toml::from_str::<EtherverseConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            EtherverseConfig::default()
        }
    }
}

/// Load configuration from `config_path`, failing on any read or parse error.
pub async fn load_config_strict(config_path: &Path) -> Result<EtherverseConfig, ConfigError> {
    let content = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;

    toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: config_path.to_path_buf(),
        message: err.to_string(),
    })
}
