// Configuration loader
// Reads ~/.internsight/config.toml when present, otherwise falls back to
// defaults with environment overrides.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::constants;
use super::settings::Config;

/// Load configuration.
///
/// An explicit `path` must exist and parse; with no explicit path the
/// per-user config file is used if present, else built-in defaults. The
/// `INTERNSIGHT_BIND` environment variable overrides the bind address in
/// every case.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => match user_config_path() {
            Some(path) if path.exists() => read_config_file(&path)?,
            _ => Config::default(),
        },
    };

    if let Ok(addr) = std::env::var("INTERNSIGHT_BIND") {
        if !addr.is_empty() {
            config.bind_address = addr;
        }
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::home_dir().map(|home| home.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
}

fn read_config_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
