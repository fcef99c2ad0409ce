// Configuration structs

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use super::constants;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Directory holding the pre-trained model artifacts.
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,

    /// Directory holding the feedback log. Created on startup if absent.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_bind_address() -> String {
    constants::DEFAULT_BIND_ADDR.to_string()
}

fn default_models_dir() -> PathBuf {
    PathBuf::from(constants::DEFAULT_MODELS_DIR)
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(constants::DEFAULT_DATA_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            models_dir: default_models_dir(),
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        self.bind_address
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {e}", self.bind_address))?;
        Ok(())
    }
}
