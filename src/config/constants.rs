// Project-wide constants
//
// Centralised here so paths and port numbers have one source of truth.

/// Default bind address for the HTTP server.
///
/// Port 5000 matches the development default the training team tests
/// against; pass `--bind` to override.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Per-user configuration directory under `$HOME`.
pub const CONFIG_DIR: &str = ".internsight";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Default directory holding the pre-trained model artifacts.
pub const DEFAULT_MODELS_DIR: &str = "models";

/// Default directory holding the feedback log.
pub const DEFAULT_DATA_DIR: &str = "data";
