//! Configuration module
//!
//! Resolution order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (TERMPICK_*)
//! 3. `--config PATH`, or the user config (`<config dir>/termpick/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{default_config_path, load_or_default, with_env_overrides, ConfigWarning};
pub use types::{
    ColorMode, Config, InputConfig, LoadInput, OutputConfig, TreeConfig, DEFAULT_ESCAPE_TIMEOUT_MS,
    DEFAULT_WINDOW_LIMIT,
};
