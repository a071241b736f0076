//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PromptResult;

use super::loader::{self, ConfigWarning};

pub const DEFAULT_WINDOW_LIMIT: usize = 10;
pub const DEFAULT_ESCAPE_TIMEOUT_MS: u64 = 50;

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Tree navigator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Rows visible at once; the scroll window size.
    #[serde(default = "default_window_limit")]
    pub window_limit: usize,

    /// Directory loader: include dot-files
    #[serde(default)]
    pub show_hidden: bool,

    /// Directory loader: honour .gitignore and .ignore files
    #[serde(default = "default_true")]
    pub respect_ignore: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            window_limit: DEFAULT_WINDOW_LIMIT,
            show_hidden: false,
            respect_ignore: true,
        }
    }
}

/// What happens to keys pressed while a tree branch is loading.
///
/// Escape and Ctrl+C always cancel the session immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadInput {
    /// Discard them.
    #[default]
    Drop,
    /// Replay them, in order, once the load settles.
    Queue,
}

/// Keyboard input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// How long a lone ESC waits for the rest of a sequence.
    #[serde(default = "default_escape_timeout_ms")]
    pub escape_timeout_ms: u64,

    #[serde(default)]
    pub keys_during_load: LoadInput,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            escape_timeout_ms: DEFAULT_ESCAPE_TIMEOUT_MS,
            keys_during_load: LoadInput::default(),
        }
    }
}

impl InputConfig {
    pub fn escape_timeout(&self) -> Duration {
        Duration::from_millis(self.escape_timeout_ms)
    }
}

fn default_true() -> bool {
    true
}

fn default_window_limit() -> usize {
    DEFAULT_WINDOW_LIMIT
}

fn default_escape_timeout_ms() -> u64 {
    DEFAULT_ESCAPE_TIMEOUT_MS
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub input: InputConfig,

    /// Overrides for display strings, keyed like `tree.loading`.
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> PromptResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and return non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PromptResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Window limit with the lower bound applied.
    pub fn window_limit(&self) -> usize {
        self.tree.window_limit.max(1)
    }
}
