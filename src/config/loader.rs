//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PromptError, PromptResult};

use super::types::{ColorMode, Config};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PromptResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> PromptResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PromptError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Default user config location: `<config dir>/termpick/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("termpick").join("config.toml"))
}

/// Load an explicit config file, else the user config if present, else
/// defaults. Environment overrides are applied last.
///
/// An explicit path must exist; a missing user config is not an error.
pub fn load_or_default(explicit: Option<&Path>) -> PromptResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => load_with_warnings(&path)?,
            None => (Config::default(), Vec::new()),
        },
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (TERMPICK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // TERMPICK_COLOR
    if let Some(mode) = get_env("TERMPICK_COLOR") {
        config.output.color = match mode.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // TERMPICK_UNICODE
    if let Some(val) = get_env("TERMPICK_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    // TERMPICK_WINDOW_LIMIT (ignored unless a positive integer)
    if let Some(limit) = get_env("TERMPICK_WINDOW_LIMIT")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
    {
        config.tree.window_limit = limit;
    }

    // TERMPICK_ESCAPE_TIMEOUT_MS
    if let Some(ms) = get_env("TERMPICK_ESCAPE_TIMEOUT_MS").and_then(|v| v.trim().parse().ok()) {
        config.input.escape_timeout_ms = ms;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "color",
        "unicode",
        "tree",
        "window_limit",
        "show_hidden",
        "respect_ignore",
        "input",
        "escape_timeout_ms",
        "keys_during_load",
        "messages",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
