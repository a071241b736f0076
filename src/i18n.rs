//! Display strings.
//!
//! Widgets look up every user-visible word through [`Translate`]. The
//! lookup only changes what is drawn, never how keys are handled.

use std::collections::BTreeMap;

/// Translation lookup: `t("tree.loading")` returns the localized text.
pub trait Translate {
    fn t(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn t(&self, key: &str) -> String {
        self(key)
    }
}

const DEFAULTS: &[(&str, &str)] = &[
    ("cancelled", "cancelled"),
    ("nothing", "nothing selected"),
    ("tree.loading", "loading"),
    ("tree.empty", "(empty)"),
    ("tree.more_above", "more above"),
    ("tree.more_below", "more below"),
    ("tree.help", "up/down move, left/right fold, enter select, esc cancel"),
    (
        "tree.help_multi",
        "up/down move, left/right fold, space check, enter submit, esc cancel",
    ),
    ("tree.invalid_file", "select a file"),
    ("tree.invalid_dir", "select a directory"),
    ("sort.help", "up/down move, space grab, shift+up/down drag, r reset, enter submit"),
    ("sort.grabbed", "moving"),
];

/// English defaults with per-key overrides (from the `[messages]` table).
#[derive(Debug, Clone, Default)]
pub struct Vocab {
    overrides: BTreeMap<String, String>,
}

impl Vocab {
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.overrides.insert(key.into(), value.into());
    }
}

impl Translate for Vocab {
    fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.get(key) {
            return v.clone();
        }
        DEFAULTS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
            // Unknown keys render as themselves so a typo is visible, not fatal.
            .unwrap_or_else(|| key.to_string())
    }
}
