use std::time::Duration;

use crate::config::{ColorMode, Config, LoadInput};
use crate::i18n::{Translate, Vocab};
use crate::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::text::StyledText;
use crate::ui::theme::Icon;

/// Presentation decisions shared by every widget in a process.
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub window_limit: usize,
    pub escape_timeout: Duration,
    pub keys_during_load: LoadInput,
    translator: Box<dyn Translate>,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorMode>, cli_ascii: bool, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(cli_color, cli_ascii, config, caps)
    }

    /// Like [`UiContext::new`] with capabilities the caller already detected.
    pub fn from_caps(
        cli_color: Option<ColorMode>,
        cli_ascii: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = !cli_ascii && config.output.unicode && caps.supports_unicode;

        let color = match cli_color.unwrap_or(config.output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            color,
            unicode,
            window_limit: config.window_limit(),
            escape_timeout: config.input.escape_timeout(),
            keys_during_load: config.input.keys_during_load,
            translator: Box::new(Vocab::new(config.messages.clone())),
        }
    }

    /// Monochrome ASCII output with default settings; stable across machines.
    pub fn plain() -> Self {
        let config = Config::default();
        Self {
            color: false,
            unicode: false,
            window_limit: config.window_limit(),
            escape_timeout: config.input.escape_timeout(),
            keys_during_load: config.input.keys_during_load,
            translator: Box::new(Vocab::default()),
        }
    }

    pub fn with_window_limit(mut self, limit: usize) -> Self {
        self.window_limit = limit.max(1);
        self
    }

    pub fn with_keys_during_load(mut self, policy: LoadInput) -> Self {
        self.keys_during_load = policy;
        self
    }

    pub fn with_unicode(mut self, unicode: bool) -> Self {
        self.unicode = unicode;
        self
    }

    pub fn with_translator(mut self, translator: impl Translate + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    pub fn icon(&self, icon: Icon) -> &'static str {
        icon.render(self.unicode)
    }

    pub fn paint(&self, text: StyledText<'_>) -> String {
        text.render(self.color)
    }
}
