use crossterm::style::Stylize;
use unicode_width::UnicodeWidthChar;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Error,
    Warning,
    Accent,
    Dim,
}

/// A piece of frame text with a semantic tone.
///
/// Colour is decided at render time so frames can be produced identically
/// for colour and monochrome terminals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText<'a> {
    text: &'a str,
    tone: Tone,
    bold: bool,
}

impl<'a> StyledText<'a> {
    pub fn new(text: &'a str, tone: Tone) -> Self {
        Self {
            text,
            tone,
            bold: false,
        }
    }

    pub fn plain(text: &'a str) -> Self {
        Self::new(text, Tone::Plain)
    }

    pub fn accent(text: &'a str) -> Self {
        Self::new(text, Tone::Accent)
    }

    pub fn dim(text: &'a str) -> Self {
        Self::new(text, Tone::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, color: bool) -> String {
        if !color || self.text.is_empty() {
            return self.text.to_string();
        }

        let color = match self.tone {
            Tone::Plain => None,
            Tone::Success => Some(theme::colors::SUCCESS),
            Tone::Error => Some(theme::colors::ERROR),
            Tone::Warning => Some(theme::colors::WARNING),
            Tone::Accent => Some(theme::colors::INFO),
            Tone::Dim => Some(theme::colors::DIM),
        };

        match (color, self.bold) {
            (None, false) => self.text.to_string(),
            (None, true) => format!("{}", self.text.bold()),
            (Some(c), false) => format!("{}", self.text.with(c)),
            (Some(c), true) => format!("{}", self.text.with(c).bold()),
        }
    }
}

/// Display columns taken by `s`, ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                // CSI runs until a final byte in 0x40..=0x7e.
                for c in chars.by_ref() {
                    if ('\x40'..='\x7e').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        width += c.width().unwrap_or(0);
    }
    width
}
