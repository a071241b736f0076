//! Semantic key events.

use crossterm::event::{KeyCode as CtKeyCode, KeyEvent, KeyModifiers};

/// Logical key identity, independent of how the terminal encoded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    Enter,
    Escape,
    Space,
    Tab,
    BackTab,
    Backspace,
    Char(char),
}

/// One logical keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Key {
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            ctrl: true,
            meta: false,
            shift: false,
        }
    }

    pub const fn shifted(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            meta: false,
            shift: true,
        }
    }

    pub const fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// Stable name used in logs and key tables.
    pub fn name(&self) -> &'static str {
        match self.code {
            KeyCode::Up => "up",
            KeyCode::Down => "down",
            KeyCode::Left => "left",
            KeyCode::Right => "right",
            KeyCode::Home => "home",
            KeyCode::End => "end",
            KeyCode::PageUp => "pageup",
            KeyCode::PageDown => "pagedown",
            KeyCode::Insert => "insert",
            KeyCode::Delete => "delete",
            KeyCode::Enter => "return",
            KeyCode::Escape => "escape",
            KeyCode::Space => "space",
            KeyCode::Tab => "tab",
            KeyCode::BackTab => "backtab",
            KeyCode::Backspace => "backspace",
            KeyCode::Char(_) => "char",
        }
    }

    /// The character to type-ahead with, if this key is a plain printable.
    pub fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.ctrl && !self.meta && !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// Escape or Ctrl+C: the session-level abort keys.
    pub fn is_cancel(&self) -> bool {
        match self.code {
            KeyCode::Escape => !self.ctrl && !self.meta,
            KeyCode::Char('c') | KeyCode::Char('C') => self.ctrl,
            _ => false,
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        Key::new(code)
    }
}

impl Key {
    /// Maps a crossterm event; keys the widgets have no use for yield `None`.
    pub fn from_crossterm(event: KeyEvent) -> Option<Self> {
        let shift = event.modifiers.contains(KeyModifiers::SHIFT);
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let meta = event.modifiers.contains(KeyModifiers::ALT)
            || event.modifiers.contains(KeyModifiers::META);

        let code = match event.code {
            CtKeyCode::Up => KeyCode::Up,
            CtKeyCode::Down => KeyCode::Down,
            CtKeyCode::Left => KeyCode::Left,
            CtKeyCode::Right => KeyCode::Right,
            CtKeyCode::Home => KeyCode::Home,
            CtKeyCode::End => KeyCode::End,
            CtKeyCode::PageUp => KeyCode::PageUp,
            CtKeyCode::PageDown => KeyCode::PageDown,
            CtKeyCode::Insert => KeyCode::Insert,
            CtKeyCode::Delete => KeyCode::Delete,
            CtKeyCode::Enter => KeyCode::Enter,
            CtKeyCode::Esc => KeyCode::Escape,
            CtKeyCode::Tab => KeyCode::Tab,
            CtKeyCode::BackTab => KeyCode::BackTab,
            CtKeyCode::Backspace => KeyCode::Backspace,
            CtKeyCode::Char(' ') => KeyCode::Space,
            CtKeyCode::Char(c) => KeyCode::Char(c),
            _ => return None,
        };

        // Shift is already folded into the character for printables.
        let shift = shift && !matches!(code, KeyCode::Char(_));

        Some(Key {
            code,
            ctrl,
            meta,
            shift,
        })
    }
}
