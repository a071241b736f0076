use std::io::{self, Stderr, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, terminal, ExecutableCommand};

use super::Terminal;
use crate::input::Key;

/// The process's controlling terminal.
///
/// Keys come from crossterm's event reader; frames are drawn on stderr so
/// stdout stays free for the selected value.
pub struct CrosstermTerminal {
    out: Stderr,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self { out: io::stderr() }
    }

    fn next_key(event: Event) -> Option<Key> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Key::from_crossterm(key),
            _ => None,
        }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for CrosstermTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Terminal for CrosstermTerminal {
    fn is_raw_mode(&self) -> io::Result<bool> {
        terminal::is_raw_mode_enabled()
    }

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        }
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            self.out.execute(cursor::Show)?;
        } else {
            self.out.execute(cursor::Hide)?;
        }
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        loop {
            if let Some(key) = Self::next_key(event::read()?) {
                return Ok(Some(key));
            }
        }
    }

    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if event::poll(timeout)? {
            return Ok(Self::next_key(event::read()?));
        }
        Ok(None)
    }

    fn width(&self) -> u16 {
        terminal::size().map(|(w, _)| w).unwrap_or(80)
    }
}
