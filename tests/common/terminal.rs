//! Scripted terminals for driving whole widget sessions.

use std::io::{self, Write};
use std::time::Duration;

use termpick::config::LoadInput;
use termpick::{Key, StreamTerminal, Terminal, UiContext};

pub const UP: &[u8] = b"\x1b[A";
pub const DOWN: &[u8] = b"\x1b[B";
pub const RIGHT: &[u8] = b"\x1b[C";
pub const LEFT: &[u8] = b"\x1b[D";
pub const SHIFT_UP: &[u8] = b"\x1b[1;2A";
pub const SHIFT_DOWN: &[u8] = b"\x1b[1;2B";
pub const ENTER: &[u8] = b"\r";
pub const SPACE: &[u8] = b" ";
pub const ESC: &[u8] = b"\x1b";
pub const CTRL_C: &[u8] = b"\x03";

pub fn keys(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}

pub fn scripted(parts: &[&[u8]]) -> StreamTerminal<Vec<u8>> {
    StreamTerminal::scripted(keys(parts), Vec::new())
}

pub fn output(term: &StreamTerminal<Vec<u8>>) -> String {
    String::from_utf8_lossy(term.writer()).into_owned()
}

/// Plain ASCII UI that replays keys pressed during a load, so scripted
/// input does not depend on how fast a loader thread runs.
pub fn queued_ui() -> UiContext {
    UiContext::plain().with_keys_during_load(LoadInput::Queue)
}

/// The last line written before the cursor was shown again.
pub fn confirmation_line(out: &str) -> &str {
    out.trim_end_matches("\x1b[?25h")
        .trim_end_matches("\r\n")
        .rsplit("\r\n")
        .next()
        .unwrap_or("")
        .rsplit("\x1b[J")
        .next()
        .unwrap_or("")
}

/// In-memory terminal with configurable failures.
#[derive(Debug, Default)]
pub struct FakeTerminal {
    pub raw: bool,
    pub cursor_visible: bool,
    pub refuse_raw: bool,
    pub lose_input: bool,
    pub out: Vec<u8>,
}

impl FakeTerminal {
    pub fn refusing_raw_mode() -> Self {
        Self {
            cursor_visible: true,
            refuse_raw: true,
            ..Self::default()
        }
    }

    pub fn losing_input() -> Self {
        Self {
            cursor_visible: true,
            lose_input: true,
            ..Self::default()
        }
    }
}

impl Write for FakeTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Terminal for FakeTerminal {
    fn is_raw_mode(&self) -> io::Result<bool> {
        Ok(self.raw)
    }

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        if enabled && self.refuse_raw {
            return Err(io::Error::other("not a terminal"));
        }
        self.raw = enabled;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        if self.lose_input {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "input lost"));
        }
        Ok(None)
    }

    fn poll_key(&mut self, _timeout: Duration) -> io::Result<Option<Key>> {
        self.read_key()
    }
}
