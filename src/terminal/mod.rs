//! The terminal read/write surface the widgets run on.
//!
//! - `CrosstermTerminal` - a real TTY (raw mode via crossterm, drawing on stderr)
//! - `StreamTerminal` - any byte reader plus writer (piped input, tests)
//! - `caps` - environment capability detection

mod caps;
mod stream;
mod tty;

use std::io::{self, Write};
use std::time::Duration;

use crate::input::Key;

pub use caps::{detect_capabilities, TerminalCapabilities};
pub use stream::StreamTerminal;
pub use tty::CrosstermTerminal;

/// Everything a widget session needs from a terminal.
///
/// Drawing goes through the `Write` supertrait.
pub trait Terminal: Write {
    /// Whether raw input mode is currently on.
    fn is_raw_mode(&self) -> io::Result<bool>;

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Block until the next key. `Ok(None)` means the input is closed.
    fn read_key(&mut self) -> io::Result<Option<Key>>;

    /// Wait at most `timeout` for a key. `Ok(None)` on timeout or closed input.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>>;

    /// Audible signal for an invalid action.
    fn bell(&mut self) -> io::Result<()> {
        self.write_all(b"\x07")?;
        self.flush()
    }

    /// Columns available for drawing.
    fn width(&self) -> u16 {
        80
    }
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn is_raw_mode(&self) -> io::Result<bool> {
        (**self).is_raw_mode()
    }

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_raw_mode(enabled)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        (**self).set_cursor_visible(visible)
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        (**self).read_key()
    }

    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        (**self).poll_key(timeout)
    }

    fn bell(&mut self) -> io::Result<()> {
        (**self).bell()
    }

    fn width(&self) -> u16 {
        (**self).width()
    }
}
