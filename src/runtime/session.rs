use std::io;

use crate::error::{PromptError, PromptResult};
use crate::terminal::Terminal;

/// Exclusive hold on a terminal for one widget session.
///
/// `begin` switches to raw mode and hides the cursor; `release` (or drop)
/// puts back the raw-mode flag found at the start and shows the cursor.
/// Release runs at most once.
pub struct Session<'t, T: Terminal + ?Sized> {
    term: &'t mut T,
    was_raw: bool,
    released: bool,
}

impl<'t, T: Terminal + ?Sized> Session<'t, T> {
    pub fn begin(term: &'t mut T) -> PromptResult<Self> {
        let was_raw = term.is_raw_mode().map_err(PromptError::RawMode)?;
        if !was_raw {
            term.set_raw_mode(true).map_err(PromptError::RawMode)?;
        }

        let session = Self {
            term,
            was_raw,
            released: false,
        };

        // On failure the drop of `session` restores raw mode.
        session.term.set_cursor_visible(false)?;
        tracing::debug!(was_raw, "terminal session started");
        Ok(session)
    }

    pub fn terminal(&mut self) -> &mut T {
        &mut *self.term
    }

    /// Restore the terminal. Both steps are attempted even if one fails.
    pub fn release(&mut self) -> io::Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;

        let shown = self.term.set_cursor_visible(true);
        let restored = if self.was_raw {
            Ok(())
        } else {
            self.term.set_raw_mode(false)
        };
        tracing::debug!("terminal session released");
        shown.and(restored)
    }
}

impl<T: Terminal + ?Sized> Drop for Session<'_, T> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}
