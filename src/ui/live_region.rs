use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

use crate::ui::text::visible_width;

/// The block of lines a widget owns at the bottom of the terminal.
///
/// Each `update` moves back to the top of the previous frame, erases to the
/// end of the screen and writes the new frame, so nothing above the region
/// is ever touched. Lines are terminated with `\r\n` because raw mode turns
/// off output newline translation on most terminals.
#[derive(Debug)]
pub struct LiveRegion {
    /// Visible width of each line of the last frame.
    last_lines: Vec<usize>,
    width: usize,
}

impl Default for LiveRegion {
    fn default() -> Self {
        Self::new(80)
    }
}

impl LiveRegion {
    pub fn new(width: u16) -> Self {
        Self {
            last_lines: Vec::new(),
            width: usize::from(width.max(1)),
        }
    }

    /// Follow a terminal resize. The last frame is re-measured at the new
    /// width, since the terminal rewraps it too.
    pub fn resize(&mut self, width: u16) {
        self.width = usize::from(width.max(1));
    }

    /// Terminal rows the last frame occupies at the current width.
    pub fn rows(&self) -> usize {
        self.last_lines.iter().map(|&w| self.rows_for(w)).sum()
    }

    pub fn update(&mut self, out: &mut (impl Write + ?Sized), content: &str) -> io::Result<()> {
        let last_rows = self.rows();
        if last_rows > 0 {
            let up = last_rows.min(u16::MAX as usize) as u16;
            out.queue(cursor::MoveUp(up))?;
            out.queue(cursor::MoveToColumn(0))?;
            out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        }

        self.last_lines.clear();
        for line in content.lines() {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\r\n")?;
            self.last_lines.push(visible_width(line));
        }
        out.flush()
    }

    /// A line wider than the terminal wraps onto extra rows.
    fn rows_for(&self, width: usize) -> usize {
        if width == 0 {
            1
        } else {
            width.div_ceil(self.width)
        }
    }
}
