use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{cursor, QueueableCommand};

use super::Terminal;
use crate::input::{Key, KeyDecoder};

/// Default bounded wait before a lone `ESC` is taken as the Escape key.
pub const DEFAULT_ESCAPE_TIMEOUT: Duration = Duration::from_millis(50);

const CHUNK: usize = 256;

/// A terminal built from a byte source and a writer.
///
/// Input bytes are read on a background thread and decoded with
/// [`KeyDecoder`]. Raw mode is a flag only: the source is assumed to
/// deliver keystrokes unbuffered already (a pipe, a pty, a test buffer).
pub struct StreamTerminal<W: Write> {
    out: W,
    rx: Receiver<Vec<u8>>,
    decoder: KeyDecoder,
    queue: VecDeque<Key>,
    /// When the currently buffered partial sequence must be resolved.
    escape_deadline: Option<Instant>,
    closed: bool,
    raw: bool,
    cursor_visible: bool,
    escape_timeout: Duration,
    width: u16,
}

impl<W: Write> StreamTerminal<W> {
    pub fn new(input: impl Read + Send + 'static, out: W) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut input = input;
        thread::spawn(move || {
            let mut buf = [0u8; CHUNK];
            loop {
                match input.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        if tx.send(buf[..n].to_vec()).is_err() {
                            break;
                        }
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        tracing::debug!(error = %e, "key stream read failed");
                        break;
                    }
                }
            }
        });

        Self {
            out,
            rx,
            decoder: KeyDecoder::new(),
            queue: VecDeque::new(),
            escape_deadline: None,
            closed: false,
            raw: false,
            cursor_visible: true,
            escape_timeout: DEFAULT_ESCAPE_TIMEOUT,
            width: 80,
        }
    }

    /// Convenience for scripted sessions: the whole input is known up front.
    pub fn scripted(input: impl Into<Vec<u8>>, out: W) -> Self {
        Self::new(io::Cursor::new(input.into()), out)
    }

    pub fn with_escape_timeout(mut self, timeout: Duration) -> Self {
        self.escape_timeout = timeout;
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn feed(&mut self, chunk: &[u8]) {
        let mut keys = Vec::new();
        for &b in chunk {
            self.decoder.feed(b, &mut keys);
        }
        self.queue.extend(keys);
        self.escape_deadline = match (self.decoder.has_pending(), self.escape_deadline) {
            (false, _) => None,
            (true, Some(d)) => Some(d),
            (true, None) => Some(Instant::now() + self.escape_timeout),
        };
    }

    /// Pull input until a key is queued, the deadline passes, or input ends.
    fn fill(&mut self, deadline: Option<Instant>) {
        while self.queue.is_empty() && !self.closed {
            let wait = match (self.escape_deadline, deadline) {
                (Some(e), Some(d)) => Some(e.min(d)),
                (e, d) => e.or(d),
            };

            let received = match wait {
                Some(until) => self
                    .rx
                    .recv_timeout(until.saturating_duration_since(Instant::now())),
                None => self.rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };

            match received {
                Ok(chunk) => self.feed(&chunk),
                Err(RecvTimeoutError::Timeout) => {
                    let now = Instant::now();
                    if self.escape_deadline.is_some_and(|e| now >= e) {
                        self.escape_deadline = None;
                        self.queue.extend(self.decoder.flush());
                    }
                    if deadline.is_some_and(|d| now >= d) {
                        return;
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    self.escape_deadline = None;
                    self.queue.extend(self.decoder.flush());
                    self.closed = true;
                }
            }
        }
    }
}

impl<W: Write> Write for StreamTerminal<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Terminal for StreamTerminal<W> {
    fn is_raw_mode(&self) -> io::Result<bool> {
        Ok(self.raw)
    }

    fn set_raw_mode(&mut self, enabled: bool) -> io::Result<()> {
        self.raw = enabled;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            self.out.queue(cursor::Show)?;
        } else {
            self.out.queue(cursor::Hide)?;
        }
        self.out.flush()?;
        self.cursor_visible = visible;
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        self.fill(None);
        Ok(self.queue.pop_front())
    }

    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if self.queue.is_empty() && self.closed {
            // Nothing will ever arrive; honour the wait so callers do not spin.
            thread::sleep(timeout);
            return Ok(None);
        }
        self.fill(Some(Instant::now() + timeout));
        Ok(self.queue.pop_front())
    }

    fn width(&self) -> u16 {
        self.width
    }
}
