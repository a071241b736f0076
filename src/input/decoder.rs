//! Raw byte stream to [`Key`] decoding.
//!
//! The decoder is a small state machine fed one byte at a time. Escape
//! sequences are buffered until they complete; a lone `ESC` stays pending
//! until either the next byte disambiguates it or the caller decides the
//! bounded wait has elapsed and calls [`KeyDecoder::flush`].

use super::key::{Key, KeyCode};

const ESC: u8 = 0x1b;

/// Sequences longer than this are garbage (or a paste) and are dropped.
const MAX_SEQUENCE_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    /// Saw `ESC`.
    Escape,
    /// Inside `ESC [` ... waiting for a final byte.
    Csi,
    /// Saw `ESC O`, next byte is the final.
    Ss3,
    /// Overlong CSI: swallow bytes up to its final byte.
    Discard,
    /// Inside a multi-byte UTF-8 character.
    Utf8 { needed: usize },
}

#[derive(Debug)]
pub struct KeyDecoder {
    state: State,
    buf: Vec<u8>,
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self {
            state: State::Ground,
            buf: Vec::with_capacity(8),
        }
    }

    /// True while an incomplete sequence is buffered.
    pub fn has_pending(&self) -> bool {
        self.state != State::Ground
    }

    /// Decode a complete chunk of input, resolving anything left pending at
    /// the end as if the escape wait had expired.
    pub fn decode(bytes: &[u8]) -> Vec<Key> {
        let mut decoder = Self::new();
        let mut out = Vec::new();
        for &b in bytes {
            decoder.feed(b, &mut out);
        }
        out.extend(decoder.flush());
        out
    }

    /// Feed a single byte, appending any completed keys to `out`.
    pub fn feed(&mut self, byte: u8, out: &mut Vec<Key>) {
        match self.state {
            State::Ground => self.ground(byte, out),
            State::Escape => match byte {
                b'[' => {
                    self.state = State::Csi;
                    self.buf.clear();
                }
                b'O' => self.state = State::Ss3,
                ESC => {
                    // Double escape: the first one stands alone.
                    out.push(Key::new(KeyCode::Escape));
                    self.state = State::Escape;
                }
                0x20..=0x7e => {
                    self.reset();
                    let mut key = control_or_char(byte);
                    key.meta = true;
                    out.push(key);
                }
                _ => {
                    out.push(Key::new(KeyCode::Escape));
                    self.reset();
                    self.ground(byte, out);
                }
            },
            State::Ss3 => {
                self.reset();
                if let Some(code) = final_code(byte) {
                    out.push(Key::new(code));
                }
            }
            State::Csi => {
                if (0x40..=0x7e).contains(&byte) {
                    let params = std::mem::take(&mut self.buf);
                    self.reset();
                    if let Some(key) = csi_key(&params, byte) {
                        out.push(key);
                    }
                } else if (0x20..=0x3f).contains(&byte) {
                    self.buf.push(byte);
                    if self.buf.len() > MAX_SEQUENCE_LEN {
                        self.buf.clear();
                        self.state = State::Discard;
                    }
                } else {
                    // Not a valid CSI byte: abandon the sequence.
                    self.reset();
                    self.ground(byte, out);
                }
            }
            State::Discard => {
                if (0x40..=0x7e).contains(&byte) {
                    self.reset();
                }
            }
            State::Utf8 { needed } => {
                if byte & 0xc0 != 0x80 {
                    self.reset();
                    self.ground(byte, out);
                    return;
                }
                self.buf.push(byte);
                if needed > 1 {
                    self.state = State::Utf8 {
                        needed: needed - 1,
                    };
                    return;
                }
                let bytes = std::mem::take(&mut self.buf);
                self.reset();
                if let Some(c) = std::str::from_utf8(&bytes)
                    .ok()
                    .and_then(|s| s.chars().next())
                {
                    out.push(Key::char(c));
                }
            }
        }
    }

    /// Resolve whatever is pending after the bounded wait expired.
    ///
    /// A lone `ESC` becomes Escape; a truncated sequence is discarded.
    pub fn flush(&mut self) -> Option<Key> {
        let state = self.state;
        self.reset();
        match state {
            State::Escape => Some(Key::new(KeyCode::Escape)),
            _ => None,
        }
    }

    fn reset(&mut self) {
        self.state = State::Ground;
        self.buf.clear();
    }

    fn ground(&mut self, byte: u8, out: &mut Vec<Key>) {
        match byte {
            ESC => self.state = State::Escape,
            0xc0..=0xdf => self.start_utf8(byte, 1),
            0xe0..=0xef => self.start_utf8(byte, 2),
            0xf0..=0xf7 => self.start_utf8(byte, 3),
            0x80..=0xff => {}
            _ => out.push(control_or_char(byte)),
        }
    }

    fn start_utf8(&mut self, lead: u8, needed: usize) {
        self.buf.clear();
        self.buf.push(lead);
        self.state = State::Utf8 { needed };
    }
}

fn control_or_char(byte: u8) -> Key {
    match byte {
        b'\r' | b'\n' => Key::new(KeyCode::Enter),
        b'\t' => Key::new(KeyCode::Tab),
        0x7f | 0x08 => Key::new(KeyCode::Backspace),
        b' ' => Key::new(KeyCode::Space),
        0x01..=0x1a => Key::ctrl((b'a' + byte - 1) as char),
        0x00 => Key::ctrl(' '),
        0x1c..=0x1f => Key::ctrl((b'4' + byte - 0x1c) as char),
        _ => Key::char(byte as char),
    }
}

/// Final bytes shared by CSI and SS3 forms.
fn final_code(byte: u8) -> Option<KeyCode> {
    match byte {
        b'A' => Some(KeyCode::Up),
        b'B' => Some(KeyCode::Down),
        b'C' => Some(KeyCode::Right),
        b'D' => Some(KeyCode::Left),
        b'H' => Some(KeyCode::Home),
        b'F' => Some(KeyCode::End),
        _ => None,
    }
}

fn csi_key(params: &[u8], final_byte: u8) -> Option<Key> {
    let params = std::str::from_utf8(params).ok()?;
    let mut fields = params.split(';');
    let first = fields.next().unwrap_or("");
    let modifier = fields.next().and_then(|m| m.parse::<u8>().ok());

    let code = match final_byte {
        b'Z' => KeyCode::BackTab,
        b'~' => match first {
            "1" | "7" => KeyCode::Home,
            "2" => KeyCode::Insert,
            "3" => KeyCode::Delete,
            "4" | "8" => KeyCode::End,
            "5" => KeyCode::PageUp,
            "6" => KeyCode::PageDown,
            _ => return None,
        },
        other => {
            // Arrow-style finals only accept an empty or `1` first param.
            if !(first.is_empty() || first == "1") {
                return None;
            }
            final_code(other)?
        }
    };

    let mut key = Key::new(code);
    if let Some(m) = modifier {
        let bits = m.saturating_sub(1);
        key.shift = bits & 0b001 != 0;
        key.meta = bits & 0b010 != 0;
        key.ctrl = bits & 0b100 != 0;
    }
    Some(key)
}
