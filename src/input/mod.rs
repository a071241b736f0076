//! Keyboard input: semantic key events and the raw byte decoder.

mod decoder;
mod key;

pub use decoder::KeyDecoder;
pub use key::{Key, KeyCode};
