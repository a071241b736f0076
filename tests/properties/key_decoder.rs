//! Property tests for the raw key decoder.

use proptest::prelude::*;

use termpick::{Key, KeyCode, KeyDecoder};

const SEQUENCES: &[(&[u8], KeyCode)] = &[
    (b"\x1b[A", KeyCode::Up),
    (b"\x1b[B", KeyCode::Down),
    (b"\x1b[C", KeyCode::Right),
    (b"\x1b[D", KeyCode::Left),
    (b"\x1bOA", KeyCode::Up),
    (b"\x1b[H", KeyCode::Home),
    (b"\x1b[F", KeyCode::End),
    (b"\x1b[5~", KeyCode::PageUp),
    (b"\x1b[6~", KeyCode::PageDown),
    (b"\r", KeyCode::Enter),
    (b" ", KeyCode::Space),
];

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Decoding arbitrary bytes never panics, fed whole or byte by byte.
    #[test]
    fn property_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let _ = KeyDecoder::decode(&bytes);

        let mut decoder = KeyDecoder::new();
        let mut out = Vec::new();
        for &b in &bytes {
            decoder.feed(b, &mut out);
        }
        let _ = decoder.flush();
        prop_assert!(!decoder.has_pending());
    }

    /// PROPERTY: Printable text decodes to one key per character.
    #[test]
    fn property_text_decodes_per_char(text in "[a-zA-Z0-9äöüß日本語!?.,;:]{0,32}") {
        let expected: Vec<Key> = text.chars().map(Key::char).collect();
        prop_assert_eq!(KeyDecoder::decode(text.as_bytes()), expected);
    }

    /// PROPERTY: Concatenated known sequences decode to the same keys in order.
    #[test]
    fn property_known_sequences_concatenate(picks in prop::collection::vec(0..SEQUENCES.len(), 0..24)) {
        let bytes: Vec<u8> = picks.iter().flat_map(|&i| SEQUENCES[i].0.iter().copied()).collect();
        let codes: Vec<KeyCode> = KeyDecoder::decode(&bytes).into_iter().map(|k| k.code).collect();
        let expected: Vec<KeyCode> = picks.iter().map(|&i| SEQUENCES[i].1).collect();
        prop_assert_eq!(codes, expected);
    }
}
