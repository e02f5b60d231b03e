use byteorder::{ByteOrder, LittleEndian};

use crate::id3::header::Version;

/// Text encoding types written into ID3v2 text frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Encoding {
    /// ISO-8859-1. Only ever selected for pure ASCII text.
    Latin1 = 0,
    /// UTF-16 with a little-endian byte order mark.
    Utf16 = 1,
    Utf8 = 3,
}

/// Byte order mark written in front of UTF-16 text.
pub const BOM: u16 = 0xFEFF;

impl Encoding {
    /// Default encoding for a given ID3 version.
    pub fn default_for_version(version: Version) -> Self {
        match version {
            Version::V3 => Encoding::Utf16,
            Version::V4 => Encoding::Utf8,
        }
    }

    /// Size of the string terminator.
    pub fn terminator_size(self) -> usize {
        match self {
            Encoding::Latin1 | Encoding::Utf8 => 1,
            Encoding::Utf16 => 2,
        }
    }
}

/// The part of `text` before its first NUL. Frame strings are NUL-terminated,
/// so anything after an embedded NUL is dropped.
pub fn until_nul(text: &str) -> &str {
    text.split('\0').next().unwrap_or("")
}

/// Pick the encoding actually used for a frame.
///
/// UTF-16 is downgraded to Latin1 when every supplied string is 7-bit ASCII,
/// which drops the BOM and halves the payload. UTF-8 is kept as requested.
pub fn select_encoding(requested: Encoding, value1: &str, value2: Option<&str>) -> Encoding {
    let is_ascii = |text: &str| until_nul(text).is_ascii();
    if requested == Encoding::Utf16 && is_ascii(value1) && value2.map_or(true, is_ascii) {
        Encoding::Latin1
    } else {
        requested
    }
}

/// Number of bytes `put_str` appends for `text`, terminator included.
pub fn encoded_len(text: &str, encoding: Encoding) -> usize {
    let text = until_nul(text);
    let body = match encoding {
        Encoding::Latin1 => text.chars().count(),
        Encoding::Utf16 => text.encode_utf16().count() * 2,
        Encoding::Utf8 => text.len(),
    };
    body + encoding.terminator_size()
}

/// Append the byte order mark for UTF-16 text.
pub fn put_bom(buf: &mut Vec<u8>) {
    let mut bom = [0u8; 2];
    LittleEndian::write_u16(&mut bom, BOM);
    buf.extend_from_slice(&bom);
}

/// Append `text` up to its first NUL, followed by the terminator, encoded
/// with `encoding`.
///
/// Latin1 maps characters above U+00FF to `?`.
pub fn put_str(buf: &mut Vec<u8>, text: &str, encoding: Encoding) {
    let text = until_nul(text);
    match encoding {
        Encoding::Latin1 => {
            buf.extend(text.chars().map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' }));
            buf.push(0);
        }
        Encoding::Utf16 => {
            let mut unit = [0u8; 2];
            for c in text.encode_utf16() {
                LittleEndian::write_u16(&mut unit, c);
                buf.extend_from_slice(&unit);
            }
            buf.extend_from_slice(&[0, 0]);
        }
        Encoding::Utf8 => {
            buf.extend_from_slice(text.as_bytes());
            buf.push(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_downgrades_utf16() {
        assert_eq!(select_encoding(Encoding::Utf16, "Song", None), Encoding::Latin1);
        assert_eq!(
            select_encoding(Encoding::Utf16, "MyKey", Some("MyValue")),
            Encoding::Latin1
        );
    }

    #[test]
    fn non_ascii_keeps_utf16() {
        assert_eq!(select_encoding(Encoding::Utf16, "Café", None), Encoding::Utf16);
        // one non-ascii string is enough
        assert_eq!(
            select_encoding(Encoding::Utf16, "key", Some("Björk")),
            Encoding::Utf16
        );
        assert_eq!(
            select_encoding(Encoding::Utf16, "ключ", Some("value")),
            Encoding::Utf16
        );
    }

    #[test]
    fn utf8_is_never_downgraded() {
        assert_eq!(select_encoding(Encoding::Utf8, "Song", None), Encoding::Utf8);
        assert_eq!(select_encoding(Encoding::Utf8, "Café", None), Encoding::Utf8);
    }

    #[test]
    fn defaults_per_version() {
        assert_eq!(Encoding::default_for_version(Version::V3), Encoding::Utf16);
        assert_eq!(Encoding::default_for_version(Version::V4), Encoding::Utf8);
    }

    #[test]
    fn put_str_terminates() {
        let mut buf = Vec::new();
        put_str(&mut buf, "ab", Encoding::Latin1);
        assert_eq!(buf, b"ab\0");

        buf.clear();
        put_str(&mut buf, "é", Encoding::Utf8);
        assert_eq!(buf, [0xC3, 0xA9, 0]);

        buf.clear();
        put_str(&mut buf, "é", Encoding::Utf16);
        assert_eq!(buf, [0xE9, 0x00, 0, 0]);
    }

    #[test]
    fn utf16_surrogate_pairs() {
        let mut buf = Vec::new();
        put_str(&mut buf, "\u{1F3B5}", Encoding::Utf16);
        assert_eq!(buf, [0x3C, 0xD8, 0xB5, 0xDF, 0, 0]);
        assert_eq!(encoded_len("\u{1F3B5}", Encoding::Utf16), 6);
    }

    #[test]
    fn encoded_len_matches_put_str() {
        for text in ["", "Song", "Café", "日本語", "\u{1F3B5} x"] {
            for enc in [Encoding::Latin1, Encoding::Utf16, Encoding::Utf8] {
                let mut buf = Vec::new();
                put_str(&mut buf, text, enc);
                assert_eq!(buf.len(), encoded_len(text, enc), "{:?} {:?}", text, enc);
            }
        }
    }

    #[test]
    fn strings_stop_at_nul() {
        assert_eq!(until_nul("a\0b"), "a");
        assert_eq!(until_nul("\0b"), "");
        assert_eq!(until_nul("plain"), "plain");

        for enc in [Encoding::Latin1, Encoding::Utf16, Encoding::Utf8] {
            let mut buf = Vec::new();
            put_str(&mut buf, "ab\0cd", enc);
            let mut expected = Vec::new();
            put_str(&mut expected, "ab", enc);
            assert_eq!(buf, expected, "{:?}", enc);
            assert_eq!(encoded_len("ab\0cd", enc), buf.len());
        }
    }

    #[test]
    fn text_after_nul_does_not_affect_selection() {
        assert_eq!(select_encoding(Encoding::Utf16, "ok\0é", None), Encoding::Latin1);
        assert_eq!(
            select_encoding(Encoding::Utf16, "key", Some("v\0ключ")),
            Encoding::Latin1
        );
    }

    #[test]
    fn latin1_replaces_unmappable_chars() {
        let mut buf = Vec::new();
        put_str(&mut buf, "é→", Encoding::Latin1);
        assert_eq!(buf, [0xE9, b'?', 0]);
    }

    #[test]
    fn bom_is_little_endian() {
        let mut buf = Vec::new();
        put_bom(&mut buf);
        assert_eq!(buf, [0xFF, 0xFE]);
    }
}
