use std::fmt;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::common::error::Result;
use crate::id3::header::{Version, HEADER_SIZE};
use crate::id3::specs::{self, Encoding};

/// A 4-byte ID3v2 frame identifier such as `TIT2`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub [u8; 4]);

/// User-defined text information frame.
pub const TXXX: FrameId = FrameId(*b"TXXX");

impl FrameId {
    /// Build a frame id from a key, if the key is exactly 4 bytes long.
    pub fn from_key(key: &str) -> Option<Self> {
        let bytes: [u8; 4] = key.as_bytes().try_into().ok()?;
        Some(FrameId(bytes))
    }

    pub fn as_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or("????")
    }
}

impl fmt::Debug for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameId({})", self.as_str())
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Empty buffer with room for exactly `len` bytes.
fn alloc_payload(len: usize) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    payload.try_reserve_exact(len)?;
    Ok(payload)
}

/// Build the payload of a text frame: encoding byte, optional BOM, then one or
/// two terminated strings. Each string ends at its first NUL.
///
/// The whole payload is reserved up front, so an allocation failure is
/// reported before anything reaches the output stream.
pub fn build_text_payload(
    value1: &str,
    value2: Option<&str>,
    encoding: Encoding,
) -> Result<Vec<u8>> {
    let encoding = specs::select_encoding(encoding, value1, value2);

    let mut len = 1 + specs::encoded_len(value1, encoding);
    if let Some(v) = value2 {
        len += specs::encoded_len(v, encoding);
    }
    if encoding == Encoding::Utf16 {
        len += 2;
    }

    let mut payload = alloc_payload(len)?;
    payload.push(encoding as u8);
    if encoding == Encoding::Utf16 {
        specs::put_bom(&mut payload);
    }
    specs::put_str(&mut payload, value1, encoding);
    if let Some(v) = value2 {
        specs::put_str(&mut payload, v, encoding);
    }

    Ok(payload)
}

/// Write a text frame with one (normal frames) or two (TXXX frames) strings.
///
/// Returns the number of bytes written, frame header included.
pub fn write_text_frame<W: Write>(
    out: &mut W,
    version: Version,
    id: FrameId,
    value1: &str,
    value2: Option<&str>,
    encoding: Encoding,
) -> Result<usize> {
    let payload = build_text_payload(value1, value2, encoding)?;

    log::trace!(
        "writing {} frame: {} payload bytes, encoding {}",
        id,
        payload.len(),
        payload[0]
    );

    out.write_u32::<BigEndian>(id.as_u32())?;
    out.write_all(&version.encode_frame_size(payload.len()))?;
    out.write_u16::<BigEndian>(0)?;
    out.write_all(&payload)?;

    Ok(payload.len() + HEADER_SIZE)
}
