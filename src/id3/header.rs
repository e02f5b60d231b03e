use crate::common::error::{Id3Error, Result};

/// Size of the tag header, and of every frame header.
pub const HEADER_SIZE: usize = 10;

/// Largest value a synchsafe integer can hold (28 bits).
pub const SYNCSAFE_MAX: u32 = 0x0FFF_FFFF;

/// Syncsafe integer encoding used in ID3v2 tags.
/// Each byte uses only 7 bits (MSB is always 0).
pub struct SyncsafeInt;

impl SyncsafeInt {
    /// Encode `value` into 4 syncsafe bytes. Bits above the low 28 are dropped.
    pub fn encode(value: u32) -> [u8; 4] {
        [
            (value >> 21 & 0x7F) as u8,
            (value >> 14 & 0x7F) as u8,
            (value >> 7 & 0x7F) as u8,
            (value & 0x7F) as u8,
        ]
    }

    /// Decode 4 syncsafe bytes. The high bit of each byte is ignored.
    pub fn decode(data: &[u8; 4]) -> u32 {
        data.iter().fold(0u32, |acc, &b| (acc << 7) | (b as u32 & 0x7F))
    }

    /// Check if data could be a valid syncsafe integer (no high bits set).
    pub fn is_valid(data: &[u8]) -> bool {
        data.iter().all(|&b| b & 0x80 == 0)
    }
}

/// ID3v2 major version written by this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Version {
    /// ID3v2.3: raw 32-bit frame sizes.
    V3 = 3,
    /// ID3v2.4: syncsafe frame sizes.
    #[default]
    V4 = 4,
}

impl Version {
    pub fn major(self) -> u8 {
        self as u8
    }

    /// Encode a frame payload length the way this version's frame header expects it.
    /// Lengths that do not fit are truncated.
    pub fn encode_frame_size(self, len: usize) -> [u8; 4] {
        match self {
            Version::V3 => (len as u32).to_be_bytes(),
            Version::V4 => SyncsafeInt::encode(len as u32),
        }
    }
}

impl TryFrom<u8> for Version {
    type Error = Id3Error;

    fn try_from(major: u8) -> Result<Self> {
        match major {
            3 => Ok(Version::V3),
            4 => Ok(Version::V4),
            _ => Err(Id3Error::UnsupportedVersion(major)),
        }
    }
}
