use std::io::{Cursor, Seek, SeekFrom, Write};

use crate::common::error::{Id3Error, Result};
use crate::id3::header::{SyncsafeInt, Version};
use crate::id3::specs::Encoding;
use crate::id3::tags::{self, Metadata};

/// Options for a tag block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOptions {
    pub version: Version,
    /// 3-byte identifier at the start of the header, `ID3` for MP3.
    pub magic: [u8; 3],
    /// Requested text encoding; `None` uses the version default.
    pub encoding: Option<Encoding>,
}

impl Default for TagOptions {
    fn default() -> Self {
        TagOptions {
            version: Version::V4,
            magic: *b"ID3",
            encoding: None,
        }
    }
}

impl TagOptions {
    /// Options for the given major version (3 or 4).
    pub fn new(major: u8) -> Result<Self> {
        Ok(Self::default().with_version(Version::try_from(major)?))
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_magic(mut self, magic: [u8; 3]) -> Self {
        self.magic = magic;
        self
    }

    /// Set the magic from text, which must be exactly 3 bytes.
    pub fn with_magic_str(self, magic: &str) -> Result<Self> {
        let magic: [u8; 3] = magic
            .as_bytes()
            .try_into()
            .map_err(|_| Id3Error::InvalidMagic(magic.to_string()))?;
        Ok(self.with_magic(magic))
    }

    /// Request `encoding` for every frame instead of the version default.
    ///
    /// UTF-16 is still downgraded to Latin1 for all-ASCII frames. An explicit
    /// Latin1 request is written as-is: characters above U+00FF become `?`.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Encoding requested for every frame of the tag.
    pub fn text_encoding(&self) -> Encoding {
        self.encoding
            .unwrap_or_else(|| Encoding::default_for_version(self.version))
    }
}

/// State of a tag block being written.
///
/// Created by [`TagWriter::start`], which writes the header, and consumed by
/// [`TagWriter::finish`], which fills in the size field.
#[derive(Debug)]
pub struct TagWriter {
    version: Version,
    encoding: Encoding,
    size_offset: u64,
    len: u64,
}

impl TagWriter {
    /// Write the tag header with a zero size placeholder.
    pub fn start<W: Write + Seek>(out: &mut W, options: &TagOptions) -> Result<Self> {
        out.write_all(&options.magic)?;
        out.write_all(&[options.version.major(), 0, 0])?;

        let size_offset = out.stream_position()?;
        out.write_all(&[0; 4])?;

        log::debug!(
            "started ID3v2.{} tag, size field at offset {}",
            options.version.major(),
            size_offset
        );

        Ok(TagWriter {
            version: options.version,
            encoding: options.text_encoding(),
            size_offset,
            len: 0,
        })
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Stream offset of the size field.
    pub fn size_offset(&self) -> u64 {
        self.size_offset
    }

    /// Bytes written after the header so far.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Write one metadata entry as a frame.
    pub fn write_entry<W: Write>(&mut self, out: &mut W, key: &str, value: &str) -> Result<usize> {
        let n = tags::write_entry(out, self.version, key, value, self.encoding)?;
        self.len += n as u64;
        Ok(n)
    }

    /// Write every metadata entry in order. Stops at the first error, leaving
    /// the frames already written in place.
    pub fn write_metadata<W: Write>(&mut self, out: &mut W, metadata: &Metadata) -> Result<()> {
        for (key, value) in metadata.iter() {
            self.write_entry(out, key, value)?;
        }
        Ok(())
    }

    /// Backpatch the size field and return the cursor to where it was.
    /// Returns the tag size as written (truncated to 28 bits).
    pub fn finish<W: Write + Seek>(self, out: &mut W) -> Result<u32> {
        let cur_pos = out.stream_position()?;
        let size = SyncsafeInt::encode(self.len as u32);

        out.seek(SeekFrom::Start(self.size_offset))?;
        out.write_all(&size)?;
        out.seek(SeekFrom::Start(cur_pos))?;

        log::debug!("finished ID3v2.{} tag, {} bytes of frames", self.version.major(), self.len);

        Ok(SyncsafeInt::decode(&size))
    }
}

/// Write a complete tag for `metadata` to `out`.
pub fn write_simple<W: Write + Seek>(
    out: &mut W,
    metadata: &Metadata,
    options: &TagOptions,
) -> Result<()> {
    let mut writer = TagWriter::start(out, options)?;
    writer.write_metadata(out, metadata)?;
    writer.finish(out)?;
    Ok(())
}

/// Build a complete ID3v2 tag, header included, in memory.
pub fn render_tag(metadata: &Metadata, options: &TagOptions) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    write_simple(&mut out, metadata, options)?;
    Ok(out.into_inner())
}
