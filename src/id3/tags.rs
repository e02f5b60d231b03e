use std::io::Write;

use crate::common::error::Result;
use crate::id3::frames::{self, FrameId, TXXX};
use crate::id3::header::Version;
use crate::id3::specs::Encoding;
use crate::id3::tables::{self, COMMON_TAGS};

/// Ordered key/value metadata to be written into a tag.
/// Duplicate keys are kept; each entry becomes its own frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    pub fn new() -> Self {
        Metadata {
            entries: Vec::with_capacity(16),
        }
    }

    /// Append an entry.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        for (k, v) in iter {
            metadata.add(k, v);
        }
        metadata
    }
}

/// Where a metadata entry ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// A dedicated text frame holding the value.
    Text(FrameId),
    /// A TXXX frame holding the key as description.
    UserText(&'a str),
}

fn check_tag(key: &str, table: &[&str]) -> Option<FrameId> {
    if !key.starts_with('T') {
        return None;
    }
    let id = FrameId::from_key(key)?;
    table.contains(&key).then_some(id)
}

/// Map an already converted key to a frame: common table first, then the
/// version table, else TXXX.
pub fn resolve(key: &str, version: Version) -> Resolved<'_> {
    check_tag(key, COMMON_TAGS)
        .or_else(|| check_tag(key, tables::version_tags(version)))
        .map_or(Resolved::UserText(key), Resolved::Text)
}

/// Convert, resolve and write one metadata entry as exactly one frame.
/// Returns the number of bytes written.
pub fn write_entry<W: Write>(
    out: &mut W,
    version: Version,
    key: &str,
    value: &str,
    encoding: Encoding,
) -> Result<usize> {
    let key = tables::convert_key(key, version);
    match resolve(key, version) {
        Resolved::Text(id) => frames::write_text_frame(out, version, id, value, None, encoding),
        Resolved::UserText(desc) => {
            log::debug!("no frame for {:?}, writing as TXXX", desc);
            frames::write_text_frame(out, version, TXXX, desc, Some(value), encoding)
        }
    }
}
