pub mod header;
pub mod specs;
pub mod frames;
pub mod tables;
pub mod tags;
pub mod writer;

use std::path::Path;

use crate::common::error::Result;
use crate::common::util;

pub use header::{SyncsafeInt, Version};
pub use specs::Encoding;
pub use tags::Metadata;
pub use writer::{render_tag, write_simple, TagOptions, TagWriter};

/// Write a new ID3v2 tag in front of the existing contents of a file.
/// Returns the full tag length, header included.
pub fn prepend_tag<P: AsRef<Path>>(
    path: P,
    metadata: &Metadata,
    options: &TagOptions,
) -> Result<usize> {
    let tag = render_tag(metadata, options)?;

    let mut file = util::open_rw(path.as_ref())?;
    util::insert_bytes(&mut file, &tag, 0)?;

    log::debug!("prepended {} byte tag to {}", tag.len(), path.as_ref().display());

    Ok(tag.len())
}
