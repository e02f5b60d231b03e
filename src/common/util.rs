use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::common::error::Result;

/// Insert `data` at `offset` in the file, shifting existing data forward.
pub fn insert_bytes(fobj: &mut File, data: &[u8], offset: u64) -> Result<()> {
    if data.is_empty() {
        return Ok(());
    }

    let file_len = fobj.metadata()?.len();
    let offset = offset.min(file_len);

    fobj.seek(SeekFrom::Start(offset))?;
    let mut trailing = Vec::new();
    fobj.read_to_end(&mut trailing)?;

    fobj.set_len(file_len + data.len() as u64)?;

    fobj.seek(SeekFrom::Start(offset))?;
    fobj.write_all(data)?;
    fobj.write_all(&trailing)?;
    fobj.flush()?;

    Ok(())
}

/// Open a file for read/write access.
pub fn open_rw<P: AsRef<Path>>(path: P) -> Result<File> {
    Ok(OpenOptions::new().read(true).write(true).open(path)?)
}
