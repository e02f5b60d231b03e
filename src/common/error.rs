use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Id3Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),

    #[error("ID3 unsupported version: ID3v2.{0}")]
    UnsupportedVersion(u8),

    #[error("ID3 invalid magic: {0:?}")]
    InvalidMagic(String),
}

#[cfg(feature = "python")]
mod python {
    use super::Id3Error;
    use pyo3::create_exception;
    use pyo3::exceptions::PyException;

    create_exception!(id3v2enc, ID3Error, PyException);
    create_exception!(id3v2enc, ID3UnsupportedVersionError, ID3Error);

    impl From<Id3Error> for pyo3::PyErr {
        fn from(err: Id3Error) -> pyo3::PyErr {
            match err {
                Id3Error::Io(e) => pyo3::exceptions::PyIOError::new_err(e.to_string()),
                Id3Error::OutOfMemory(e) => {
                    pyo3::exceptions::PyMemoryError::new_err(e.to_string())
                }
                Id3Error::UnsupportedVersion(v) => {
                    ID3UnsupportedVersionError::new_err(format!("ID3v2.{}", v))
                }
                Id3Error::InvalidMagic(msg) => ID3Error::new_err(format!("Invalid magic: {}", msg)),
            }
        }
    }
}

#[cfg(feature = "python")]
pub use python::{ID3Error, ID3UnsupportedVersionError};

pub type Result<T> = std::result::Result<T, Id3Error>;
