//! ID3v2.3 / ID3v2.4 tag writer.
//!
//! Turns ordered key/value metadata into a byte-exact ID3v2 tag block:
//!
//! ```
//! use id3v2enc::id3::{render_tag, Metadata, TagOptions};
//!
//! let mut metadata = Metadata::new();
//! metadata.add("title", "Song");
//! metadata.add("MyKey", "MyValue");
//!
//! let tag = render_tag(&metadata, &TagOptions::new(3).unwrap()).unwrap();
//! assert_eq!(&tag[..4], b"ID3\x03");
//! ```

pub mod common;
pub mod id3;

pub use common::error::{Id3Error, Result};

#[cfg(feature = "python")]
mod python_bindings {
use super::*;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

/// Ordered metadata plus tag options, rendered on demand.
#[pyclass(name = "ID3Writer")]
#[derive(Debug, Clone)]
struct PyID3Writer {
    metadata: id3::Metadata,
    options: id3::TagOptions,
}

#[pymethods]
impl PyID3Writer {
    #[new]
    #[pyo3(signature = (version=4, magic="ID3"))]
    fn new(version: u8, magic: &str) -> PyResult<Self> {
        let options = id3::TagOptions::new(version)?.with_magic_str(magic)?;
        Ok(PyID3Writer {
            metadata: id3::Metadata::new(),
            options,
        })
    }

    fn add(&mut self, key: String, value: String) {
        self.metadata.add(key, value);
    }

    fn __setitem__(&mut self, key: String, value: String) {
        self.metadata.add(key, value);
    }

    fn __len__(&self) -> usize {
        self.metadata.len()
    }

    fn __repr__(&self) -> String {
        let keys: Vec<&str> = self.metadata.iter().map(|(k, _)| k).collect();
        format!(
            "ID3Writer(version={}, keys={})",
            self.options.version.major(),
            keys.join(", ")
        )
    }

    fn render<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let data = id3::render_tag(&self.metadata, &self.options)?;
        Ok(PyBytes::new(py, &data))
    }

    /// Prepend the tag to a file, returning the tag length.
    fn save(&self, filename: &str) -> PyResult<usize> {
        Ok(id3::prepend_tag(filename, &self.metadata, &self.options)?)
    }

    #[getter]
    fn version(&self) -> u8 {
        self.options.version.major()
    }
}

/// Render a tag from a list of (key, value) pairs.
#[pyfunction]
#[pyo3(signature = (items, version=4, magic="ID3"))]
fn render_tag<'py>(
    py: Python<'py>,
    items: Vec<(String, String)>,
    version: u8,
    magic: &str,
) -> PyResult<Bound<'py, PyBytes>> {
    let options = id3::TagOptions::new(version)?.with_magic_str(magic)?;
    let metadata: id3::Metadata = items.into_iter().collect();
    let data = id3::render_tag(&metadata, &options)?;
    Ok(PyBytes::new(py, &data))
}

// ---- Module registration ----

#[pymodule]
fn id3v2enc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyID3Writer>()?;
    m.add_function(wrap_pyfunction!(render_tag, m)?)?;

    m.add("ID3Error", m.py().get_type::<common::error::ID3Error>())?;
    m.add(
        "ID3UnsupportedVersionError",
        m.py().get_type::<common::error::ID3UnsupportedVersionError>(),
    )?;

    Ok(())
}
} // mod python_bindings
