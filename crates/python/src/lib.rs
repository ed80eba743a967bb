//! Python bindings for bagwords
//!
//! This module exposes the bag-of-words encoder as a callable pipeline
//! component.

use pyo3::prelude::*;

mod embedder;
mod error;
mod vocab;

use embedder::PyBowEmbedder;

/// bagwords: bag-of-words count encoding in Rust
#[pymodule]
fn bagwords(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBowEmbedder>()?;
    m.add("EncoderError", py.get_type_bound::<error::EncoderError>())?;

    // Add version info
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
