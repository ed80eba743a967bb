//! Error handling for Python bindings

use bagwords_core::EncoderError as RustEncoderError;
use pyo3::{create_exception, exceptions::PyRuntimeError, PyErr};

/// Custom Python exception for encoder errors
create_exception!(
    bagwords,
    EncoderError,
    PyRuntimeError,
    "Error raised when a vocabulary breaks its index contract"
);

/// Convert a Rust EncoderError to a Python exception
pub trait IntoPyErr {
    fn into_py_err(self) -> PyErr;
}

impl IntoPyErr for RustEncoderError {
    fn into_py_err(self) -> PyErr {
        EncoderError::new_err(self.to_string())
    }
}
