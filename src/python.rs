use numpy::{PyArray1, PyReadonlyArrayDyn};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::lz77::MAX_WINDOW;
use crate::{compress, decompress, Error};

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn as_slice<'a>(xs: &'a PyReadonlyArrayDyn<'_, u8>) -> PyResult<&'a [u8]> {
    xs.as_slice()
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

/// The name of this function must match the `lib.name` setting in
/// `Cargo.toml`, else Python will not be able to import the module.
#[pymodule]
fn lz77(m: &Bound<'_, PyModule>) -> PyResult<()> {
    #[pyfn(m)]
    #[pyo3(name = "compress", signature = (xs, window = MAX_WINDOW))]
    fn compress_py<'py>(
        py: Python<'py>,
        xs: PyReadonlyArrayDyn<'py, u8>,
        window: usize,
    ) -> PyResult<Bound<'py, PyArray1<u8>>> {
        let result = compress(as_slice(&xs)?, window)?;
        Ok(PyArray1::from_vec_bound(py, result))
    }

    #[pyfn(m)]
    #[pyo3(name = "decompress")]
    fn decompress_py<'py>(
        py: Python<'py>,
        xs: PyReadonlyArrayDyn<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray1<u8>>> {
        let result = decompress(as_slice(&xs)?)?;
        Ok(PyArray1::from_vec_bound(py, result))
    }

    Ok(())
}
