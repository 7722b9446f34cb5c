#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Extract a 1-D contiguous float64 array from a Python object.
///
/// Accepts, in order of preference: a NumPy `ndarray`, anything exposing a
/// `to_numpy()` method (e.g. a pandas `Series`), or a plain sequence of
/// floats. A sequence containing `None` or other non-numeric entries fails
/// the final extraction and surfaces as `PyTypeError`, which is how the
/// Python-facing constructors reject `None`-valued counts.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Extract a Python object into an owned `Array1<f64>`.
///
/// Convenience wrapper over [`extract_f64_array`] for the light-curve
/// constructors, which take ownership of their arrays.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_owned_f64_array(
    py: Python<'_>, raw_data: &Bound<'_, PyAny>,
) -> PyResult<Array1<f64>> {
    let arr_ro = extract_f64_array(py, raw_data)?;
    Ok(arr_ro.as_array().to_owned())
}
