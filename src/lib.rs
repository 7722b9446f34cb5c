//! rust_lightcurve — validated binned light curves with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the light-curve core to Python via the `_rust_lightcurve`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing `Lightcurve` class mirroring the Rust
//! API.
//!
//! Key behaviors
//! -------------
//! - Re-export the core [`lightcurve`] module as the public crate surface.
//! - Define the `#[pyclass]` wrapper and the `#[pymodule]` initializer for
//!   the `_rust_lightcurve` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in [`lightcurve`]; this file
//!   performs only FFI glue, input extraction, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible class mirrors
//!   the invariants of [`lightcurve::Lightcurve`]: validated construction,
//!   immutable instances, whole-object operations.
//! - Errors from core code are propagated as [`lightcurve::LcError`]
//!   internally and converted to `PyErr` values at the PyO3 boundary;
//!   non-numeric (e.g. `None`-valued) input arrays fail extraction with
//!   `PyTypeError` before the core is ever reached.
//!
//! Conventions
//! -----------
//! - Native Rust code should depend directly on [`lightcurve`] and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - Recorded warnings cross the boundary as plain message strings; Rust
//!   callers get the structured [`lightcurve::LcWarning`] records instead.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by `tests/integration_lightcurve_pipeline.rs`.
//! - The PyO3 layer is exercised by Python-level tests against the built
//!   extension module, not from Rust.

pub mod lightcurve;
pub mod utils;

pub use lightcurve::{LcError, LcResult, LcWarning, LcWarningKind, Lightcurve};

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::utils::extract_owned_f64_array;

/// Python-facing light curve.
///
/// Purpose
/// -------
/// Thin `#[pyclass]` wrapper around [`lightcurve::Lightcurve`] exposing the
/// validated construction paths, the read accessors, and the whole-object
/// operations (`__add__`, `join`, `rebin_lightcurve`) to Python.
///
/// Notes
/// -----
/// - Rust callers should use [`lightcurve::Lightcurve`] directly; this
///   wrapper exists solely for the PyO3 binding.
/// - Getter methods allocate when converting `ndarray` vectors into
///   heap-allocated `Vec<f64>` for Python consumption.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "Lightcurve", module = "rust_lightcurve")]
pub struct PyLightcurve {
    pub inner: Lightcurve,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyLightcurve {
    /// Construct from parallel time/counts (or time/count-rate) arrays.
    ///
    /// Mirrors the Rust constructors: `input_counts=True` routes through
    /// `Lightcurve::new`, `False` through `Lightcurve::from_countrate`.
    #[new]
    #[pyo3(signature = (time, counts, input_counts = true, tstart = None))]
    fn new(
        py: Python<'_>, time: &Bound<'_, PyAny>, counts: &Bound<'_, PyAny>, input_counts: bool,
        tstart: Option<f64>,
    ) -> PyResult<Self> {
        let time = extract_owned_f64_array(py, time)?;
        let values = extract_owned_f64_array(py, counts)?;
        let inner = if input_counts {
            Lightcurve::new(time, values, tstart)?
        } else {
            Lightcurve::from_countrate(time, values, tstart)?
        };
        Ok(PyLightcurve { inner })
    }

    /// Bin raw event arrival times into a light curve.
    #[staticmethod]
    #[pyo3(signature = (toa, dt, tseg = None, tstart = None))]
    fn make_lightcurve(
        py: Python<'_>, toa: &Bound<'_, PyAny>, dt: f64, tseg: Option<f64>, tstart: Option<f64>,
    ) -> PyResult<Self> {
        let toa = extract_owned_f64_array(py, toa)?;
        let toa_slice = toa.as_slice().ok_or_else(|| {
            pyo3::exceptions::PyTypeError::new_err("toa must be a contiguous 1-D float64 array")
        })?;
        let inner = Lightcurve::from_events(toa_slice, dt, tseg, tstart)?;
        Ok(PyLightcurve { inner })
    }

    #[getter]
    fn time(&self) -> Vec<f64> {
        self.inner.time().to_vec()
    }

    #[getter]
    fn counts(&self) -> Vec<f64> {
        self.inner.counts().to_vec()
    }

    #[getter]
    fn countrate(&self) -> Vec<f64> {
        self.inner.countrate().to_vec()
    }

    #[getter]
    fn dt(&self) -> f64 {
        self.inner.dt()
    }

    #[getter]
    fn tstart(&self) -> f64 {
        self.inner.tstart()
    }

    #[getter]
    fn tseg(&self) -> f64 {
        self.inner.tseg()
    }

    /// Messages of the non-fatal anomalies recorded on this instance.
    #[getter]
    fn warnings(&self) -> Vec<String> {
        self.inner
            .warnings()
            .iter()
            .map(|w| w.message().to_string())
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.n_bins()
    }

    /// Strict same-grid addition; raises `ValueError` on grid mismatch.
    fn __add__(&self, other: PyRef<'_, PyLightcurve>) -> PyResult<Self> {
        let inner = self.inner.try_add(&other.inner)?;
        Ok(PyLightcurve { inner })
    }

    /// Union-grid merge; records a warning on bin-width mismatch.
    fn join(&self, other: PyRef<'_, PyLightcurve>) -> Self {
        PyLightcurve { inner: self.inner.join(&other.inner) }
    }

    /// Rebin to a coarser resolution, conserving counts proportionally.
    fn rebin_lightcurve(&self, dt_new: f64) -> PyResult<Self> {
        let inner = self.inner.rebin(dt_new)?;
        Ok(PyLightcurve { inner })
    }
}

/// _rust_lightcurve — PyO3 module initializer for the Python extension.
///
/// Registers the `Lightcurve` class on the compiled module; invoked
/// automatically by Python on import, never called from Rust.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_lightcurve(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLightcurve>()?;
    Ok(())
}
