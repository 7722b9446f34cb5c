//! Errors for light-curve construction, binning, combination, and rebinning.
//!
//! This module defines the subtree error type, [`LcError`], and the result
//! alias [`LcResult`], used across the public Rust API and the Python-facing
//! layer. The enum implements `Display`/`Error` by hand and converts to
//! `PyErr` when the `python-bindings` feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy) and always point at the
//!   *first* offending element found during a validation scan.
//! - Counts and count rates must be **finite and non-negative**; bin widths
//!   must be **finite and strictly positive**.
//! - Fatal conditions abort the operation with no partial `Lightcurve`
//!   constructed. Non-fatal anomalies are not errors at all; they are
//!   recorded as `LcWarning` values (see `lightcurve::warnings`).
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Subtree-wide result alias for operations that may produce [`LcError`].
pub type LcResult<T> = Result<T, LcError>;

/// Unified error type for light-curve operations.
///
/// Covers input/data validation at construction, event-binning failures,
/// strict-addition grid mismatches, and rebinning precondition violations.
/// Implements `Display`/`Error` and converts to a Python `ValueError` at
/// PyO3 boundaries.
///
/// Notes
/// -----
/// - Variants carry the offending index/value so callers (and Python users)
///   can locate bad data without re-scanning their inputs.
/// - This enum is small, cloneable, and `PartialEq` so it can be matched
///   directly in unit tests.
#[derive(Debug, Clone, PartialEq)]
pub enum LcError {
    // ---- Construction / validation ----
    /// Fewer than 2 time bins where the bin width must be derived from
    /// successive time differences.
    TooFewBins { len: usize },

    /// `time` and `counts` (or count-rate) arrays differ in length.
    LengthMismatch { time_len: usize, counts_len: usize },

    /// A counts / count-rate entry is NaN or ±inf.
    NonFiniteCounts { index: usize, value: f64 },

    /// A counts / count-rate entry is negative.
    NegativeCounts { index: usize, value: f64 },

    /// A time-grid entry is NaN or ±inf.
    NonFiniteTime { index: usize, value: f64 },

    /// The time array is not strictly increasing at `index`
    /// (`time[index] <= time[index - 1]`).
    NonMonotonicTime { index: usize },

    /// A bin width is NaN, ±inf, or not strictly positive.
    NonPositiveBinWidth { value: f64 },

    // ---- Binning from events ----
    /// No arrival times were given and no explicit `tstart`/`tseg` pair
    /// defines the segment to bin over.
    NoEvents,

    /// An event arrival time is NaN or ±inf.
    NonFiniteArrivalTime { index: usize, value: f64 },

    /// The requested segment is shorter than a single bin, so no complete
    /// bin can be formed.
    NoCompleteBins { tseg: f64, dt: f64 },

    // ---- Strict addition ----
    /// The two operands' time grids differ in length.
    GridLengthMismatch { left: usize, right: usize },

    /// The two operands' time grids differ in value at `index`.
    GridValueMismatch { index: usize, left: f64, right: f64 },

    // ---- Rebinning ----
    /// The requested bin width is finer than the current one.
    FinerBinWidth { dt_old: f64, dt_new: f64 },
}

impl std::error::Error for LcError {}

impl std::fmt::Display for LcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LcError::TooFewBins { len } => {
                write!(
                    f,
                    "Need at least 2 time bins to derive a bin width; got {len}."
                )
            }
            LcError::LengthMismatch { time_len, counts_len } => {
                write!(
                    f,
                    "Time and counts arrays must have the same length: got {time_len} time \
                     bins and {counts_len} counts."
                )
            }
            LcError::NonFiniteCounts { index, value } => {
                write!(
                    f,
                    "Invalid counts value at index {index}: {value}. Counts must be finite."
                )
            }
            LcError::NegativeCounts { index, value } => {
                write!(
                    f,
                    "Invalid counts value at index {index}: {value}. Counts must be non-negative."
                )
            }
            LcError::NonFiniteTime { index, value } => {
                write!(
                    f,
                    "Invalid time value at index {index}: {value}. Times must be finite."
                )
            }
            LcError::NonMonotonicTime { index } => {
                write!(
                    f,
                    "Time array must be strictly increasing; violated at index {index}."
                )
            }
            LcError::NonPositiveBinWidth { value } => {
                write!(
                    f,
                    "Invalid bin width: {value}. Must be finite and strictly positive."
                )
            }
            LcError::NoEvents => {
                write!(
                    f,
                    "No event arrival times given; supply both tstart and tseg to bin an \
                     empty event list."
                )
            }
            LcError::NonFiniteArrivalTime { index, value } => {
                write!(
                    f,
                    "Invalid arrival time at index {index}: {value}. Must be a finite number."
                )
            }
            LcError::NoCompleteBins { tseg, dt } => {
                write!(
                    f,
                    "Segment length {tseg} is shorter than a single bin of width {dt}; no \
                     complete bin can be formed."
                )
            }
            LcError::GridLengthMismatch { left, right } => {
                write!(
                    f,
                    "Cannot add light curves with different numbers of bins: {left} vs {right}."
                )
            }
            LcError::GridValueMismatch { index, left, right } => {
                write!(
                    f,
                    "Cannot add light curves with different time grids: bin {index} is at \
                     {left} in one curve and {right} in the other."
                )
            }
            LcError::FinerBinWidth { dt_old, dt_new } => {
                write!(
                    f,
                    "New bin width {dt_new} must not be finer than the current bin width \
                     {dt_old}."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<LcError> for PyErr {
    fn from(err: LcError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic `Display` formatting for LcError variants.
    // - Embedding of payload values (indices, offending values, bin widths)
    //   into error messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<LcError> for PyErr` conversion, since exercising it
    //   requires linking against the Python C API and is better handled
    //   by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that every variant formats to a non-empty, human-readable
    // message.
    //
    // Given
    // -----
    // - One value of each `LcError` variant.
    //
    // Expect
    // ------
    // - `err.to_string()` is non-empty for each.
    fn lc_error_all_variants_have_nonempty_display_messages() {
        // Arrange
        let errors = vec![
            LcError::TooFewBins { len: 1 },
            LcError::LengthMismatch { time_len: 5, counts_len: 4 },
            LcError::NonFiniteCounts { index: 2, value: f64::NAN },
            LcError::NegativeCounts { index: 0, value: -1.0 },
            LcError::NonFiniteTime { index: 4, value: f64::NAN },
            LcError::NonMonotonicTime { index: 3 },
            LcError::NonPositiveBinWidth { value: 0.0 },
            LcError::NoEvents,
            LcError::NonFiniteArrivalTime { index: 1, value: f64::INFINITY },
            LcError::NoCompleteBins { tseg: 0.5, dt: 1.0 },
            LcError::GridLengthMismatch { left: 4, right: 5 },
            LcError::GridValueMismatch { index: 0, left: 1.0, right: 2.0 },
            LcError::FinerBinWidth { dt_old: 1.0, dt_new: 0.5 },
        ];

        // Act & Assert
        for err in errors {
            let msg = err.to_string();
            assert!(
                !msg.trim().is_empty(),
                "Display message should not be empty for {err:?}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `LcError::NegativeCounts` includes both the offending
    // index and value in its `Display` representation.
    //
    // Given
    // -----
    // - An `LcError::NegativeCounts` with index 7 and value -3.5.
    //
    // Expect
    // ------
    // - The message contains "7" and "-3.5".
    fn lc_error_negative_counts_includes_payload_in_display() {
        // Arrange
        let err = LcError::NegativeCounts { index: 7, value: -3.5 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains('7') && msg.contains("-3.5"),
            "Display message should include offending index and value.\nGot: {msg}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that `LcError::GridValueMismatch` reports the bin index and
    // both conflicting time values.
    //
    // Given
    // -----
    // - An `LcError::GridValueMismatch` with index 2, left 3.0, right 5.0.
    //
    // Expect
    // ------
    // - The message contains "2", "3", and "5".
    fn lc_error_grid_value_mismatch_includes_both_grids_in_display() {
        // Arrange
        let err = LcError::GridValueMismatch { index: 2, left: 3.0, right: 5.0 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains('2') && msg.contains('3') && msg.contains('5'),
            "Display message should include the bin index and both time values.\nGot: {msg}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that `LcError::FinerBinWidth` embeds both the current and the
    // requested bin widths.
    //
    // Given
    // -----
    // - An `LcError::FinerBinWidth` with dt_old = 1.0 and dt_new = 0.25.
    //
    // Expect
    // ------
    // - The message contains "0.25" and "1".
    fn lc_error_finer_bin_width_includes_both_widths_in_display() {
        // Arrange
        let err = LcError::FinerBinWidth { dt_old: 1.0, dt_new: 0.25 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains("0.25") && msg.contains('1'),
            "Display message should include both bin widths.\nGot: {msg}"
        );
    }
}
