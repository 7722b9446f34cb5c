//! Validated light-curve container and strict same-grid addition.
//!
//! Purpose
//! -------
//! Define [`Lightcurve`], the crate's sole entity: a binned photon-count
//! time series with derived quantities (count rate, bin width, segment
//! bounds) fixed at construction. This module owns direct construction from
//! parallel time/counts (or time/count-rate) arrays and the strict
//! bin-for-bin addition of two curves on identical grids.
//!
//! Key behaviors
//! -------------
//! - [`Lightcurve::new`] validates raw arrays (lengths, finiteness,
//!   monotonicity), derives the bin width from the median time spacing, and
//!   records an [`UnevenSampling`](crate::lightcurve::LcWarningKind)
//!   warning when the grid is irregular instead of failing.
//! - [`Lightcurve::from_countrate`] accepts a count-rate array and stores
//!   `counts = countrate * dt`, keeping the two mutually consistent.
//! - [`Lightcurve::try_add`] sums two curves bin-for-bin after verifying
//!   the grids are elementwise identical.
//!
//! Invariants & assumptions
//! ------------------------
//! - `time`, `counts`, and `countrate` always have equal length ≥ 1.
//! - All counts are finite and non-negative; `dt` is finite and `> 0`.
//! - `countrate[i] == counts[i] / dt` for all `i`; the rate is never
//!   independently stored as ground truth.
//! - Instances are immutable: every operation returns a new `Lightcurve`
//!   and never aliases or mutates its operands' arrays.
//!
//! Conventions
//! -----------
//! - `time` holds bin **centers**; `tstart` is the left edge of the first
//!   bin (`time[0] - dt/2` unless supplied) and
//!   `tseg = time[last] - time[0] + dt` is the covered duration.
//! - Non-fatal anomalies are recorded as [`LcWarning`] values on the
//!   produced instance and mirrored to the `log` facade; fatal conditions
//!   abort with [`LcError`] and no partial object.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover the construction happy path, both fatal
//!   validation classes, the exact uneven-sampling warning text, derived
//!   quantities, the count-rate round trip, and all `try_add` branches.
//! - Event binning, union-grid joins, and rebinning live in sibling
//!   modules and carry their own tests.

use crate::lightcurve::errors::{LcError, LcResult};
use crate::lightcurve::validation::{
    evenly_sampled, median_bin_width, validate_counts, validate_lengths, validate_time,
};
use crate::lightcurve::warnings::LcWarning;
use ndarray::Array1;

/// `Lightcurve` — a validated, binned photon-count time series.
///
/// Purpose
/// -------
/// Represent a single light curve over uniform time bins, together with the
/// quantities every consumer needs: per-bin counts, the derived count rate,
/// the bin width, and the segment bounds. All invariants are established at
/// construction so downstream analysis can assume clean data.
///
/// Key behaviors
/// -------------
/// - Construction from counts ([`Lightcurve::new`]), from a count rate
///   ([`Lightcurve::from_countrate`]), or from raw event arrival times
///   ([`Lightcurve::from_events`](Lightcurve::from_events)).
/// - Whole-object combination: [`Lightcurve::try_add`] (strict grids) and
///   [`Lightcurve::join`](Lightcurve::join) (union grids).
/// - Resolution reduction via [`Lightcurve::rebin`](Lightcurve::rebin).
///
/// Fields (read accessors)
/// -----------------------
/// - `time`: strictly increasing bin centers, nominally spaced by `dt`.
/// - `counts`: finite, non-negative photon counts per bin.
/// - `countrate`: `counts / dt`, materialized at construction.
/// - `dt`: bin width, finite and strictly positive.
/// - `tstart`: left edge of the first bin.
/// - `tseg`: covered duration, `time[last] - time[0] + dt`.
/// - `warnings`: non-fatal anomalies recorded while producing this
///   instance.
///
/// Invariants
/// ----------
/// - `time.len() == counts.len() == countrate.len() >= 1`.
/// - Every count is finite and `>= 0`; `dt > 0` and finite.
/// - An irregular grid never silently corrupts derived quantities: the
///   working `dt` is the median spacing and the irregularity is recorded
///   as a warning.
///
/// Notes
/// -----
/// - There is no in-place mutation; `+`-style combination is exposed as the
///   fallible [`Lightcurve::try_add`] rather than a panicking operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Lightcurve {
    time: Array1<f64>,
    counts: Array1<f64>,
    countrate: Array1<f64>,
    dt: f64,
    tstart: f64,
    tseg: f64,
    warnings: Vec<LcWarning>,
}

impl Lightcurve {
    /// Construct a validated [`Lightcurve`] from parallel time/counts
    /// arrays.
    ///
    /// Parameters
    /// ----------
    /// - `time`: `Array1<f64>`
    ///   Bin centers. Must be finite, strictly increasing, and hold at
    ///   least 2 entries (the bin width is derived from the spacings).
    /// - `counts`: `Array1<f64>`
    ///   Photon counts per bin; same length as `time`, finite,
    ///   non-negative.
    /// - `tstart`: `Option<f64>`
    ///   Left edge of the first bin. Defaults to `time[0] - dt/2`.
    ///
    /// Returns
    /// -------
    /// `LcResult<Lightcurve>`
    ///   - `Ok(Lightcurve)` with `dt` set to the median time spacing and
    ///     `countrate = counts / dt`.
    ///   - `Err(LcError)` if validation fails; no partial object is
    ///     produced.
    ///
    /// Errors
    /// ------
    /// - `LcError::TooFewBins` when `time.len() < 2`.
    /// - `LcError::LengthMismatch` when the arrays differ in length.
    /// - `LcError::NonFiniteTime` / `LcError::NonMonotonicTime` for bad
    ///   time grids.
    /// - `LcError::NonFiniteCounts` / `LcError::NegativeCounts` for bad
    ///   counts.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `LcError`.
    ///
    /// Notes
    /// -----
    /// - An unevenly spaced grid is **not** an error: construction
    ///   proceeds with the median spacing and the instance records an
    ///   `UnevenSampling` warning with a stable message text.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_lightcurve::lightcurve::Lightcurve;
    /// let lc = Lightcurve::new(
    ///     array![1.0, 2.0, 3.0, 4.0],
    ///     array![2.0, 2.0, 2.0, 2.0],
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(lc.dt(), 1.0);
    /// assert_eq!(lc.countrate()[0], 2.0);
    /// assert_eq!(lc.tstart(), 0.5);
    /// ```
    pub fn new(
        time: Array1<f64>, counts: Array1<f64>, tstart: Option<f64>,
    ) -> LcResult<Lightcurve> {
        validate_time(&time)?;
        validate_lengths(time.len(), counts.len())?;
        validate_counts(&counts)?;
        let dt = median_bin_width(&time)?;
        Ok(Lightcurve::assemble(time, counts, dt, tstart, Vec::new()))
    }

    /// Construct a [`Lightcurve`] from a count-rate array.
    ///
    /// Stores `counts = countrate * dt`, where `dt` is derived from the
    /// time grid exactly as in [`Lightcurve::new`]; the stored rate and
    /// counts are therefore mutually consistent by construction.
    ///
    /// Errors
    /// ------
    /// Same taxonomy as [`Lightcurve::new`]; the finiteness and
    /// non-negativity checks apply to the rate array.
    pub fn from_countrate(
        time: Array1<f64>, countrate: Array1<f64>, tstart: Option<f64>,
    ) -> LcResult<Lightcurve> {
        validate_time(&time)?;
        validate_lengths(time.len(), countrate.len())?;
        validate_counts(&countrate)?;
        let dt = median_bin_width(&time)?;
        let counts = &countrate * dt;
        Ok(Lightcurve::assemble(time, counts, dt, tstart, Vec::new()))
    }

    /// Assemble a curve from already-validated parts.
    ///
    /// # Inputs
    /// - `time` / `counts`: validated, equal-length, `time` strictly
    ///   increasing and non-empty.
    /// - `dt`: validated bin width (derived or explicit).
    /// - `tstart`: explicit left edge, or `None` for `time[0] - dt/2`.
    /// - `warnings`: anomalies already recorded by the caller (e.g. a
    ///   mismatched-bin-width warning from `join`).
    ///
    /// # Behavior
    /// Derives `countrate`, `tstart`, and `tseg`, runs the even-sampling
    /// check against `dt` (appending an `UnevenSampling` record when it
    /// fails), and emits every recorded warning through the `log` facade.
    pub(crate) fn assemble(
        time: Array1<f64>, counts: Array1<f64>, dt: f64, tstart: Option<f64>,
        mut warnings: Vec<LcWarning>,
    ) -> Lightcurve {
        if !evenly_sampled(&time, dt) {
            warnings.push(LcWarning::uneven_sampling());
        }
        for warning in &warnings {
            warning.emit();
        }

        let countrate = &counts / dt;
        let tstart = tstart.unwrap_or(time[0] - dt / 2.0);
        let tseg = time[time.len() - 1] - time[0] + dt;
        Lightcurve { time, counts, countrate, dt, tstart, tseg, warnings }
    }

    /// Bin centers.
    pub fn time(&self) -> &Array1<f64> {
        &self.time
    }

    /// Photon counts per bin.
    pub fn counts(&self) -> &Array1<f64> {
        &self.counts
    }

    /// Count rate per bin (`counts / dt`).
    pub fn countrate(&self) -> &Array1<f64> {
        &self.countrate
    }

    /// Bin width.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Left edge of the first bin.
    pub fn tstart(&self) -> f64 {
        self.tstart
    }

    /// Covered duration (`time[last] - time[0] + dt`).
    pub fn tseg(&self) -> f64 {
        self.tseg
    }

    /// Number of bins.
    pub fn n_bins(&self) -> usize {
        self.time.len()
    }

    /// Non-fatal anomalies recorded while producing this instance.
    pub fn warnings(&self) -> &[LcWarning] {
        &self.warnings
    }

    /// Add two light curves bin-for-bin on a strictly identical time grid.
    ///
    /// Parameters
    /// ----------
    /// - `other`: `&Lightcurve`
    ///   The curve to add. Its time grid must equal `self`'s elementwise
    ///   (exact float comparison; same-pipeline grids share exact centers).
    ///
    /// Returns
    /// -------
    /// `LcResult<Lightcurve>`
    ///   - `Ok` with the shared grid, summed counts, and the count rate
    ///     recomputed from the summed counts (equal to the elementwise sum
    ///     of the operand rates, since `dt` is shared).
    ///   - `Err(LcError)` when the grids differ; neither operand is
    ///     modified in any case.
    ///
    /// Errors
    /// ------
    /// - `LcError::GridLengthMismatch` when the operands have different
    ///   numbers of bins.
    /// - `LcError::GridValueMismatch` at the first bin whose centers
    ///   differ.
    ///
    /// Notes
    /// -----
    /// - For identical grids, [`Lightcurve::join`](Lightcurve::join)
    ///   produces the same `time` and `counts` as this method; the two are
    ///   cross-checked in tests.
    pub fn try_add(&self, other: &Lightcurve) -> LcResult<Lightcurve> {
        if self.time.len() != other.time.len() {
            return Err(LcError::GridLengthMismatch {
                left: self.time.len(),
                right: other.time.len(),
            });
        }
        for (index, (&left, &right)) in self.time.iter().zip(other.time.iter()).enumerate() {
            if left != right {
                return Err(LcError::GridValueMismatch { index, left, right });
            }
        }

        let counts = &self.counts + &other.counts;
        Ok(Lightcurve::assemble(
            self.time.clone(),
            counts,
            self.dt,
            Some(self.tstart),
            Vec::new(),
        ))
    }
}
