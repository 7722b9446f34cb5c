//! Union-grid merging of two light curves.
//!
//! Implements [`Lightcurve::join`], the tolerant counterpart to strict
//! addition: the result covers the union of the two center grids instead of
//! demanding identical ones.
//!
//! ## Merge semantics
//! - Both input grids are strictly increasing, so a single two-pointer pass
//!   produces the sorted, deduplicated union.
//! - Bins present in only one input keep that input's counts; bins whose
//!   centers coincide **exactly** (bitwise float equality, no re-gridding)
//!   sum their counts.
//! - On identical grids the result's `time` and `counts` equal
//!   [`Lightcurve::try_add`]'s.
//!
//! ## Bin-width policy
//! When the two curves disagree on `dt` beyond tolerance, the receiver's
//! width wins for the merged grid and a
//! [`MismatchedBinWidths`](crate::lightcurve::LcWarningKind) warning is
//! recorded. The merged grid is then re-checked for even sampling against
//! that width, so a gappy or mixed-width union may additionally record an
//! `UnevenSampling` warning.

use crate::lightcurve::curve::Lightcurve;
use crate::lightcurve::validation::BIN_WIDTH_REL_TOL;
use crate::lightcurve::warnings::LcWarning;
use ndarray::Array1;

impl Lightcurve {
    /// Merge two light curves over the union of their time grids.
    ///
    /// Parameters
    /// ----------
    /// - `other`: `&Lightcurve`
    ///   The curve to merge with; its grid may overlap `self`'s partially,
    ///   fully, or not at all.
    ///
    /// Returns
    /// -------
    /// `Lightcurve`
    ///   One bin per distinct center across both inputs: summed counts
    ///   where centers coincide, the single source's counts elsewhere. The
    ///   bin width is `self.dt()`; `tstart` is the first merged bin's left
    ///   edge. Neither operand is modified.
    ///
    /// Notes
    /// -----
    /// - This operation is infallible: both operands are already valid, and
    ///   a merge of strictly increasing grids is strictly increasing. A
    ///   bin-width mismatch is a recorded warning, not an error.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_lightcurve::lightcurve::Lightcurve;
    /// let lc1 = Lightcurve::new(array![1.0, 2.0], array![2.0, 2.0], None).unwrap();
    /// let lc2 = Lightcurve::new(array![3.0, 4.0], array![2.0, 2.0], None).unwrap();
    /// let merged = lc1.join(&lc2);
    /// assert_eq!(merged.n_bins(), 4);
    /// ```
    pub fn join(&self, other: &Lightcurve) -> Lightcurve {
        let mut warnings = Vec::new();
        if (self.dt() - other.dt()).abs() > BIN_WIDTH_REL_TOL * self.dt() {
            warnings.push(LcWarning::mismatched_bin_widths(self.dt(), other.dt()));
        }

        let (left_time, right_time) = (self.time(), other.time());
        let (left_counts, right_counts) = (self.counts(), other.counts());
        let mut time = Vec::with_capacity(left_time.len() + right_time.len());
        let mut counts = Vec::with_capacity(left_time.len() + right_time.len());

        let (mut i, mut j) = (0, 0);
        while i < left_time.len() && j < right_time.len() {
            let (a, b) = (left_time[i], right_time[j]);
            if a < b {
                time.push(a);
                counts.push(left_counts[i]);
                i += 1;
            } else if b < a {
                time.push(b);
                counts.push(right_counts[j]);
                j += 1;
            } else {
                time.push(a);
                counts.push(left_counts[i] + right_counts[j]);
                i += 1;
                j += 1;
            }
        }
        while i < left_time.len() {
            time.push(left_time[i]);
            counts.push(left_counts[i]);
            i += 1;
        }
        while j < right_time.len() {
            time.push(right_time[j]);
            counts.push(right_counts[j]);
            j += 1;
        }

        Lightcurve::assemble(
            Array1::from(time),
            Array1::from(counts),
            self.dt(),
            None,
            warnings,
        )
    }
}
