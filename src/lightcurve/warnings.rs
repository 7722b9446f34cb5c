//! Structured non-fatal diagnostics for light-curve operations.
//!
//! Purpose
//! -------
//! Model the "warn and proceed" anomalies of light-curve processing as
//! inspectable records rather than free-floating text. Operations that hit a
//! non-fatal anomaly still succeed; the produced [`Lightcurve`] carries the
//! warnings it was built with, and each record is mirrored to the `log`
//! facade at creation time.
//!
//! Key behaviors
//! -------------
//! - [`LcWarning`] pairs a machine-matchable [`LcWarningKind`] with the
//!   exact user-facing message.
//! - [`LcWarning::emit`] sends the message through `log::warn!` so embedders
//!   with a configured logger see anomalies without polling the records.
//!
//! Conventions
//! -----------
//! - Warnings never suppress an operation's success and never replace an
//!   error: anything fatal lives in `lightcurve::errors`.
//! - Message texts are stable; tests assert on them verbatim.
//!
//! [`Lightcurve`]: crate::lightcurve::Lightcurve

/// Machine-matchable category of a non-fatal light-curve anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcWarningKind {
    /// The input (or merged) time grid is not evenly sampled relative to
    /// the working bin width.
    UnevenSampling,
    /// `join` was asked to merge light curves with different bin widths.
    MismatchedBinWidths,
}

/// A single recorded non-fatal anomaly.
///
/// Holds the category and the rendered, user-facing message. Instances are
/// created by the crate at the site of the anomaly and collected on the
/// produced [`Lightcurve`](crate::lightcurve::Lightcurve); they are cheap to
/// clone and compare in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct LcWarning {
    kind: LcWarningKind,
    message: String,
}

impl LcWarning {
    /// Warning for a time grid whose spacings disagree with the working bin
    /// width beyond floating tolerance.
    pub(crate) fn uneven_sampling() -> Self {
        LcWarning {
            kind: LcWarningKind::UnevenSampling,
            message: "Bin sizes in input time array aren't equal throughout! This could \
                      cause problems with Fourier transforms. Please make the input time \
                      evenly sampled."
                .to_string(),
        }
    }

    /// Warning for a `join` across two different bin widths. The merged
    /// grid keeps `dt_kept` (the receiver's bin width).
    pub(crate) fn mismatched_bin_widths(dt_kept: f64, dt_other: f64) -> Self {
        LcWarning {
            kind: LcWarningKind::MismatchedBinWidths,
            message: format!(
                "Bin widths of both the lightcurves are not same! Proceeding with the \
                 bin width of the first light curve ({dt_kept}) for the merged grid; \
                 the other is {dt_other}."
            ),
        }
    }

    /// The anomaly category.
    pub fn kind(&self) -> LcWarningKind {
        self.kind
    }

    /// The rendered, user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Mirror this warning to the `log` facade.
    ///
    /// The library never configures a logger backend; embedders that want
    /// live diagnostics install one (e.g. `env_logger`) and get every
    /// recorded warning at `warn` level.
    pub(crate) fn emit(&self) {
        log::warn!("{self}");
    }
}

impl std::fmt::Display for LcWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
