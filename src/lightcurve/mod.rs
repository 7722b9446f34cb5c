//! lightcurve — validated binned time series for astrophysical timing.
//!
//! Purpose
//! -------
//! Collect the light-curve entity and its whole-object operations:
//! validated construction from parallel arrays, histogram binning of raw
//! photon arrival times, strict and union-grid combination, and
//! proportional rebinning to coarser resolutions. Shared validation
//! guards, the subtree error type, and structured non-fatal warnings live
//! alongside the entity.
//!
//! Key behaviors
//! -------------
//! - Expose the [`Lightcurve`] entity with read accessors for `time`,
//!   `counts`, `countrate`, `dt`, `tstart`, `tseg`, and recorded
//!   warnings.
//! - Centralize input guards in [`validation`], ensuring array lengths,
//!   finiteness, monotonicity, and bin widths are checked once, in a
//!   consistent way, at every public entry point.
//! - Provide a dedicated error type [`LcError`] and result alias
//!   [`LcResult`], plus a conversion layer to Python exceptions when the
//!   `python-bindings` feature is enabled.
//! - Record non-fatal anomalies as [`LcWarning`] values on the produced
//!   instance and mirror them through the `log` facade.
//!
//! Invariants & assumptions
//! ------------------------
//! - A constructed [`Lightcurve`] always satisfies: equal-length arrays,
//!   finite non-negative counts, finite strictly positive bin width, and
//!   `countrate == counts / dt` elementwise.
//! - All operations are pure: they take `&self`, never mutate operands,
//!   and return new instances. Distinct instances share no mutable state,
//!   so batching independent operations across threads needs no locking.
//! - Fatal conditions abort with [`LcError`] and no partial object;
//!   warnings never suppress an operation's success.
//!
//! Conventions
//! -----------
//! - Time is a pure numeric offset in arbitrary units; `time` holds bin
//!   centers and `tstart` the left edge of the first bin.
//! - Truncation is uniform across the subtree: segments that are not an
//!   exact multiple of the bin width lose their trailing fractional bin,
//!   both when binning events and when rebinning.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_lightcurve::lightcurve::{Lightcurve, LcResult};
//!
//!   # fn demo(toa: &[f64]) -> LcResult<()> {
//!   let lc = Lightcurve::from_events(toa, 1.0, None, None)?;
//!   let coarse = lc.rebin(2.0)?;
//!   # let _ = coarse;
//!   # Ok(())
//!   # }
//!   ```
//!
//!   Consumers building periodograms or cross-correlations operate on the
//!   read accessors; serialization of any kind is their responsibility.
//!
//! Testing notes
//! -------------
//! - Unit tests live in each submodule and cover every error branch, both
//!   warning paths, histogram correctness, combination semantics
//!   (including the join == try_add cross-check), and proportional
//!   rebinning at integer, fractional, and irrational ratios.
//! - `tests/integration_lightcurve_pipeline.rs` drives the full pipeline
//!   on simulated event streams with locally seeded generators.

pub mod binning;
pub mod curve;
pub mod errors;
pub mod join;
pub mod rebin;
pub mod validation;
pub mod warnings;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the “everyday” types most users need. The validation helpers
// remain under `validation` for callers that build their own pipelines.

pub use self::curve::Lightcurve;
pub use self::errors::{LcError, LcResult};
pub use self::warnings::{LcWarning, LcWarningKind};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_lightcurve::lightcurve::prelude::*;
//
// to import the main light-curve surface in a single line.

pub mod prelude {
    pub use super::{LcError, LcResult, LcWarning, LcWarningKind, Lightcurve};
}
