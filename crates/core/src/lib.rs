//! Core pipeline for rootviz: turning solver error logs into plot series.
//!
//! An external root-finding solver writes one record per line in the form
//! `function:method:error`, with a decimal comma in the error field. This
//! crate parses those records, buckets them per recognized
//! (function, method) [`Category`], and builds labeled [`PlotSeries`] ready
//! for the charting layer:
//!
//! - [`parse_record`] — one line → [`ErrorObservation`]
//! - [`classify`] — observations → per-category value lists, with
//!   unrecognized combinations dropped and counted
//! - [`PlotSeries`] construction — iteration-indexed convergence series or
//!   accuracy series against the fixed [`PRECISION_LADDER`]
//! - [`read_log`], [`read_curve`], [`load_classified`] — file ingestion with
//!   a lenient missing-file policy
//!
//! Everything is synchronous and deterministic; the same input file always
//! produces the same series.

mod category;
mod classify;
mod curve;
mod decimal;
mod input;
mod record;
mod series;

pub use category::{Category, SolverMethod, TestFunction};
pub use classify::{Classification, classify};
pub use curve::{CurveError, parse_curve_point};
pub use input::{InputError, load_classified, read_curve, read_log};
pub use record::{ErrorObservation, RecordError, parse_record};
pub use series::{PRECISION_LADDER, PlotSeries, SeriesError};
