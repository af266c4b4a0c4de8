//! Chart policies and display for rootviz.
//!
//! A [`ChartSpec`] is a backend-independent description of one chart: its
//! traces, axis scales, labels, and grid. Three policies build specs from
//! the series produced by `rootviz-core`:
//!
//! - [`ChartSpec::convergence`] — error vs. iteration count, symlog y
//! - [`ChartSpec::accuracy`] — error vs. requested precision, symlog both
//!   axes, with a dashed y = x reference diagonal
//! - [`ChartSpec::curve`] — a raw function curve on plain linear axes
//!
//! # Features
//!
//! - `plot` — Enables [`show`], which renders a `ChartSpec` in a blocking
//!   egui window. This feature adds dependencies on `eframe` and
//!   `egui_plot`.

mod chart;
mod scale;

pub use chart::{ChartSpec, Trace, TraceStyle};
pub use scale::{AxisScale, DEFAULT_LINTHRESH};

#[cfg(feature = "plot")]
mod show;

#[cfg(feature = "plot")]
pub use show::show;
