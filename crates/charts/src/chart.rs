use rootviz_core::PlotSeries;

use crate::scale::AxisScale;

/// Visual treatment of one trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStyle {
    Solid,
    Dashed,
}

/// One named sequence of points on a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub style: TraceStyle,
}

impl From<PlotSeries> for Trace {
    fn from(series: PlotSeries) -> Self {
        Self {
            name: series.label,
            points: series.points,
            style: TraceStyle::Solid,
        }
    }
}

/// A complete description of one chart, independent of any rendering
/// backend: what to draw and how to scale it.
///
/// Built by one of the policy constructors and handed to the display layer
/// (the `plot` feature's `show`), which does no interpretation of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub grid: bool,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    /// Convergence chart policy: one (function, method) series against its
    /// iteration count.
    ///
    /// Linear x, symlog y with the default threshold so errors that reach
    /// exactly zero stay visible, grid on. One chart per combination; the
    /// series label becomes the chart title.
    #[must_use]
    pub fn convergence(series: PlotSeries) -> Self {
        Self {
            title: series.label.clone(),
            x_label: "Iterations".to_owned(),
            y_label: "Error".to_owned(),
            x_scale: AxisScale::Linear,
            y_scale: AxisScale::sym_log(),
            grid: true,
            traces: vec![Trace::from(series)],
        }
    }

    /// Accuracy chart policy: observed error against requested precision
    /// for one test function.
    ///
    /// Both axes are symlog with a shared threshold. The dashed y = x
    /// diagonal is overlaid first as the ideal-agreement reference, then
    /// the given method series (typically one or two per function).
    #[must_use]
    pub fn accuracy(title: impl Into<String>, series: Vec<PlotSeries>) -> Self {
        let mut reference = Trace::from(PlotSeries::ideal_diagonal());
        reference.style = TraceStyle::Dashed;

        let mut traces = vec![reference];
        traces.extend(series.into_iter().map(Trace::from));

        Self {
            title: title.into(),
            x_label: "Requested precision".to_owned(),
            y_label: "Error".to_owned(),
            x_scale: AxisScale::sym_log(),
            y_scale: AxisScale::sym_log(),
            grid: true,
            traces,
        }
    }

    /// Raw function curve policy: plain linear axes with a grid.
    #[must_use]
    pub fn curve(title: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        let title = title.into();
        Self {
            x_label: "x".to_owned(),
            y_label: "y".to_owned(),
            x_scale: AxisScale::Linear,
            y_scale: AxisScale::Linear,
            grid: true,
            traces: vec![Trace {
                name: title.clone(),
                points,
                style: TraceStyle::Solid,
            }],
            title,
        }
    }

    /// Overrides the symlog linear threshold on whichever axes use it.
    #[must_use]
    pub fn with_linthresh(mut self, linthresh: f64) -> Self {
        for scale in [&mut self.x_scale, &mut self.y_scale] {
            if let AxisScale::SymLog { linthresh: t } = scale {
                *t = linthresh;
            }
        }
        self
    }
}
