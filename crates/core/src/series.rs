use thiserror::Error;

/// Target precisions used as the x-axis of accuracy charts, from 1e-1 down
/// to 1e-15 in strictly decreasing order.
///
/// The ladder is a fixed property of the solver's accuracy sweep, not
/// something read from input files.
pub const PRECISION_LADDER: [f64; 15] = [
    1e-1, 1e-2, 1e-3, 1e-4, 1e-5, 1e-6, 1e-7, 1e-8, 1e-9, 1e-10, 1e-11, 1e-12, 1e-13, 1e-14,
    1e-15,
];

/// A labeled sequence of `[x, y]` points ready for charting.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

/// Errors that can occur when building a plot series.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    #[error("accuracy series has {len} values but the precision ladder has {ladder} rungs")]
    LengthMismatch { len: usize, ladder: usize },
}

impl PlotSeries {
    /// Builds a convergence series: value `i` (zero-based) pairs with
    /// iteration count `i + 1`, so x runs 1..=N with no gaps.
    ///
    /// An empty value list yields an empty series, which is valid and
    /// renders as no data points.
    #[must_use]
    pub fn iteration(label: impl Into<String>, values: &[f64]) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &y)| [(i + 1) as f64, y])
            .collect();

        Self {
            label: label.into(),
            points,
        }
    }

    /// Builds an accuracy series: each value pairs with the corresponding
    /// [`PRECISION_LADDER`] rung, in ladder order.
    ///
    /// A value list shorter than the ladder pairs with a ladder prefix; the
    /// remaining rungs simply have no point.
    ///
    /// # Errors
    ///
    /// Fails with [`SeriesError::LengthMismatch`] when there are more
    /// values than ladder rungs. Extra values have no precision to pair
    /// with; that indicates misaligned input data and is never silently
    /// truncated.
    pub fn accuracy(label: impl Into<String>, values: &[f64]) -> Result<Self, SeriesError> {
        if values.len() > PRECISION_LADDER.len() {
            return Err(SeriesError::LengthMismatch {
                len: values.len(),
                ladder: PRECISION_LADDER.len(),
            });
        }

        let points = PRECISION_LADDER
            .iter()
            .zip(values)
            .map(|(&x, &y)| [x, y])
            .collect();

        Ok(Self {
            label: label.into(),
            points,
        })
    }

    /// The ideal-agreement diagonal for accuracy charts: every ladder rung
    /// paired with itself, so observed error matching requested precision
    /// falls exactly on this line.
    #[must_use]
    pub fn ideal_diagonal() -> Self {
        Self {
            label: "y = x".to_owned(),
            points: PRECISION_LADDER.iter().map(|&x| [x, x]).collect(),
        }
    }

    /// Number of points in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
