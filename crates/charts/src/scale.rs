/// Linear threshold used by default for symlog error axes.
///
/// Matches the smallest rung of the precision ladder, so every target
/// precision the solver was asked for still lands in the logarithmic region
/// of the axis.
pub const DEFAULT_LINTHRESH: f64 = 1e-15;

/// How an axis maps data values to chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisScale {
    /// Values pass through unchanged.
    Linear,

    /// Symmetric log: logarithmic away from zero but linear within
    /// `linthresh` of it, so exact-zero and sign-changing errors stay
    /// plottable instead of being undefined on a pure log axis.
    SymLog { linthresh: f64 },
}

impl AxisScale {
    /// A symlog scale with the default linear threshold.
    #[must_use]
    pub fn sym_log() -> Self {
        Self::SymLog {
            linthresh: DEFAULT_LINTHRESH,
        }
    }

    /// Transforms one data value into chart coordinates.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::SymLog { linthresh } => symlog(value, linthresh),
        }
    }
}

/// Symmetric log transform: odd, fixes zero, close to linear within
/// `linthresh` of zero, and log10-like beyond it.
fn symlog(value: f64, linthresh: f64) -> f64 {
    value.signum() * (1.0 + value.abs() / linthresh).log10()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn linear_scale_is_identity() {
        for value in [-3.0, 0.0, 0.5, 1e-20, 7e9] {
            assert_relative_eq!(AxisScale::Linear.apply(value), value);
        }
    }

    #[test]
    fn symlog_fixes_zero() {
        assert_relative_eq!(AxisScale::sym_log().apply(0.0), 0.0);
    }

    #[test]
    fn symlog_has_odd_symmetry() {
        let scale = AxisScale::sym_log();
        for value in [1e-18, 1e-15, 1e-7, 0.5, 100.0] {
            assert_relative_eq!(scale.apply(-value), -scale.apply(value));
        }
    }

    #[test]
    fn symlog_is_strictly_monotone() {
        let scale = AxisScale::sym_log();
        let values = [-1.0, -1e-8, -1e-16, 0.0, 1e-16, 1e-8, 1e-3, 1.0, 10.0];
        for pair in values.windows(2) {
            assert!(scale.apply(pair[0]) < scale.apply(pair[1]));
        }
    }

    #[test]
    fn symlog_is_log_like_well_beyond_the_threshold() {
        let scale = AxisScale::SymLog { linthresh: 1e-15 };
        // At v = linthresh * 10^k with k large, the transform approaches k.
        assert_relative_eq!(scale.apply(1e-5), 10.0, epsilon = 1e-9);
        assert_relative_eq!(scale.apply(1e-10), 5.0, epsilon = 1e-4);
    }

    #[test]
    fn symlog_is_near_linear_within_the_threshold() {
        let scale = AxisScale::SymLog { linthresh: 1e-15 };
        // Below the threshold the transform is v / (linthresh * ln 10) to
        // first order, so sub-threshold values stay small but nonzero.
        let inside = scale.apply(1e-16);
        assert!(inside.is_finite());
        assert!(inside > 0.0);
        assert!(inside < 0.05);
    }
}
