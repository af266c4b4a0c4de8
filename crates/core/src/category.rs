use std::fmt;

/// Test functions the external solver reports on.
///
/// The solver logs `f3` for iteration records but splits the same function
/// into its two roots, `f3_1` and `f3_2`, for accuracy records. All five
/// names are recognized as distinct functions so both log flavors classify
/// without special cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestFunction {
    F1,
    F2,
    F3,
    F3Root1,
    F3Root2,
}

impl TestFunction {
    /// Every recognized test function, in display order.
    pub const ALL: [Self; 5] = [Self::F1, Self::F2, Self::F3, Self::F3Root1, Self::F3Root2];

    /// The name used for this function in log files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::F1 => "f1",
            Self::F2 => "f2",
            Self::F3 => "f3",
            Self::F3Root1 => "f3_1",
            Self::F3Root2 => "f3_2",
        }
    }

    fn from_log_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for TestFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root-finding methods the external solver runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SolverMethod {
    /// Derivative-based iteration.
    Newton,
    /// Interval-halving bracketing.
    Bisection,
}

impl SolverMethod {
    /// Every recognized method, in display order.
    pub const ALL: [Self; 2] = [Self::Newton, Self::Bisection];

    /// The name used for this method in log files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newton => "Newton",
            Self::Bisection => "Bisection",
        }
    }

    fn from_log_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }
}

impl fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recognized (function, method) combination.
///
/// The `Ord` derive gives buckets keyed by `Category` a stable iteration
/// order: functions in [`TestFunction::ALL`] order, then methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category {
    pub function: TestFunction,
    pub method: SolverMethod,
}

impl Category {
    /// Iterates every recognized category in stable order.
    pub fn all() -> impl Iterator<Item = Self> {
        TestFunction::ALL.into_iter().flat_map(|function| {
            SolverMethod::ALL
                .into_iter()
                .map(move |method| Self { function, method })
        })
    }

    /// Resolves raw log text against the recognized set.
    ///
    /// Returns `None` when either name is unknown; the classifier treats
    /// that as a droppable record, not an error.
    #[must_use]
    pub fn resolve(function: &str, method: &str) -> Option<Self> {
        Some(Self {
            function: TestFunction::from_log_name(function)?,
            method: SolverMethod::from_log_name(method)?,
        })
    }

    /// Human-readable chart label, e.g. `f1 / Newton`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {}", self.function, self.method)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.function, self.method)
    }
}
