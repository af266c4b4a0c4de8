use std::collections::BTreeMap;

use crate::{Category, ErrorObservation};

/// Error values organized per recognized (function, method) category.
///
/// Every recognized category is present as a key, possibly with an empty
/// value list, so downstream iteration is exhaustive. Values keep arrival
/// order, which for iteration logs is iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    buckets: BTreeMap<Category, Vec<f64>>,
    dropped: usize,
}

impl Classification {
    /// The error values recorded for a category, in arrival order.
    #[must_use]
    pub fn values(&self, category: Category) -> &[f64] {
        self.buckets.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Number of observations whose (function, method) pair was not
    /// recognized and was therefore excluded from every bucket.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Iterates every recognized category and its value list, in the stable
    /// [`Category`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[f64])> {
        self.buckets
            .iter()
            .map(|(category, values)| (*category, values.as_slice()))
    }
}

/// Buckets observations by recognized (function, method) category.
///
/// Unrecognized combinations are dropped rather than treated as errors.
/// That filtering is deliberate (mixed log files carry records for
/// functions a given chart does not cover), but the loss is surfaced: the
/// drop count is kept on the result and logged as a warning when nonzero.
#[must_use]
pub fn classify(observations: &[ErrorObservation]) -> Classification {
    let mut buckets: BTreeMap<Category, Vec<f64>> =
        Category::all().map(|category| (category, Vec::new())).collect();
    let mut dropped = 0;

    for obs in observations {
        match Category::resolve(&obs.function, &obs.method) {
            Some(category) => buckets
                .entry(category)
                .or_default()
                .push(obs.error),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::warn!("dropped {dropped} record(s) with an unrecognized function/method pair");
    }

    Classification { buckets, dropped }
}
