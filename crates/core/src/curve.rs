use std::num::ParseFloatError;

use thiserror::Error;

use crate::decimal;

/// Errors that can occur when parsing a curve-data line.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    #[error("expected 2 space-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid coordinate {field:?}")]
    Number {
        field: String,
        source: ParseFloatError,
    },
}

/// Parses one `x y` curve-data line into a point.
///
/// Curve files hold a raw function curve rather than an error series: one
/// space-separated point per line, both coordinates with an optional
/// decimal comma.
///
/// # Errors
///
/// Returns a [`CurveError`] if the line does not split into exactly two
/// fields or either coordinate is not a decimal number.
pub fn parse_curve_point(line: &str) -> Result<[f64; 2], CurveError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[x, y] = fields.as_slice() else {
        return Err(CurveError::FieldCount {
            found: fields.len(),
        });
    };

    let parse = |field: &str| {
        decimal::parse(field).map_err(|source| CurveError::Number {
            field: field.to_owned(),
            source,
        })
    };

    Ok([parse(x)?, parse(y)?])
}
