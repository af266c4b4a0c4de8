use std::num::ParseFloatError;

use thiserror::Error;

use crate::decimal;

/// A single error measurement reported by the external solver.
///
/// The function and method are kept as raw text here; resolving them
/// against the recognized category set is [`classify`]'s job, which is what
/// lets unknown combinations be filtered leniently instead of failing the
/// whole file at parse time.
///
/// [`classify`]: crate::classify
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorObservation {
    pub function: String,
    pub method: String,
    pub error: f64,
}

/// Errors that can occur when parsing a single log record.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected 3 colon-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid error value {field:?}")]
    Number {
        field: String,
        source: ParseFloatError,
    },
}

/// Parses one `function:method:error` log line into an observation.
///
/// The error field may use a comma as its decimal separator. `NaN` and
/// infinity payloads parse successfully and are passed through unchanged;
/// judging magnitudes is the caller's concern.
///
/// # Errors
///
/// Returns a [`RecordError`] if the line does not split into exactly three
/// fields, or if the error field is not a decimal number after normalizing
/// the separator.
pub fn parse_record(line: &str) -> Result<ErrorObservation, RecordError> {
    let fields: Vec<&str> = line.split(':').collect();
    let &[function, method, error] = fields.as_slice() else {
        return Err(RecordError::FieldCount {
            found: fields.len(),
        });
    };

    let error = decimal::parse(error).map_err(|source| RecordError::Number {
        field: error.to_owned(),
        source,
    })?;

    Ok(ErrorObservation {
        function: function.to_owned(),
        method: method.to_owned(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn parses_a_valid_record() {
        let obs = parse_record("f1:Newton:1,23").expect("valid record");
        assert_eq!(obs.function, "f1");
        assert_eq!(obs.method, "Newton");
        assert_relative_eq!(obs.error, 1.23);
    }

    #[test]
    fn parses_period_separated_errors_too() {
        let obs = parse_record("f2:Bisection:0.125").expect("valid record");
        assert_relative_eq!(obs.error, 0.125);
    }

    #[test]
    fn keeps_unrecognized_names_as_raw_text() {
        let obs = parse_record("f9:Secant:2,0").expect("parse is lenient about names");
        assert_eq!(obs.function, "f9");
        assert_eq!(obs.method, "Secant");
    }

    #[test]
    fn rejects_wrong_field_counts() {
        assert_eq!(
            parse_record("f1:Newton"),
            Err(RecordError::FieldCount { found: 2 })
        );
        assert_eq!(
            parse_record("f1:Newton:1,0:extra"),
            Err(RecordError::FieldCount { found: 4 })
        );
        assert_eq!(parse_record(""), Err(RecordError::FieldCount { found: 1 }));
    }

    #[test]
    fn rejects_non_numeric_error_field() {
        assert!(matches!(
            parse_record("f1:Newton:oops"),
            Err(RecordError::Number { field, .. }) if field == "oops"
        ));
    }

    #[test]
    fn accepts_nan_and_infinity_payloads() {
        assert!(
            parse_record("f1:Newton:NaN")
                .expect("NaN parses")
                .error
                .is_nan()
        );
        assert!(
            parse_record("f1:Newton:inf")
                .expect("inf parses")
                .error
                .is_infinite()
        );
    }
}
