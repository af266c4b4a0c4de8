use std::num::ParseFloatError;

/// Parses a number that may use a comma as its decimal separator.
///
/// The solver logs are written with a localized decimal comma; normalizing
/// it here keeps the rest of the pipeline working with plain `f64` values.
pub(crate) fn parse(field: &str) -> Result<f64, ParseFloatError> {
    field.replace(',', ".").parse()
}
