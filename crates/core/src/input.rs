use std::{fs, io, path::Path};

use thiserror::Error;

use crate::{Classification, CurveError, ErrorObservation, RecordError, classify, curve, record};

/// Errors produced while ingesting an input file.
///
/// A missing file is deliberately *not* represented here: the reading
/// functions treat it as recoverable and return empty data instead, so one
/// absent log does not abort a whole batch of charts.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{path}:{line}: {source}")]
    Record {
        path: String,
        line: usize,
        source: RecordError,
    },

    #[error("{path}:{line}: {source}")]
    Curve {
        path: String,
        line: usize,
        source: CurveError,
    },

    #[error("failed to read {path}")]
    Io { path: String, source: io::Error },
}

/// Reads a solver error log into observations.
///
/// Blank lines are skipped; every other line must be a valid
/// `function:method:error` record. A missing file logs a warning and
/// returns an empty list, so downstream stages produce empty buckets and
/// charts render with no data rather than the batch aborting.
///
/// # Errors
///
/// Returns an [`InputError`] for any I/O failure other than the file being
/// absent, or for the first malformed record, with the offending path and
/// 1-based line number attached.
pub fn read_log(path: impl AsRef<Path>) -> Result<Vec<ErrorObservation>, InputError> {
    let path = path.as_ref();
    let Some(contents) = read_if_present(path)? else {
        return Ok(Vec::new());
    };

    lines(&contents)
        .map(|(line, text)| {
            record::parse_record(text).map_err(|source| InputError::Record {
                path: path.display().to_string(),
                line,
                source,
            })
        })
        .collect()
}

/// Reads an `x y` curve-data file into points.
///
/// Follows the same policies as [`read_log`]: blank lines are skipped, a
/// missing file yields an empty curve with a warning, and the first
/// malformed line is fatal for this file.
///
/// # Errors
///
/// Returns an [`InputError`] for any I/O failure other than the file being
/// absent, or for the first malformed line.
pub fn read_curve(path: impl AsRef<Path>) -> Result<Vec<[f64; 2]>, InputError> {
    let path = path.as_ref();
    let Some(contents) = read_if_present(path)? else {
        return Ok(Vec::new());
    };

    lines(&contents)
        .map(|(line, text)| {
            curve::parse_curve_point(text).map_err(|source| InputError::Curve {
                path: path.display().to_string(),
                line,
                source,
            })
        })
        .collect()
}

/// Runs the ingestion pipeline for one log file: read, then classify.
///
/// This is the explicit composition of the pipeline stages; all
/// intermediate values are local, nothing is shared between calls.
///
/// # Errors
///
/// Propagates [`read_log`] errors unchanged.
pub fn load_classified(path: impl AsRef<Path>) -> Result<Classification, InputError> {
    let observations = read_log(path)?;
    Ok(classify(&observations))
}

/// Reads a file, treating absence as `None`.
fn read_if_present(path: &Path) -> Result<Option<String>, InputError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::warn!(
                "input file {} not found, continuing with no data",
                path.display()
            );
            Ok(None)
        }
        Err(source) => Err(InputError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Yields non-blank trimmed lines with their 1-based line numbers.
fn lines(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use approx::assert_relative_eq;

    use crate::Category;

    use super::*;

    /// A temp file that cleans up after itself.
    struct TempFile(PathBuf);

    impl TempFile {
        fn new(name: &str, contents: &str) -> Self {
            let path = std::env::temp_dir().join(format!("rootviz-{}-{name}", std::process::id()));
            fs::write(&path, contents).expect("write temp file");
            Self(path)
        }

        fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn missing_log_yields_no_observations() {
        let observations =
            read_log("/nonexistent/rootviz/errors.txt").expect("missing file is recoverable");
        assert!(observations.is_empty());
    }

    #[test]
    fn missing_log_classifies_into_all_empty_buckets() {
        let classified =
            load_classified("/nonexistent/rootviz/errors.txt").expect("missing file is recoverable");
        for (_, values) in classified.iter() {
            assert!(values.is_empty());
        }
        assert_eq!(classified.dropped(), 0);
    }

    #[test]
    fn reads_and_classifies_a_bisection_log() {
        let file = TempFile::new(
            "bisection.txt",
            "f2:Bisection:0,5\nf2:Bisection:0,25\nf2:Bisection:0,125\n",
        );

        let classified = load_classified(file.path()).expect("valid log");
        let category = Category::resolve("f2", "Bisection").expect("recognized");
        assert_eq!(classified.values(category), [0.5, 0.25, 0.125]);
    }

    #[test]
    fn skips_blank_lines() {
        let file = TempFile::new("blank.txt", "f1:Newton:1,0\n\n  \nf1:Newton:0,5\n");
        let observations = read_log(file.path()).expect("valid log");
        assert_eq!(observations.len(), 2);
    }

    #[test]
    fn malformed_record_reports_path_and_line() {
        let file = TempFile::new("malformed.txt", "f1:Newton:1,0\nf1:Newton\n");
        let err = read_log(file.path()).expect_err("second record is malformed");

        match err {
            InputError::Record { line, source, .. } => {
                assert_eq!(line, 2);
                assert_eq!(source, RecordError::FieldCount { found: 2 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reads_a_curve_file() {
        let file = TempFile::new("curve.txt", "-1 2,5\n0 0\n1 -2,5\n");
        let points = read_curve(file.path()).expect("valid curve");

        assert_eq!(points.len(), 3);
        assert_relative_eq!(points[0][1], 2.5);
        assert_relative_eq!(points[2][1], -2.5);
    }

    #[test]
    fn malformed_curve_line_reports_line_number() {
        let file = TempFile::new("badcurve.txt", "1 2\nnot numbers here\n");
        let err = read_curve(file.path()).expect_err("second line is malformed");

        assert!(matches!(err, InputError::Curve { line: 2, .. }));
    }

    #[test]
    fn missing_curve_yields_no_points() {
        let points =
            read_curve("/nonexistent/rootviz/f1_plot.txt").expect("missing file is recoverable");
        assert!(points.is_empty());
    }
}
