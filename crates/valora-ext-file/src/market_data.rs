//! File-based curve data sources.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;

use valora_curves::CurvePoint;

use crate::error::{FileError, FileResult};

/// CSV record for one curve export row.
#[derive(Debug, Deserialize)]
struct CurveRecord {
    #[serde(rename = "Index", default)]
    index: String,
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Date", default)]
    date: Option<String>,
    #[serde(rename = "Days")]
    days: i64,
    #[serde(rename = "Rate", default)]
    rate: f64,
    #[serde(rename = "DF")]
    df: f64,
}

impl CurveRecord {
    /// Converts a parsed record into a curve row, rejecting invalid values.
    ///
    /// `line` is the 1-based data row number used in error messages. The
    /// `Date` column is informational and parsed leniently: an absent or
    /// unparseable date becomes `None` rather than failing the load.
    fn into_point(self, line: usize) -> FileResult<CurvePoint> {
        if self.days < 0 {
            return Err(FileError::invalid_row(
                line,
                format!("negative Days: {}", self.days),
            ));
        }
        if !self.df.is_finite() {
            return Err(FileError::invalid_row(
                line,
                format!("non-finite DF: {}", self.df),
            ));
        }

        let date = self
            .date
            .as_deref()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());

        Ok(CurvePoint {
            index: self.index,
            currency: self.currency,
            date,
            days: self.days as f64,
            rate: self.rate,
            discount_factor: self.df,
        })
    }
}

/// CSV-based curve export source.
///
/// Reads fixed-format exports with an `Index,Currency,Date,Days,Rate,DF`
/// header. Rows for all currencies are returned; filtering to one currency
/// happens at curve construction.
///
/// # Example
///
/// ```rust,no_run
/// use valora_curves::DiscountCurve;
/// use valora_ext_file::CsvCurveSource;
///
/// let source = CsvCurveSource::new("curves/eod_export.csv");
/// let rows = source.load().unwrap();
/// let curve = DiscountCurve::new(&rows, "USD").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CsvCurveSource {
    file_path: PathBuf,
}

impl CsvCurveSource {
    /// Creates a source reading from `file_path`.
    #[must_use]
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the source path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Loads all curve rows from the file.
    ///
    /// The first malformed row aborts the load; partial results are never
    /// returned.
    pub fn load(&self) -> FileResult<Vec<CurvePoint>> {
        let mut reader =
            csv::Reader::from_path(&self.file_path).map_err(|e| FileError::Io(e.to_string()))?;

        let mut points = Vec::new();
        for (i, result) in reader.deserialize().enumerate() {
            let record: CurveRecord = result.map_err(|e| FileError::Parse(e.to_string()))?;
            points.push(record.into_point(i + 1)?);
        }

        debug!(
            "loaded {} curve rows from {}",
            points.len(),
            self.file_path.display()
        );

        Ok(points)
    }
}

/// Convenience wrapper: loads all curve rows from a CSV export at `path`.
pub fn load_curve_points(path: impl AsRef<Path>) -> FileResult<Vec<CurvePoint>> {
    CsvCurveSource::new(path).load()
}
