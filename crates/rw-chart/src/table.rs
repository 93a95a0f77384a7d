//! Tabular data parsing.
//!
//! Chart data is a header line of labels followed by one line per series,
//! each split on commas. Cells are kept verbatim: no trimming, no quoting,
//! no numeric conversion, and rows may differ in length from the header.

use crate::consts::DELIMITER;

/// Error parsing chart data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// No lines at all.
    #[error("chart is empty")]
    Empty,
}

/// Labels and series split from raw chart data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    /// Cells of the header line.
    pub labels: Vec<String>,
    /// Cells of each following line, in order.
    pub series: Vec<Vec<String>>,
}

impl ParsedTable {
    /// Parse pre-split lines. Line 0 is the header.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, TableError> {
        let (header, rows) = lines.split_first().ok_or(TableError::Empty)?;
        Ok(Self {
            labels: split_row(header.as_ref()),
            series: rows.iter().map(|row| split_row(row.as_ref())).collect(),
        })
    }

    /// Parse file content, splitting lines on `\n`.
    ///
    /// Text always has at least one line, so an empty string yields a single
    /// empty label and no series.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut rows = text.split('\n').map(split_row);
        Self {
            labels: rows.next().unwrap_or_default(),
            series: rows.collect(),
        }
    }
}

fn split_row(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(str::to_owned).collect()
}
