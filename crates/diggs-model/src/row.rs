//! Data rows from the `[DATA]` section.

use serde::{Deserialize, Serialize};

/// Column index of the timestamp.
pub const TIMESTAMP_COLUMN: usize = 0;

/// Column index of the depth reading.
pub const DEPTH_COLUMN: usize = 1;

/// Minimum number of fields a row needs to be kept.
pub const MIN_ROW_FIELDS: usize = 2;

/// Timestamp of the row supplied when the parameter section is missing.
pub const PLACEHOLDER_TIMESTAMP: &str = "1900-01-01T00:00:00";

/// One semicolon-split line of drilling data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRow {
    fields: Vec<String>,
}

impl DataRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Split a raw data line on `;`.
    pub fn from_line(line: &str) -> Self {
        Self::new(line.split(';').map(str::to_string).collect())
    }

    /// Row used when the input has neither parameters nor data.
    pub fn placeholder() -> Self {
        Self::new(vec![PLACEHOLDER_TIMESTAMP.to_string(), "0.0".to_string()])
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Trimmed timestamp, if present and not blank.
    pub fn timestamp(&self) -> Option<&str> {
        self.get(TIMESTAMP_COLUMN)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn depth(&self) -> Option<&str> {
        self.get(DEPTH_COLUMN)
    }

    /// Depth parsed as a number.
    pub fn depth_value(&self) -> Option<f64> {
        self.depth()
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }

    /// Fields from `start` onward, or `None` when the row is too short to
    /// contribute any of them.
    pub fn values_from(&self, start: usize) -> Option<&[String]> {
        if self.fields.len() > start {
            Some(&self.fields[start..])
        } else {
            None
        }
    }
}

impl From<Vec<&str>> for DataRow {
    fn from(fields: Vec<&str>) -> Self {
        Self::new(fields.into_iter().map(str::to_string).collect())
    }
}
