//! Parsed contents of a `.guh` drilling log.

use serde::{Deserialize, Serialize};

use crate::header::HeaderData;
use crate::row::DataRow;
use crate::schema::ParameterSchema;

/// Header, parameter schema and data rows of one log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLog {
    pub header: HeaderData,
    pub schema: ParameterSchema,
    pub rows: Vec<DataRow>,
    /// Lines skipped because they could not be interpreted.
    pub skipped_lines: usize,
    /// True when the parameter section was missing and defaults were used.
    pub schema_defaulted: bool,
}

impl ParsedLog {
    pub fn new(header: HeaderData, schema: ParameterSchema, rows: Vec<DataRow>) -> Self {
        Self {
            header,
            schema,
            rows,
            skipped_lines: 0,
            schema_defaulted: false,
        }
    }

    /// Maximum absolute depth over rows with a numeric depth.
    pub fn max_depth(&self) -> Option<f64> {
        max_abs_depth(&self.rows)
    }
}

/// Maximum absolute depth over rows whose depth field parses as a number.
pub fn max_abs_depth(rows: &[DataRow]) -> Option<f64> {
    rows.iter()
        .filter_map(DataRow::depth_value)
        .map(f64::abs)
        .fold(None, |max, depth| match max {
            Some(current) if current >= depth => Some(current),
            _ => Some(depth),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_abs_depth_skips_unparsable_rows() {
        let rows = vec![
            DataRow::from(vec!["t0", "5.0"]),
            DataRow::from(vec!["t1", "-12.3"]),
            DataRow::from(vec!["t2", "bad"]),
        ];
        assert_eq!(max_abs_depth(&rows), Some(12.3));
    }

    #[test]
    fn max_abs_depth_of_nothing_is_none() {
        assert_eq!(max_abs_depth(&[]), None);
        assert_eq!(max_abs_depth(&[DataRow::from(vec!["t", "x"])]), None);
    }
}
