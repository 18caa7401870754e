use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use diggs_model::{DataRow, HeaderData, ParsedLog, PropertyClass};
use diggs_report::Diagnostic;

/// Statistics of a successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub borehole: String,
    pub measurement: String,
    pub parameters: usize,
    pub rows: usize,
    pub skipped_lines: usize,
    pub schema_defaulted: bool,
    pub max_depth: Option<f64>,
    pub diagnostics: Vec<Diagnostic>,
}

/// How a conversion run ended when it did not return an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    /// The full document was written.
    Converted(ConversionReport),
    /// The conversion failed and the fallback document was written instead.
    Fallback { output: PathBuf, message: String },
}

impl ConversionOutcome {
    /// Process exit code: 0 converted, 2 fallback written.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Converted(_) => 0,
            Self::Fallback { .. } => 2,
        }
    }
}

/// One parameter as shown by `inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterSummary {
    pub name: String,
    pub unit: String,
    pub property_class: PropertyClass,
}

/// Parse summary printed by `inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct LogSummary {
    pub path: PathBuf,
    pub header: HeaderData,
    pub parameters: Vec<ParameterSummary>,
    pub rows: usize,
    pub columns: Option<usize>,
    pub skipped_lines: usize,
    pub schema_defaulted: bool,
    pub max_depth: Option<f64>,
    pub first_timestamp: Option<String>,
    pub last_timestamp: Option<String>,
}

impl LogSummary {
    pub fn from_log(path: PathBuf, log: &ParsedLog) -> Self {
        let parameters = log
            .schema
            .iter()
            .map(|parameter| ParameterSummary {
                name: parameter.name.to_string(),
                unit: parameter.unit.to_string(),
                property_class: PropertyClass::from_name(parameter.name),
            })
            .collect();
        let timestamp =
            |row: Option<&DataRow>| row.and_then(DataRow::timestamp).map(str::to_string);
        Self {
            path,
            header: log.header.clone(),
            parameters,
            rows: log.rows.len(),
            columns: log.rows.first().map(DataRow::len),
            skipped_lines: log.skipped_lines,
            schema_defaulted: log.schema_defaulted,
            max_depth: log.max_depth(),
            first_timestamp: timestamp(log.rows.first()),
            last_timestamp: timestamp(log.rows.last()),
        }
    }

    /// Pretty-printed JSON for `inspect --json`.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("encode inspect summary")
    }
}
