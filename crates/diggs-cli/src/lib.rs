//! CLI library components for the `.guh` to DIGGS converter.

pub mod logging;
pub mod pipeline;
pub mod types;

pub use pipeline::{DEFAULT_INPUT, DEFAULT_OUTPUT, convert_file};
pub use types::{ConversionOutcome, ConversionReport, LogSummary, ParameterSummary};
