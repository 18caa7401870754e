//! Configuration options for a single conversion run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::row::DEPTH_COLUMN;

/// Which data-row columns are exported as DIGGS data values.
///
/// Column 0 is always the timestamp and goes to the time domain instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnAlignment {
    /// Depth and every channel (row fields `1..`).
    #[default]
    DepthAndChannels,
    /// Channels only (row fields `2..`); depth stays in the borehole geometry.
    ChannelsOnly,
}

impl ColumnAlignment {
    /// Index of the first row field written to `dataValues`.
    pub fn first_value_column(self) -> usize {
        match self {
            Self::DepthAndChannels => DEPTH_COLUMN,
            Self::ChannelsOnly => DEPTH_COLUMN + 1,
        }
    }
}

/// DIGGS measurement element emitted for the drilling log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeasurementKind {
    /// `MeasurementWhileDrilling` with an `MWDResult`.
    #[default]
    MeasurementWhileDrilling,
    /// Generic `Test` with a `TestResult` and a depth point list.
    Test,
}

impl MeasurementKind {
    pub fn element_name(self) -> &'static str {
        match self {
            Self::MeasurementWhileDrilling => "MeasurementWhileDrilling",
            Self::Test => "Test",
        }
    }

    pub fn result_element_name(self) -> &'static str {
        match self {
            Self::MeasurementWhileDrilling => "MWDResult",
            Self::Test => "TestResult",
        }
    }
}

/// What to do when the input file cannot be read.
///
/// Serialization failures always produce the fallback document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Report the failure before parsing and write nothing.
    #[default]
    Strict,
    /// Write a minimal DIGGS document carrying the error message.
    Fallback,
}

/// Options controlling one `.guh` to DIGGS conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    pub columns: ColumnAlignment,
    pub measurement: MeasurementKind,
    pub on_failure: FailurePolicy,
    /// Fixed `creationDate`; today's local date when `None`.
    pub creation_date: Option<NaiveDate>,
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that abort on an unreadable input.
    pub fn strict() -> Self {
        Self {
            on_failure: FailurePolicy::Strict,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_columns(mut self, columns: ColumnAlignment) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_measurement(mut self, measurement: MeasurementKind) -> Self {
        self.measurement = measurement;
        self
    }

    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    #[must_use]
    pub fn with_creation_date(mut self, date: NaiveDate) -> Self {
        self.creation_date = Some(date);
        self
    }
}
