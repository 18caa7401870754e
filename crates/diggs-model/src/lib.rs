//! Shared data model for the `.guh` to DIGGS converter.
//!
//! - [`HeaderData`], [`ParameterSchema`] and [`DataRow`] hold what the
//!   section parser reads from a drilling log.
//! - [`DiggsDocument`] is the element tree the XML writer builds.
//! - [`ConversionOptions`] configures one conversion run.

pub mod document;
pub mod header;
pub mod log;
pub mod options;
pub mod property;
pub mod row;
pub mod schema;

pub use document::{DIGGS_ROOT, DiggsDocument, XmlElement};
pub use header::{COORDINATE_KEYS, HeaderData, strip_leading_zeros};
pub use log::{ParsedLog, max_abs_depth};
pub use options::{ColumnAlignment, ConversionOptions, FailurePolicy, MeasurementKind};
pub use property::{PROPERTY_CLASS_CODE_SPACE, PropertyClass};
pub use row::{DEPTH_COLUMN, DataRow, MIN_ROW_FIELDS, PLACEHOLDER_TIMESTAMP, TIMESTAMP_COLUMN};
pub use schema::{DATUM, NO_UNIT, Parameter, ParameterSchema};
