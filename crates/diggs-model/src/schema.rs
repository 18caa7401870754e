//! Parameter names and units from the `[PARAMETER]` section.

use serde::{Deserialize, Serialize};

/// Placeholder name of the timestamp column.
pub const DATUM: &str = "Datum";

/// Unit token meaning "dimensionless / no unit".
pub const NO_UNIT: &str = "-";

/// Parallel lists of parameter names and units.
///
/// Both lists always have the same length, including after deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SchemaLists")]
pub struct ParameterSchema {
    names: Vec<String>,
    units: Vec<String>,
}

/// Unchecked wire form of [`ParameterSchema`].
#[derive(Deserialize)]
struct SchemaLists {
    names: Vec<String>,
    units: Vec<String>,
}

impl From<SchemaLists> for ParameterSchema {
    fn from(lists: SchemaLists) -> Self {
        Self::new(lists.names, lists.units)
    }
}

/// One parameter definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter<'a> {
    pub name: &'a str,
    pub unit: &'a str,
}

impl Parameter<'_> {
    pub fn is_datum(&self) -> bool {
        self.name == DATUM
    }

    /// Unit, unless it is the `-` placeholder.
    pub fn unit_of_measure(&self) -> Option<&str> {
        if self.unit == NO_UNIT {
            None
        } else {
            Some(self.unit)
        }
    }
}

impl ParameterSchema {
    /// Build a schema from name and unit lists, truncating both to the
    /// shorter length.
    pub fn new(mut names: Vec<String>, mut units: Vec<String>) -> Self {
        let len = names.len().min(units.len());
        names.truncate(len);
        units.truncate(len);
        Self { names, units }
    }

    /// Schema used when the input has no usable parameter section.
    pub fn fallback() -> Self {
        Self::new(
            vec![DATUM.to_string(), "Depth".to_string()],
            vec![NO_UNIT.to_string(), "m".to_string()],
        )
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Parameter<'_>> {
        self.names
            .iter()
            .zip(self.units.iter())
            .map(|(name, unit)| Parameter { name, unit })
    }

    /// Parameters that describe measured channels (everything except `Datum`).
    pub fn channels(&self) -> impl Iterator<Item = Parameter<'_>> {
        self.iter().filter(|parameter| !parameter.is_datum())
    }
}
