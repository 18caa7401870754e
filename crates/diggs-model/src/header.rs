//! Header key/value fields from the `[HEADER]` section.

use serde::{Deserialize, Serialize};

/// Header keys holding modem coordinates.
pub const COORDINATE_KEYS: [&str; 3] = ["Latitude_Modem", "Longitude_Modem", "Altitude_Modem"];

/// Well-known header keys read by the DIGGS writer.
pub mod keys {
    pub const BOREHOLE_ID: &str = "BoreholeID";
    pub const MEASUREMENT_ID: &str = "ID";
    pub const CONTRACTOR: &str = "Contractor";
    pub const CLIENT: &str = "Client";
    pub const LATITUDE: &str = "Latitude_Modem";
    pub const LONGITUDE: &str = "Longitude_Modem";
    pub const ALTITUDE: &str = "Altitude_Modem";
    pub const CASING_OD: &str = "CasingOD(inch)";
    pub const CROWD_CYLINDER_AREA: &str = "CrowdCylArea";
    pub const AUGER_ID: &str = "AugerID";
    pub const ROLLER_BIT: &str = "Rollerbit";
    pub const ROCK_CORE_SIZE: &str = "RockCoreSize(inch)";

    /// Header key of the rotary drive gear ratio for gear `n` (1-based).
    pub fn gear_ratio(n: usize) -> String {
        format!("Ratio_G{n}")
    }
}

/// Ordered header fields.
///
/// Keys keep the position of their first occurrence; a repeated key
/// overwrites the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderData {
    fields: Vec<(String, String)>,
}

impl HeaderData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, trimming key and value.
    ///
    /// Coordinate keys additionally lose their leading zeros, keeping a
    /// single `"0"` when nothing else remains.
    pub fn insert(&mut self, key: &str, value: &str) {
        let key = key.trim();
        let mut value = value.trim();
        if is_coordinate_key(key) {
            value = strip_leading_zeros(value);
        }
        match self.fields.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, slot)) => *slot = value.to_string(),
            None => self.fields.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Field value, or `""` when absent.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// Field value when present and not blank.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for HeaderData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut header = Self::new();
        for (key, value) in iter {
            header.insert(key.as_ref(), value.as_ref());
        }
        header
    }
}

pub fn is_coordinate_key(key: &str) -> bool {
    COORDINATE_KEYS.contains(&key)
}

/// Strip leading `'0'` characters, returning `"0"` if the value becomes empty.
pub fn strip_leading_zeros(value: &str) -> &str {
    let stripped = value.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}
