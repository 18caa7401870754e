//! Borehole coordinates and depths.

use diggs_model::header::keys;
use diggs_model::{DataRow, HeaderData, max_abs_depth};

use crate::derived::{Derived, Diagnostic};

/// Depth used when no depth can be read from the data rows, in meters.
pub const DEFAULT_DEPTH_M: f64 = 10.0;

/// Position written when the header coordinates cannot be parsed.
pub const DEFAULT_POSITION: &str = "0.000000 0.000000 0.00";

/// Surface location of the borehole (decimal degrees, meters).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Read the three modem coordinates from the header.
    ///
    /// An absent field counts as `0`; a present field that is not a finite
    /// number turns the whole position into the origin.
    pub fn from_header(header: &HeaderData) -> Derived<Self> {
        let parse = |key: &'static str| -> Result<f64, Diagnostic> {
            let Some(raw) = header.get(key) else {
                return Ok(0.0);
            };
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| Diagnostic::InvalidCoordinate {
                    key,
                    value: raw.to_string(),
                })
        };
        let parsed = parse(keys::LATITUDE).and_then(|latitude| {
            let longitude = parse(keys::LONGITUDE)?;
            let altitude = parse(keys::ALTITUDE)?;
            Ok(Self::new(latitude, longitude, altitude))
        });
        match parsed {
            Ok(coordinates) => Derived::found(coordinates),
            Err(diagnostic) => Derived::defaulted(Self::default(), diagnostic),
        }
    }

    /// `"lat lon alt"` with 6, 6 and 2 decimals.
    pub fn position(&self) -> String {
        format!(
            "{:.6} {:.6} {:.2}",
            self.latitude, self.longitude, self.altitude
        )
    }

    /// The same horizontal position `depth` meters lower.
    pub fn descend(&self, depth: f64) -> Self {
        Self {
            altitude: self.altitude - depth,
            ..*self
        }
    }
}

/// Depth value of the last data row, sign included.
///
/// The bottom of the center line sits this far below the surface, so a
/// negative depth puts it above the reference point.
pub fn final_depth(rows: &[DataRow]) -> Derived<f64> {
    let Some(last) = rows.last() else {
        return Derived::defaulted(DEFAULT_DEPTH_M, Diagnostic::NoRows);
    };
    match last.depth_value() {
        Some(depth) => Derived::found(depth),
        None => Derived::defaulted(
            DEFAULT_DEPTH_M,
            Diagnostic::InvalidLastDepth {
                value: last.depth().map(str::to_string),
            },
        ),
    }
}

/// Maximum absolute depth over all rows with a numeric depth.
pub fn total_measured_depth(rows: &[DataRow]) -> Derived<f64> {
    if rows.is_empty() {
        return Derived::defaulted(DEFAULT_DEPTH_M, Diagnostic::NoRows);
    }
    match max_abs_depth(rows) {
        Some(depth) => Derived::found(depth),
        None => Derived::defaulted(DEFAULT_DEPTH_M, Diagnostic::NoValidDepths),
    }
}

/// Depth formatted with two decimals.
pub fn format_depth(depth: f64) -> String {
    format!("{depth:.2}")
}
