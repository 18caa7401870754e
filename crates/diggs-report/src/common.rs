//! Shared constants and identifier helpers for DIGGS output.

use diggs_model::HeaderData;
use diggs_model::header::keys;

/// DIGGS 2.6 namespace.
pub const DIGGS_NS: &str = "http://diggsml.org/schemas/2.6";

/// DIGGS 2.6 geotechnical namespace.
pub const DIGGS_GEO_NS: &str = "http://diggsml.org/schemas/2.6/geotechnical";

/// XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// XLink namespace.
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// GML 3.2 namespace.
pub const GML_NS: &str = "http://www.opengis.net/gml/3.2";

/// GML 3.3 compact encoding namespace.
pub const GML_CE_NS: &str = "http://www.opengis.net/gml/3.3/ce";

/// GML 3.3 linear referencing namespace.
pub const GLR_NS: &str = "http://www.opengis.net/gml/3.3/lr";

/// GML 3.3 linear referencing offset vector namespace.
pub const GLROV_NS: &str = "http://www.opengis.net/gml/3.3/lrov";

/// WITSML 1.3.1 namespace.
pub const WITSML_NS: &str = "http://www.witsml.org/schemas/131";

/// Location of the DIGGS schema document.
pub const DIGGS_SCHEMA_URL: &str = "https://diggsml.org/schema-dev/Diggs.xsd";

/// Code space of DIGGS role codes.
pub const ROLES_CODE_SPACE: &str = "https://diggsml.org/def/codes/DIGGS/0.1/roles.xml";

/// `gml:id` of the document root.
pub const ROOT_ID: &str = "guh2diggs_export";

/// Name and `gml:id` of the generated document information and project.
pub const DOCUMENT_NAME: &str = "mwd_guh_2_DIGGS";

/// `gml:id` of the single project.
pub const PROJECT_ID: &str = "p1";

/// `gml:id` of the borehole center line.
pub const CENTER_LINE_ID: &str = "Linear_Extent_0";

/// `gml:id` of the linear spatial reference system.
pub const LRS_ID: &str = "lrs";

/// Placeholder used for missing identifiers.
pub const UNKNOWN: &str = "Unknown";

/// Nature of the investigated material.
pub const INVESTIGATION_TARGET: &str = "Natural Ground";

/// Sentinel written as the null value of every property.
pub const NULL_VALUE: &str = "9999";

/// `xlink:href` value pointing at a local `gml:id`.
pub fn local_ref(id: &str) -> String {
    format!("#{id}")
}

/// Identifiers shared between sections of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIds {
    /// `BoreholeID` header value, or `Unknown` when missing or blank.
    pub borehole: String,
    /// `ID` header value, or `Unknown`.
    pub measurement: String,
}

impl DocumentIds {
    pub fn from_header(header: &HeaderData) -> Self {
        let id_or_unknown = |key: &str| header.non_empty(key).unwrap_or(UNKNOWN).to_string();
        Self {
            borehole: id_or_unknown(keys::BOREHOLE_ID),
            measurement: id_or_unknown(keys::MEASUREMENT_ID),
        }
    }

    /// `gml:id` of the borehole.
    pub fn borehole_gml_id(&self) -> String {
        format!("id_{}", self.borehole)
    }

    /// `gml:id` of the measurement.
    pub fn measurement_gml_id(&self) -> String {
        format!("id_{}", self.measurement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_fall_back_to_unknown() {
        let ids = DocumentIds::from_header(&HeaderData::new());
        assert_eq!(ids.borehole_gml_id(), "id_Unknown");
        assert_eq!(ids.measurement_gml_id(), "id_Unknown");
    }

    #[test]
    fn ids_use_header_values() {
        let header: HeaderData = [("BoreholeID", "B-2"), ("ID", "42")].into_iter().collect();
        let ids = DocumentIds::from_header(&header);
        assert_eq!(ids.borehole_gml_id(), "id_B-2");
        assert_eq!(ids.measurement_gml_id(), "id_42");
        assert_eq!(local_ref(&ids.borehole_gml_id()), "#id_B-2");
    }
}
