//! Namespace configuration applied to the document root.

use crate::common::{
    DIGGS_GEO_NS, DIGGS_NS, DIGGS_SCHEMA_URL, GLR_NS, GLROV_NS, GML_CE_NS, GML_NS, WITSML_NS,
    XLINK_NS, XSI_NS,
};

/// Prefix table and schema location written on the root element.
///
/// Built once per run and handed to the serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    default_namespace: String,
    prefixes: Vec<(String, String)>,
    schema_location: Option<String>,
}

impl Namespaces {
    /// Start from a default namespace with no prefixes.
    pub fn new(default_namespace: impl Into<String>) -> Self {
        Self {
            default_namespace: default_namespace.into(),
            prefixes: Vec::new(),
            schema_location: None,
        }
    }

    /// Full DIGGS 2.6 namespace set.
    pub fn diggs_2_6() -> Self {
        Self::new(DIGGS_NS)
            .with_prefix("xsi", XSI_NS)
            .with_prefix("xlink", XLINK_NS)
            .with_prefix("gml", GML_NS)
            .with_prefix("g3.3", GML_CE_NS)
            .with_prefix("glr", GLR_NS)
            .with_prefix("glrov", GLROV_NS)
            .with_prefix("diggs_geo", DIGGS_GEO_NS)
            .with_prefix("witsml", WITSML_NS)
            .with_prefix("diggs", DIGGS_NS)
            .with_schema_location(format!("{DIGGS_NS} {DIGGS_SCHEMA_URL}"))
    }

    /// Namespaces needed by the fallback document.
    pub fn minimal() -> Self {
        Self::new(DIGGS_NS).with_prefix("gml", GML_NS)
    }

    /// Add or replace a prefix binding.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let uri = uri.into();
        match self.prefixes.iter_mut().find(|(existing, _)| *existing == prefix) {
            Some((_, slot)) => *slot = uri,
            None => self.prefixes.push((prefix, uri)),
        }
        self
    }

    /// Set `xsi:schemaLocation`. Requires an `xsi` prefix to be meaningful.
    #[must_use]
    pub fn with_schema_location(mut self, location: impl Into<String>) -> Self {
        self.schema_location = Some(location.into());
        self
    }

    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    pub fn uri_for(&self, prefix: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|(existing, _)| existing == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    /// Root attributes in write order: `xmlns`, `xmlns:*`, then
    /// `xsi:schemaLocation`.
    pub fn root_attributes(&self) -> Vec<(String, String)> {
        let mut attributes = Vec::with_capacity(self.prefixes.len() + 2);
        attributes.push(("xmlns".to_string(), self.default_namespace.clone()));
        for (prefix, uri) in &self.prefixes {
            attributes.push((format!("xmlns:{prefix}"), uri.clone()));
        }
        if let Some(location) = &self.schema_location {
            attributes.push(("xsi:schemaLocation".to_string(), location.clone()));
        }
        attributes
    }
}

impl Default for Namespaces {
    fn default() -> Self {
        Self::diggs_2_6()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diggs_set_declares_all_prefixes() {
        let namespaces = Namespaces::default();
        for prefix in [
            "xsi", "xlink", "gml", "g3.3", "glr", "glrov", "diggs_geo", "witsml", "diggs",
        ] {
            assert!(namespaces.uri_for(prefix).is_some(), "{prefix}");
        }
        assert_eq!(namespaces.default_namespace(), DIGGS_NS);
    }

    #[test]
    fn root_attributes_order() {
        let attributes = Namespaces::default().root_attributes();
        assert_eq!(attributes.first().map(|(k, _)| k.as_str()), Some("xmlns"));
        assert_eq!(
            attributes.last().map(|(k, _)| k.as_str()),
            Some("xsi:schemaLocation")
        );
        assert_eq!(attributes.len(), 11);
    }

    #[test]
    fn with_prefix_replaces_existing_binding() {
        let namespaces = Namespaces::minimal().with_prefix("gml", "urn:test");
        assert_eq!(namespaces.uri_for("gml"), Some("urn:test"));
        assert_eq!(namespaces.root_attributes().len(), 2);
    }
}
