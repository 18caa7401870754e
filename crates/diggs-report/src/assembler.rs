//! Builds the DIGGS element tree from a parsed drilling log.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, info_span};

use diggs_model::header::keys;
use diggs_model::{
    ConversionOptions, DataRow, DiggsDocument, HeaderData, ParameterSchema, ParsedLog, XmlElement,
};

use crate::borehole::sampling_feature;
use crate::common::{DOCUMENT_NAME, DocumentIds, PROJECT_ID, ROLES_CODE_SPACE, ROOT_ID};
use crate::derived::Diagnostic;
use crate::measurement::measurement;

/// Role code of the contractor named in the header.
const CONTRACTOR_ROLE: &str = "drilling_contractor";

/// An assembled document plus every default substituted while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub document: DiggsDocument,
    pub diagnostics: Vec<Diagnostic>,
}

impl Assembly {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// `creationDate` of a run: the pinned date, or today in local time.
pub fn creation_date(options: &ConversionOptions) -> NaiveDate {
    options
        .creation_date
        .unwrap_or_else(|| Local::now().date_naive())
}

pub(crate) fn date_text(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Assemble the full document.
///
/// Never fails: every missing or malformed input is replaced by a default and
/// reported in [`Assembly::diagnostics`].
pub fn assemble(
    header: &HeaderData,
    schema: &ParameterSchema,
    rows: &[DataRow],
    options: &ConversionOptions,
) -> Assembly {
    let span = info_span!("assemble", rows = rows.len(), parameters = schema.len());
    let _guard = span.enter();

    let ids = DocumentIds::from_header(header);
    let mut diagnostics = Vec::new();
    let mut document = DiggsDocument::new(ROOT_ID);

    document.push(document_information(&date_text(creation_date(options))));
    document.push(project(header));
    document.push(sampling_feature(header, rows, &ids, &mut diagnostics));
    document.push(measurement(
        header,
        schema,
        rows,
        &ids,
        options,
        &mut diagnostics,
    ));

    debug!(sections = ?document.section_names(), "document sections");
    info!(
        borehole = %ids.borehole,
        measurement = %ids.measurement,
        defaults = diagnostics.len(),
        "assembled DIGGS document"
    );
    Assembly {
        document,
        diagnostics,
    }
}

/// Assemble from a [`ParsedLog`].
pub fn assemble_log(log: &ParsedLog, options: &ConversionOptions) -> Assembly {
    assemble(&log.header, &log.schema, &log.rows, options)
}

fn document_information(date: &str) -> XmlElement {
    let info = XmlElement::new("DocumentInformation")
        .with_id(DOCUMENT_NAME)
        .with_child(XmlElement::text_element("creationDate", date));
    XmlElement::new("documentInformation").with_child(info)
}

fn project(header: &HeaderData) -> XmlElement {
    let role = XmlElement::new("Role").with_child(
        XmlElement::text_element("rolePerformed", CONTRACTOR_ROLE)
            .with_attr("codeSpace", ROLES_CODE_SPACE),
    );
    let associate = XmlElement::new("BusinessAssociate")
        .with_id("businessAssociate_0")
        .with_child(XmlElement::text_element(
            "gml:name",
            header.get_or_empty(keys::CONTRACTOR),
        ));
    let role = role.with_child(XmlElement::new("businessAssociate").with_child(associate));
    let project = XmlElement::new("Project")
        .with_id(PROJECT_ID)
        .with_child(XmlElement::text_element("gml:name", DOCUMENT_NAME))
        .with_child(XmlElement::new("role").with_child(role));
    XmlElement::new("project").with_child(project)
}
