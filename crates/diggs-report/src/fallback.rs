//! Minimal document written when a conversion fails.

use chrono::NaiveDate;
use quick_xml::escape::escape;
use tracing::error;

use diggs_model::{DiggsDocument, XmlElement};

use crate::assembler::date_text;
use crate::namespaces::Namespaces;
use crate::writer::write_document;

/// `gml:id` of the fallback document root.
pub const FALLBACK_ROOT_ID: &str = "Fallback_DIGGS";

/// `gml:id` of the fallback document information.
pub const FALLBACK_DOCUMENT_ID: &str = "fallback_doc";

/// Prefix of the comment carrying the failure message.
pub const FALLBACK_COMMENT_PREFIX: &str = "Error during conversion: ";

/// Document holding only the creation date and the error message.
pub fn fallback_document(message: &str, date: NaiveDate) -> DiggsDocument {
    let info = XmlElement::new("DocumentInformation")
        .with_id(FALLBACK_DOCUMENT_ID)
        .with_child(XmlElement::text_element("creationDate", date_text(date)))
        .with_child(XmlElement::text_element(
            "comment",
            format!("{FALLBACK_COMMENT_PREFIX}{message}"),
        ));
    let mut document = DiggsDocument::new(FALLBACK_ROOT_ID);
    document.push(XmlElement::new("documentInformation").with_child(info));
    document
}

/// Render the fallback document.
///
/// If even that cannot be serialized, returns a bare
/// `<DiggsFallback><error>..</error></DiggsFallback>` string.
pub fn render_fallback(message: &str, date: NaiveDate) -> String {
    match write_document(&fallback_document(message, date), &Namespaces::minimal()) {
        Ok(text) => text,
        Err(err) => {
            error!(error = %err, "fallback document could not be serialized");
            last_resort(message)
        }
    }
}

/// Hand-built fallback text that needs no serializer.
pub fn last_resort(message: &str) -> String {
    format!(
        "<DiggsFallback><error>{}</error></DiggsFallback>",
        escape(message)
    )
}
