//! DIGGS XML serialization.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::{debug, info_span};

use diggs_model::{DiggsDocument, XmlElement};

use crate::namespaces::Namespaces;

/// Render a document to a string.
pub fn write_document(document: &DiggsDocument, namespaces: &Namespaces) -> Result<String> {
    let mut buffer = Vec::new();
    write_to(&mut buffer, document, namespaces)?;
    String::from_utf8(buffer).context("serialized DIGGS document is not UTF-8")
}

/// Render a document into any writer.
pub fn write_to<W: Write>(
    writer: W,
    document: &DiggsDocument,
    namespaces: &Namespaces,
) -> Result<()> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut xml, &document.root, &namespaces.root_attributes())?;
    xml.into_inner().flush().context("flush DIGGS output")?;
    Ok(())
}

/// Render a document to `output_path`, creating parent directories.
pub fn write_diggs_xml(
    output_path: &Path,
    document: &DiggsDocument,
    namespaces: &Namespaces,
) -> Result<()> {
    let span = info_span!("write_xml", path = %output_path.display());
    let _guard = span.enter();

    let text = write_document(document, namespaces)?;
    write_text(output_path, &text)?;
    debug!(bytes = text.len(), "wrote DIGGS document");
    Ok(())
}

/// Write already-rendered XML text to `output_path`.
pub fn write_text(output_path: &Path, text: &str) -> Result<()> {
    ensure_parent_dir(output_path)?;
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .with_context(|| format!("write {}", output_path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

fn write_element<W: Write>(
    xml: &mut Writer<W>,
    element: &XmlElement,
    leading_attributes: &[(String, String)],
) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in leading_attributes.iter().chain(&element.attributes) {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.text.is_none() && element.children.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }

    xml.write_event(Event::Start(start))?;
    if let Some(text) = &element.text {
        xml.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &element.children {
        write_element(xml, child, &[])?;
    }
    xml.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
