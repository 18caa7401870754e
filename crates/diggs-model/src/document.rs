//! In-memory DIGGS element tree.

use serde::{Deserialize, Serialize};

/// Root element name of every DIGGS document.
pub const DIGGS_ROOT: &str = "Diggs";

/// An XML element with ordered attributes, optional text and children.
///
/// Names are written verbatim, including namespace prefixes (`gml:name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Element holding only text.
    pub fn text_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("gml:id", id)
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = XmlElement>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Follow a chain of child names, taking the first match at each step.
    pub fn find_path(&self, path: &[&str]) -> Option<&XmlElement> {
        path.iter()
            .try_fold(self, |element, name| element.child(name))
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A complete DIGGS document body.
///
/// The root carries only its `gml:id`; namespace declarations are added by
/// the serializer from its namespace configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiggsDocument {
    pub root: XmlElement,
}

impl DiggsDocument {
    pub fn new(root_id: impl Into<String>) -> Self {
        Self {
            root: XmlElement::new(DIGGS_ROOT).with_id(root_id),
        }
    }

    pub fn push(&mut self, section: XmlElement) {
        self.root.push(section);
    }

    pub fn find_path(&self, path: &[&str]) -> Option<&XmlElement> {
        self.root.find_path(path)
    }

    /// Names of the top-level sections, in document order.
    pub fn section_names(&self) -> Vec<&str> {
        self.root
            .children
            .iter()
            .map(|child| child.name.as_str())
            .collect()
    }
}
