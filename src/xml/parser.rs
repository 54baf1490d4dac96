//! Parse CSDL documents into schema element trees

use crate::error::CompareError;
use crate::xml::node::{QName, XmlAttribute, XmlElement};

/// Parse an XML document into a tree rooted at its document element.
///
/// `label` identifies the document in parse errors (a file name or a
/// caller-chosen tag for in-memory input).
pub fn parse_document(xml: &str, label: &str) -> Result<XmlElement, CompareError> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| CompareError::DocumentParseError {
        label: label.to_string(),
        source: e,
    })?;
    Ok(convert_element(&doc.root_element()))
}

fn convert_element(node: &roxmltree::Node) -> XmlElement {
    let name = match node.tag_name().namespace() {
        Some(ns) => QName::new(ns, node.tag_name().name()),
        None => QName::unqualified(node.tag_name().name()),
    };

    let attributes = node
        .attributes()
        .map(|a| XmlAttribute {
            name: match a.namespace() {
                Some(ns) => QName::new(ns, a.name()),
                None => QName::unqualified(a.name()),
            },
            value: a.value().to_string(),
        })
        .collect();

    let children: Vec<XmlElement> = node
        .children()
        .filter(|c| c.is_element())
        .map(|c| convert_element(&c))
        .collect();

    // Mixed content is kept verbatim; whitespace-only runs are indentation,
    // not content.
    let mut text = String::new();
    for child in node.children() {
        if child.is_text() {
            if let Some(t) = child.text() {
                text.push_str(t);
            }
        }
    }
    let text = if text.trim().is_empty() {
        None
    } else {
        Some(text)
    };

    XmlElement {
        name,
        attributes,
        children,
        text,
    }
}
