//! Render schema element trees as canonical CSDL text

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

use crate::error::CompareError;
use crate::xml::node::XmlElement;

/// Render a tree to its canonical textual form: XML declaration, 2-space
/// indentation, self-closing empty elements, `xmlns` re-declared wherever an
/// element's namespace differs from its parent's.
///
/// The output is the unit of equality for canonicalized trees and is what
/// mismatch reports diff.
pub fn to_canonical_string(root: &XmlElement) -> Result<String, CompareError> {
    let mut buf = Vec::new();
    let mut writer = Writer::new_with_indent(&mut buf, b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(|e| generation_error(&e))?;
    write_element(&mut writer, root, None)?;

    String::from_utf8(buf).map_err(|e| CompareError::XmlGenerationError {
        message: e.to_string(),
    })
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    elem: &XmlElement,
    parent_namespace: Option<&str>,
) -> Result<(), CompareError> {
    let mut start = BytesStart::new(elem.name.local.as_str());
    if elem.name.namespace.as_deref() != parent_namespace {
        start.push_attribute(("xmlns", elem.name.namespace_str()));
    }
    for attr in &elem.attributes {
        match &attr.name.namespace {
            // Clark notation keeps namespaced attributes unambiguous without
            // tracking prefix declarations.
            Some(ns) => {
                let key = format!("{{{}}}{}", ns, attr.name.local);
                start.push_attribute((key.as_str(), attr.value.as_str()));
            }
            None => start.push_attribute((attr.name.local.as_str(), attr.value.as_str())),
        }
    }

    if elem.children.is_empty() && elem.text.is_none() {
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| generation_error(&e))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| generation_error(&e))?;
    if let Some(text) = &elem.text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| generation_error(&e))?;
    }
    for child in &elem.children {
        write_element(writer, child, elem.name.namespace.as_deref())?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(elem.name.local.as_str())))
        .map_err(|e| generation_error(&e))?;
    Ok(())
}

fn generation_error(err: &dyn std::fmt::Display) -> CompareError {
    CompareError::XmlGenerationError {
        message: err.to_string(),
    }
}
