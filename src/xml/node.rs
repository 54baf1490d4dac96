//! In-memory schema element tree

use std::fmt;

/// Qualified XML name: optional namespace URI plus local name.
///
/// The absent namespace is significant: CSDL attributes are unprefixed, and
/// an element without a namespace is foreign to any governed schema document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QName {
    pub namespace: Option<String>,
    pub local: String,
}

impl QName {
    pub fn new(namespace: &str, local: &str) -> Self {
        QName {
            namespace: Some(namespace.to_string()),
            local: local.to_string(),
        }
    }

    /// A name in the null namespace (unprefixed attributes, foreign content).
    pub fn unqualified(local: &str) -> Self {
        QName {
            namespace: None,
            local: local.to_string(),
        }
    }

    pub fn namespace_str(&self) -> &str {
        self.namespace.as_deref().unwrap_or("")
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local),
            None => write!(f, "{}", self.local),
        }
    }
}

/// A single name/value attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    pub name: QName,
    pub value: String,
}

/// One schema-document element: qualified name, attributes, child elements,
/// and optional mixed text content.
///
/// Transforms over this tree (sorting, normalization) always return a fresh
/// tree; the input is kept intact for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: QName,
    pub attributes: Vec<XmlAttribute>,
    pub children: Vec<XmlElement>,
    /// Mixed content carried verbatim; never reordered or normalized.
    pub text: Option<String>,
}

impl XmlElement {
    pub fn new(namespace: &str, local: &str) -> Self {
        XmlElement {
            name: QName::new(namespace, local),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Value of the first unprefixed attribute with the given local name.
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.namespace.is_none() && a.name.local == local)
            .map(|a| a.value.as_str())
    }

    pub fn has_attribute(&self, local: &str) -> bool {
        self.attribute(local).is_some()
    }

    /// Set or replace an unprefixed attribute.
    pub fn set_attribute(&mut self, local: &str, value: &str) {
        if let Some(attr) = self
            .attributes
            .iter_mut()
            .find(|a| a.name.namespace.is_none() && a.name.local == local)
        {
            attr.value = value.to_string();
        } else {
            self.attributes.push(XmlAttribute {
                name: QName::unqualified(local),
                value: value.to_string(),
            });
        }
    }

    /// Remove every attribute with the given local name, any namespace.
    pub fn remove_attribute(&mut self, local: &str) {
        self.attributes.retain(|a| a.name.local != local);
    }

    pub fn is_in_namespace(&self, namespace: &str) -> bool {
        self.name.namespace.as_deref() == Some(namespace)
    }

    /// Builder-style attribute helper, used heavily by tests.
    pub fn with_attribute(mut self, local: &str, value: &str) -> Self {
        self.set_attribute(local, value);
        self
    }

    /// Builder-style child helper, used heavily by tests.
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }
}
