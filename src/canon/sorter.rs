//! Deterministic child and attribute ordering for schema trees

use crate::canon::policy;
use crate::error::CompareError;
use crate::xml::node::XmlElement;

/// Produce the canonically ordered form of a schema tree.
///
/// Pure and idempotent. The root's namespace governs the whole call: any
/// subtree in a different namespace passes through byte-for-byte, without
/// recursion. Attributes sort by (namespace, local name); children are
/// re-inserted one at a time, each walking backward past siblings it is
/// allowed to precede, so order that the policy cannot adjudicate (unknown
/// kinds, cross-group anomalies) is left exactly where the document put it.
pub fn sort(root: &XmlElement) -> Result<XmlElement, CompareError> {
    let governed = root.name.namespace.clone();
    sort_within(root, governed.as_deref())
}

fn sort_within(node: &XmlElement, governed: Option<&str>) -> Result<XmlElement, CompareError> {
    if node.name.namespace.as_deref() != governed {
        return Ok(node.clone());
    }

    let mut attributes = node.attributes.clone();
    attributes.sort_by(|a, b| {
        (a.name.namespace_str(), a.name.local.as_str())
            .cmp(&(b.name.namespace_str(), b.name.local.as_str()))
    });

    let mut children: Vec<XmlElement> = Vec::with_capacity(node.children.len());
    for child in &node.children {
        let sorted = sort_within(child, governed)?;
        let mut index = children.len();
        while index > 0
            && should_insert_before(&sorted, &children[index - 1], &node.name.local, governed)?
        {
            index -= 1;
        }
        children.insert(index, sorted);
    }

    Ok(XmlElement {
        name: node.name.clone(),
        attributes,
        children,
        text: node.text.clone(),
    })
}

/// Whether `candidate` may move in front of `existing` under `parent`.
///
/// Returns false whenever reordering would hide something: foreign-namespace
/// neighbors, unknown element kinds, and neighbors in different groups all
/// pin the candidate where the scan stands, even if the resulting order
/// violates the group sequence.
fn should_insert_before(
    candidate: &XmlElement,
    existing: &XmlElement,
    parent: &str,
    governed: Option<&str>,
) -> Result<bool, CompareError> {
    if candidate.name.namespace.as_deref() != governed
        || existing.name.namespace.as_deref() != governed
    {
        return Ok(false);
    }

    let candidate_group = policy::child_group(parent, &candidate.name.local);
    let existing_group = policy::child_group(parent, &existing.name.local);
    let (Some(candidate_group), Some(existing_group)) = (candidate_group, existing_group) else {
        return Ok(false);
    };
    if candidate_group != existing_group {
        return Ok(false);
    }

    if candidate.name.local != existing.name.local {
        return Ok(candidate.name.local < existing.name.local);
    }

    // Same kind, same group: tie-break on the element's designated key
    // attribute. A participant without it is malformed input.
    let key_attribute = policy::sort_key_attribute(&candidate.name.local);
    let candidate_key = sort_key_value(candidate, key_attribute)?;
    let existing_key = sort_key_value(existing, key_attribute)?;
    Ok(candidate_key <= existing_key)
}

fn sort_key_value<'a>(
    element: &'a XmlElement,
    attribute: &str,
) -> Result<&'a str, CompareError> {
    element
        .attribute(attribute)
        .ok_or_else(|| CompareError::MissingSortKey {
            element: element.name.local.clone(),
            attribute: attribute.to_string(),
        })
}
