//! Rewrite passes that erase harmless representational differences

use crate::edm::primitives::{primitive_full_name, spatial_default_srid, EdmVersion};
use crate::xml::node::XmlElement;

/// Attributes whose values may carry alias-qualified references.
const ALIAS_BEARING_ATTRIBUTES: &[&str] = &["Target", "Type", "Term", "BaseType"];

/// Attributes whose values name a type and get primitive full-naming.
const TYPE_BEARING_ATTRIBUTES: &[&str] = &["Type", "ReturnType", "UnderlyingType"];

/// Element kinds on which an absent `Nullable` means the `true` default.
const NULLABLE_DEFAULTED_ELEMENTS: &[&str] = &["Property", "Parameter", "ReturnType", "Term"];

/// Parent kind whose parameters default differently; left untouched.
const NULLABLE_EXEMPT_PARENT: &str = "FunctionImport";

/// Serializer implementation flags with no schema meaning.
const SERIALIZER_FLAG_ATTRIBUTES: &[&str] = &["UseStrongSpatialTypes"];

/// Which equivalence-normalization passes to run. All passes are on by
/// default; each can be disabled independently when a test wants to observe
/// one source of representational variance.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub strip_serializer_flags: bool,
    pub expand_aliases: bool,
    pub qualify_primitives: bool,
    pub fill_default_facets: bool,
    pub fill_spatial_srid: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            strip_serializer_flags: true,
            expand_aliases: true,
            qualify_primitives: true,
            fill_default_facets: true,
            fill_spatial_srid: true,
        }
    }
}

/// Apply the enabled passes to a schema tree, producing a new tree.
///
/// Pass order: strip serializer flags, expand aliases, qualify primitive
/// names, insert default facets, default spatial SRIDs. Passes add or
/// rewrite attribute values; the only deletions are the alias declaration
/// once applied and the serializer flags. The composition is idempotent.
/// Subtrees outside the root's namespace pass through unchanged.
pub fn normalize(
    root: &XmlElement,
    options: &NormalizeOptions,
    version: EdmVersion,
) -> XmlElement {
    let governed = root.name.namespace.clone();
    let governed = governed.as_deref();

    let mut tree = root.clone();
    if options.strip_serializer_flags {
        tree = strip_serializer_flags(&tree, governed);
    }
    if options.expand_aliases {
        tree = expand_aliases(&tree, None, governed);
    }
    if options.qualify_primitives {
        tree = qualify_primitives(&tree, version, governed);
    }
    if options.fill_default_facets {
        tree = fill_default_nullable(&tree, None, governed);
    }
    if options.fill_spatial_srid {
        tree = fill_spatial_srid(&tree, governed);
    }
    tree
}

fn foreign(node: &XmlElement, governed: Option<&str>) -> bool {
    node.name.namespace.as_deref() != governed
}

fn strip_serializer_flags(node: &XmlElement, governed: Option<&str>) -> XmlElement {
    if foreign(node, governed) {
        return node.clone();
    }
    let mut out = node.clone();
    out.attributes
        .retain(|a| !SERIALIZER_FLAG_ATTRIBUTES.contains(&a.name.local.as_str()));
    out.children = node
        .children
        .iter()
        .map(|c| strip_serializer_flags(c, governed))
        .collect();
    out
}

/// Rewrite `alias.`-prefixed references to their namespace form, recursing
/// through `Collection(...)` wrappers.
fn expand_alias_in_value(value: &str, alias: &str, namespace: &str) -> String {
    if let Some(inner) = value
        .strip_prefix("Collection(")
        .and_then(|v| v.strip_suffix(')'))
    {
        return format!("Collection({})", expand_alias_in_value(inner, alias, namespace));
    }
    let prefix = format!("{alias}.");
    match value.strip_prefix(&prefix) {
        Some(rest) => format!("{namespace}.{rest}"),
        None => value.to_string(),
    }
}

/// A `Schema` element declaring an `Alias` establishes a mapping for its
/// whole subtree; the declaration itself is stripped once applied.
fn expand_aliases(
    node: &XmlElement,
    mapping: Option<(&str, &str)>,
    governed: Option<&str>,
) -> XmlElement {
    if foreign(node, governed) {
        return node.clone();
    }

    let declared = if node.name.local == "Schema" {
        node.attribute("Alias").zip(node.attribute("Namespace"))
    } else {
        None
    };
    let declared = declared.map(|(a, n)| (a.to_string(), n.to_string()));
    let mapping = declared
        .as_ref()
        .map(|(a, n)| (a.as_str(), n.as_str()))
        .or(mapping);

    let mut out = node.clone();
    if let Some((alias, namespace)) = mapping {
        for attr in &mut out.attributes {
            if attr.name.namespace.is_none()
                && ALIAS_BEARING_ATTRIBUTES.contains(&attr.name.local.as_str())
            {
                attr.value = expand_alias_in_value(&attr.value, alias, namespace);
            }
        }
    }
    if declared.is_some() {
        out.remove_attribute("Alias");
    }
    out.children = node
        .children
        .iter()
        .map(|c| expand_aliases(c, mapping, governed))
        .collect();
    out
}

fn qualify_primitive_in_value(value: &str, version: EdmVersion) -> String {
    if let Some(inner) = value
        .strip_prefix("Collection(")
        .and_then(|v| v.strip_suffix(')'))
    {
        return format!("Collection({})", qualify_primitive_in_value(inner, version));
    }
    match primitive_full_name(version, value) {
        Some(full) => full.to_string(),
        None => value.to_string(),
    }
}

fn qualify_primitives(
    node: &XmlElement,
    version: EdmVersion,
    governed: Option<&str>,
) -> XmlElement {
    if foreign(node, governed) {
        return node.clone();
    }
    let mut out = node.clone();
    for attr in &mut out.attributes {
        if attr.name.namespace.is_none()
            && TYPE_BEARING_ATTRIBUTES.contains(&attr.name.local.as_str())
        {
            attr.value = qualify_primitive_in_value(&attr.value, version);
        }
    }
    out.children = node
        .children
        .iter()
        .map(|c| qualify_primitives(c, version, governed))
        .collect();
    out
}

fn fill_default_nullable(
    node: &XmlElement,
    parent: Option<&str>,
    governed: Option<&str>,
) -> XmlElement {
    if foreign(node, governed) {
        return node.clone();
    }
    let mut out = node.clone();
    if NULLABLE_DEFAULTED_ELEMENTS.contains(&node.name.local.as_str())
        && parent != Some(NULLABLE_EXEMPT_PARENT)
        && !node.has_attribute("Nullable")
    {
        out.set_attribute("Nullable", "true");
    }
    out.children = node
        .children
        .iter()
        .map(|c| fill_default_nullable(c, Some(node.name.local.as_str()), governed))
        .collect();
    out
}

fn fill_spatial_srid(node: &XmlElement, governed: Option<&str>) -> XmlElement {
    if foreign(node, governed) {
        return node.clone();
    }
    let mut out = node.clone();
    if !node.has_attribute("SRID") {
        let spatial = ["Type", "ReturnType"]
            .iter()
            .find_map(|attr| node.attribute(attr).and_then(spatial_default_srid));
        if let Some(srid) = spatial {
            out.set_attribute("SRID", srid);
        }
    }
    out.children = node
        .children
        .iter()
        .map(|c| fill_spatial_srid(c, governed))
        .collect();
    out
}
