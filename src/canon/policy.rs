//! Child ordering rules for CSDL elements

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A `Documentation` child sorts first under any parent.
const DOCUMENTATION_ELEMENT: &str = "Documentation";

/// Ordering groups per parent element. Within one parent, groups induce the
/// required relative order; children sharing a group are freely reorderable.
/// Child kinds deliberately absent here are order-significant and must keep
/// their document position: enum members, key property refs, operation
/// parameters, and collection expression items.
static CHILD_GROUPS: Lazy<HashMap<&'static str, HashMap<&'static str, u32>>> = Lazy::new(|| {
    let groups: &[(&str, &[(&str, u32)])] = &[
        (
            "Schema",
            &[
                ("Using", 1),
                ("ComplexType", 2),
                ("EntityType", 2),
                ("EnumType", 2),
                ("TypeDefinition", 2),
                ("Term", 2),
                ("Action", 2),
                ("Function", 2),
                ("Association", 2),
                ("EntityContainer", 3),
                ("Annotations", 4),
            ],
        ),
        (
            "EntityType",
            &[
                ("Key", 1),
                ("Property", 2),
                ("NavigationProperty", 2),
                ("Annotation", 3),
            ],
        ),
        (
            "ComplexType",
            &[
                ("Property", 1),
                ("NavigationProperty", 1),
                ("Annotation", 2),
            ],
        ),
        (
            "EntityContainer",
            &[
                ("EntitySet", 1),
                ("Singleton", 1),
                ("ActionImport", 1),
                ("FunctionImport", 1),
                ("AssociationSet", 1),
                ("Annotation", 2),
            ],
        ),
        (
            "EntitySet",
            &[("NavigationPropertyBinding", 1), ("Annotation", 2)],
        ),
        ("Singleton", &[("NavigationPropertyBinding", 1), ("Annotation", 2)]),
        ("Property", &[("Annotation", 1)]),
        ("NavigationProperty", &[("Annotation", 1)]),
        ("Term", &[("Annotation", 1)]),
        ("TypeDefinition", &[("Annotation", 1)]),
        ("EnumType", &[("Annotation", 1)]),
        ("Member", &[("Annotation", 1)]),
        ("Annotations", &[("Annotation", 1)]),
        ("Record", &[("PropertyValue", 1), ("Annotation", 2)]),
    ];

    groups
        .iter()
        .map(|(parent, children)| (*parent, children.iter().copied().collect()))
        .collect()
});

/// Tie-break attribute per element kind; anything unlisted keys on `Name`.
static SORT_KEY_ATTRIBUTES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("Schema", "Namespace"),
        ("Using", "Namespace"),
        ("Annotations", "Target"),
        ("Annotation", "Term"),
        ("PropertyValue", "Property"),
    ]
    .into_iter()
    .collect()
});

/// Ordering group of `child` under `parent`, or `None` when the pairing is
/// unknown and the child's document position must be kept.
pub fn child_group(parent: &str, child: &str) -> Option<u32> {
    if child == DOCUMENTATION_ELEMENT {
        return Some(0);
    }
    CHILD_GROUPS.get(parent)?.get(child).copied()
}

/// Attribute used to break ties between same-kind siblings in one group.
pub fn sort_key_attribute(element: &str) -> &'static str {
    SORT_KEY_ATTRIBUTES.get(element).copied().unwrap_or("Name")
}
