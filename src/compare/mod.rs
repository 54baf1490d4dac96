//! Structural comparison of schema document forests

pub mod report;

use rayon::prelude::*;

use crate::canon::{canonicalize, NormalizeOptions};
use crate::edm::primitives::{EdmVersion, EDM_NAMESPACE};
use crate::error::CompareError;
use crate::xml::node::XmlElement;

/// Minimum number of schema pairs to benefit from parallel canonicalization.
const PARALLEL_THRESHOLD: usize = 4;

/// Split one schema tree into its entity containers and the remainder.
///
/// Both returned trees are fresh; the input is not consumed, so a forest can
/// be compared repeatedly.
pub fn partition_containers(root: &XmlElement) -> (Vec<XmlElement>, XmlElement) {
    let governed = root.name.namespace.as_deref();
    let (containers, rest): (Vec<XmlElement>, Vec<XmlElement>) = root
        .children
        .iter()
        .cloned()
        .partition(|c| c.name.local == "EntityContainer" && c.name.namespace.as_deref() == governed);

    let mut remainder = root.clone();
    remainder.children = rest;
    (containers, remainder)
}

/// Gather every entity container in a forest into one synthetic schema node,
/// returning it alongside the container-free remainder trees.
fn extract_containers(forest: &[XmlElement]) -> (XmlElement, Vec<XmlElement>) {
    let namespace = forest
        .first()
        .and_then(|t| t.name.namespace.as_deref())
        .unwrap_or(EDM_NAMESPACE);

    let mut aggregate = XmlElement::new(namespace, "Schema");
    let mut remainders = Vec::with_capacity(forest.len());
    for tree in forest {
        let (containers, remainder) = partition_containers(tree);
        aggregate.children.extend(containers);
        remainders.push(remainder);
    }
    (aggregate, remainders)
}

/// Declared namespace identifier of a schema document; empty when absent.
fn schema_namespace(tree: &XmlElement) -> &str {
    tree.attribute("Namespace").unwrap_or("")
}

/// Compare two forests of schema documents for structural equivalence.
///
/// Hard stops, in order: document count, the aggregated entity containers,
/// a per-namespace lookup of each expected document on the actual side.
/// Matched pairs are then canonicalized (normalization passes plus sorting,
/// in parallel for larger forests) and their canonical texts compared; the
/// first differing pair aborts the run with both renderings attached.
pub fn compare_forests(
    expected: &[XmlElement],
    actual: &[XmlElement],
    options: &NormalizeOptions,
    version: EdmVersion,
) -> Result<(), CompareError> {
    if expected.len() != actual.len() {
        return Err(CompareError::SchemaCountMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    let (expected_containers, expected_rest) = extract_containers(expected);
    let (actual_containers, actual_rest) = extract_containers(actual);

    let expected_csdl = canonicalize(&expected_containers, options, version)?;
    let actual_csdl = canonicalize(&actual_containers, options, version)?;
    if expected_csdl != actual_csdl {
        return Err(CompareError::ContainersDiffer {
            expected_csdl,
            actual_csdl,
        });
    }

    let mut pairs = Vec::with_capacity(expected_rest.len());
    for expected_tree in &expected_rest {
        let namespace = schema_namespace(expected_tree);
        let actual_tree = actual_rest
            .iter()
            .find(|t| schema_namespace(t) == namespace)
            .ok_or_else(|| CompareError::NoSchemaForNamespace {
                namespace: namespace.to_string(),
            })?;
        pairs.push((namespace, expected_tree, actual_tree));
    }

    let canonicalize_pair = |namespace: &str, expected_tree: &XmlElement, actual_tree: &XmlElement| {
        Ok::<_, CompareError>((
            namespace.to_string(),
            canonicalize(expected_tree, options, version)?,
            canonicalize(actual_tree, options, version)?,
        ))
    };

    let rendered: Vec<Result<(String, String, String), CompareError>> =
        if pairs.len() >= PARALLEL_THRESHOLD {
            pairs
                .par_iter()
                .map(|(ns, e, a)| canonicalize_pair(ns, e, a))
                .collect()
        } else {
            pairs
                .iter()
                .map(|(ns, e, a)| canonicalize_pair(ns, e, a))
                .collect()
        };

    for result in rendered {
        let (namespace, expected_csdl, actual_csdl) = result?;
        if expected_csdl != actual_csdl {
            return Err(CompareError::SchemasDiffer {
                namespace,
                expected_csdl,
                actual_csdl,
            });
        }
    }

    Ok(())
}
