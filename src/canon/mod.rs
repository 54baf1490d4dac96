//! Canonicalization: ordering policy, sorter, and equivalence normalizer

pub mod normalize;
pub mod policy;
pub mod sorter;

pub use normalize::{normalize, NormalizeOptions};
pub use sorter::sort;

use crate::edm::primitives::EdmVersion;
use crate::error::CompareError;
use crate::xml::node::XmlElement;
use crate::xml::writer::to_canonical_string;

/// Full canonicalization pipeline for one tree: normalize, sort, render.
pub fn canonicalize(
    root: &XmlElement,
    options: &NormalizeOptions,
    version: EdmVersion,
) -> Result<String, CompareError> {
    let normalized = normalize(root, options, version);
    let sorted = sort(&normalized)?;
    to_canonical_string(&sorted)
}
