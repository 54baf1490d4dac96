//! Error types for csdl-compare

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while canonicalizing or comparing CSDL documents
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Failed to read schema document: {path}")]
    DocumentReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse schema document: {label}")]
    DocumentParseError {
        label: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("XML generation error: {message}")]
    XmlGenerationError { message: String },

    #[error("Schema count mismatch: expected {expected} documents, actual has {actual}")]
    SchemaCountMismatch { expected: usize, actual: usize },

    #[error("No corresponding schema for namespace \"{namespace}\"")]
    NoSchemaForNamespace { namespace: String },

    #[error("Entity containers differ")]
    ContainersDiffer {
        expected_csdl: String,
        actual_csdl: String,
    },

    #[error("Schemas differ for namespace \"{namespace}\"")]
    SchemasDiffer {
        namespace: String,
        expected_csdl: String,
        actual_csdl: String,
    },

    #[error("Element <{element}> is missing its sort key attribute \"{attribute}\"")]
    MissingSortKey { element: String, attribute: String },

    #[error("Unsupported expression kind in equivalence check: {kind}")]
    UnsupportedExpression { kind: String },
}

impl CompareError {
    /// True for the variants that report a structural difference between the
    /// two compared representations, as opposed to malformed input or I/O.
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            CompareError::SchemaCountMismatch { .. }
                | CompareError::NoSchemaForNamespace { .. }
                | CompareError::ContainersDiffer { .. }
                | CompareError::SchemasDiffer { .. }
        )
    }
}
