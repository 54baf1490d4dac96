//! Load CSDL documents from disk into element forests

use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1252;
use walkdir::WalkDir;

use crate::error::CompareError;
use crate::xml::node::XmlElement;
use crate::xml::parser::parse_document;

/// Read a file as a string: BOM sniffing first (UTF-16 CSDL output is common
/// on Windows toolchains), then UTF-8, then Windows-1252 as a last resort.
fn read_file_with_encoding_fallback(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;

    if let Some((encoding, bom_len)) = encoding_rs::Encoding::for_bom(&bytes) {
        let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        if !had_errors {
            return Ok(decoded.into_owned());
        }
    }

    match String::from_utf8(bytes.clone()) {
        Ok(s) => Ok(s),
        Err(_) => {
            let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "File contains invalid characters",
                ))
            } else {
                Ok(decoded.into_owned())
            }
        }
    }
}

/// Collect the schema document paths under `path`: the path itself when it is
/// a file, otherwise every `.csdl`/`.xml` file below it, sorted for
/// deterministic forest order.
pub fn collect_document_paths(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .map_or(false, |ext| ext == "csdl" || ext == "xml")
        })
        .collect();
    paths.sort();
    paths
}

/// Unwrap an EDMX envelope into its schema documents; a bare schema root is
/// a forest of one.
pub fn unwrap_envelope(root: XmlElement) -> Vec<XmlElement> {
    if root.name.local != "Edmx" {
        return vec![root];
    }
    root.children
        .into_iter()
        .filter(|c| c.name.local == "DataServices")
        .flat_map(|ds| ds.children)
        .filter(|c| c.name.local == "Schema")
        .collect()
}

/// Load a forest of schema documents from a file or directory.
pub fn load_forest(path: &Path) -> Result<Vec<XmlElement>, CompareError> {
    if !path.exists() {
        return Err(CompareError::DocumentReadError {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
        });
    }

    let mut forest = Vec::new();
    for doc_path in collect_document_paths(path) {
        let content = read_file_with_encoding_fallback(&doc_path).map_err(|e| {
            CompareError::DocumentReadError {
                path: doc_path.clone(),
                source: e,
            }
        })?;
        let root = parse_document(&content, &doc_path.display().to_string())?;
        forest.extend(unwrap_envelope(root));
    }
    Ok(forest)
}
