//! csdl-compare: canonicalize and structurally compare CSDL schema documents
//!
//! This library turns CSDL (the XML interchange format for Entity Data
//! Model schemas) into a canonical form and compares two independently
//! produced representations of the same intended schema, tolerating legal
//! reordering and known representational variance (aliases, default facets,
//! spatial SRIDs, primitive type spellings).

pub mod canon;
pub mod compare;
pub mod edm;
pub mod error;
pub mod xml;

use std::path::PathBuf;

use anyhow::Result;

pub use canon::NormalizeOptions;
pub use edm::EdmVersion;
pub use error::CompareError;

/// Options for a file-level comparison
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Expected-side CSDL file or directory
    pub expected_path: PathBuf,
    /// Actual-side CSDL file or directory
    pub actual_path: PathBuf,
    /// Target CSDL version
    pub version: EdmVersion,
    /// Which normalization passes to run
    pub normalize: NormalizeOptions,
    /// Enable verbose output
    pub verbose: bool,
}

/// Result of a comparison: structural mismatches are ordinary outcomes, not
/// errors.
#[derive(Debug)]
pub enum CompareOutcome {
    Equivalent,
    Different(CompareError),
}

impl CompareOutcome {
    pub fn is_equivalent(&self) -> bool {
        matches!(self, CompareOutcome::Equivalent)
    }
}

/// Load both sides from disk and compare them.
pub fn compare_csdl_paths(options: CompareOptions) -> Result<CompareOutcome> {
    if options.verbose {
        println!(
            "Comparing {} against {}",
            options.expected_path.display(),
            options.actual_path.display()
        );
    }

    let expected = xml::reader::load_forest(&options.expected_path)?;
    let actual = xml::reader::load_forest(&options.actual_path)?;

    if options.verbose {
        println!(
            "Loaded {} expected and {} actual schema documents",
            expected.len(),
            actual.len()
        );
    }

    match compare::compare_forests(&expected, &actual, &options.normalize, options.version) {
        Ok(()) => Ok(CompareOutcome::Equivalent),
        Err(e) if e.is_mismatch() => Ok(CompareOutcome::Different(e)),
        Err(e) => Err(e.into()),
    }
}

/// Load a file or directory and render each schema document's canonical form.
pub fn canonicalize_csdl_path(
    path: &std::path::Path,
    options: &NormalizeOptions,
    version: EdmVersion,
) -> Result<Vec<String>> {
    let forest = xml::reader::load_forest(path)?;
    let mut rendered = Vec::with_capacity(forest.len());
    for tree in &forest {
        rendered.push(canon::canonicalize(tree, options, version)?);
    }
    Ok(rendered)
}
