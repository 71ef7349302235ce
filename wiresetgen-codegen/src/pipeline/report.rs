//! Pipeline results.

use std::path::PathBuf;

use wiresetgen_core::{GenerationTarget, SetMember};

/// A rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Target directory relative to the project root.
    pub directory: PathBuf,
    /// File name within the directory.
    pub file_name: String,
    /// Rendered content.
    pub content: String,
}

impl GeneratedFile {
    /// Path relative to the project root.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Everything a pipeline run discovered and produced.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Module path from `go.mod`.
    pub module: String,
    /// Number of source files scanned.
    pub files_scanned: usize,
    /// Members in scan order.
    pub members: Vec<SetMember>,
    /// Targets in scan order.
    pub targets: Vec<GenerationTarget>,
    /// Rendered files, one per target.
    pub files: Vec<GeneratedFile>,
    /// Whether the files were written to the store.
    pub written: bool,
}

impl GenerationReport {
    /// Number of distinct set names.
    pub fn set_count(&self) -> usize {
        let mut names: Vec<&str> = self.members.iter().map(|m| m.set_name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}
