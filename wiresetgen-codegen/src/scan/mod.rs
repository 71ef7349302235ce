//! Line-based extraction of set members and generation targets.
//!
//! Scanning is purely textual: no Go parser is involved. A member is an
//! `@WireSet("<name>")` annotation directly above a `func` line, and a target
//! is a `//go:build wireinject` file followed by a package clause.
//!
//! A file is either a target or a source of members, never both.

mod annotation;
mod package;
mod target;

use std::path::Path;

use miette::SourceSpan;

use wiresetgen_core::{GenerationTarget, Result, SetMember};

pub use annotation::{check_annotations, extract_members};
pub use package::{InvalidPackageName, parse_package_line};
pub use target::find_target;

/// Build constraint marking a file as a wire injector.
pub const WIREINJECT_MARKER: &str = "//go:build wireinject";

/// Opening of a set membership annotation.
pub const ANNOTATION_MARKER: &str = "@WireSet(\"";

/// What a single file contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub members: Vec<SetMember>,
    pub target: Option<GenerationTarget>,
}

/// Scans files of one Go module.
#[derive(Debug, Clone)]
pub struct Scanner {
    module: String,
}

impl Scanner {
    /// Create a scanner for the given module path.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }

    /// Get the module path.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Scan one file.
    ///
    /// # Errors
    ///
    /// Returns [`wiresetgen_core::Error::MalformedTarget`] if the file carries
    /// the `wireinject` constraint but no valid package clause follows it.
    pub fn scan(&self, path: &Path, content: &str) -> Result<ScanResult> {
        if let Some(target) = find_target(path, content)? {
            return Ok(ScanResult {
                members: Vec::new(),
                target: Some(target),
            });
        }

        Ok(ScanResult {
            members: extract_members(path, content, &self.module),
            target: None,
        })
    }
}

/// Split content into lines along with the byte offset each line starts at.
fn lines_with_offsets(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content.split('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len() + 1;
        Some((start, line))
    })
}

/// Span of the trimmed `line` within `raw`, which starts at `offset`.
fn span_of(offset: usize, raw: &str, line: &str) -> SourceSpan {
    let leading = raw.len() - raw.trim_start().len();
    SourceSpan::from((offset + leading, line.len()))
}
