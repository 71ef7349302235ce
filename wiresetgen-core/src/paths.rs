//! Path constants and import path helpers.
//!
//! Centralizes the file names and markers the generator looks for, and the
//! conversion from host paths to Go import paths.

use std::path::{Component, Path, PathBuf};

/// Go module manifest file name.
pub const MANIFEST_FILE: &str = "go.mod";

/// Optional generator configuration file name.
pub const CONFIG_FILE: &str = "wiresetgen.toml";

/// File extension of scanned source files.
pub const SOURCE_EXTENSION: &str = "go";

/// Name of the generated file written into each target directory.
pub const GENERATED_FILE: &str = "wire_set_gen.go";

/// Import path of the wire package referenced by generated files.
pub const WIRE_IMPORT: &str = "github.com/google/wire";

/// Convert a relative host path into forward-slash segments.
///
/// `.` components are dropped; both `/` and `\` are treated as separators so
/// that paths produced on Windows map to the same import path.
pub fn slash_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .flat_map(|part| {
            part.split('\\')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Join a module path and a relative directory into a clean import path.
///
/// Redundant slashes and `.` segments are collapsed and surrounding
/// whitespace is trimmed.
///
/// # Example
///
/// ```
/// use wiresetgen_core::paths::join_import_path;
///
/// assert_eq!(
///     join_import_path("example.com/app/", &["internal", "repo"]),
///     "example.com/app/internal/repo"
/// );
/// ```
pub fn join_import_path<S: AsRef<str>>(module: &str, segments: &[S]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let all = module
        .split('/')
        .chain(segments.iter().flat_map(|s| s.as_ref().split('/')));

    for part in all {
        match part.trim() {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            part => parts.push(part),
        }
    }

    parts.join("/")
}

/// Get the last `/` separated segment of an import path.
pub fn last_segment(import_path: &str) -> &str {
    import_path.rsplit('/').next().unwrap_or(import_path)
}

/// Get the directory containing a file, `.` for files at the root.
pub fn parent_dir(file_path: &Path) -> PathBuf {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Render a relative path with forward slashes for display and diagnostics.
pub fn display_path(path: &Path) -> String {
    slash_segments(path).join("/")
}
