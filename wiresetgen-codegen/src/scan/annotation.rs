//! `@WireSet` annotation extraction.

use std::path::Path;

use wiresetgen_core::{Result, SetMember, SourceContext, paths};

use super::{ANNOTATION_MARKER, lines_with_offsets, parse_package_line, span_of};
use crate::render::is_identifier;

/// Extract every annotated constructor from a file.
///
/// Extraction is best-effort: a missing set name or an unreadable function
/// line yields empty strings rather than an error.
pub fn extract_members(path: &Path, content: &str, module: &str) -> Vec<SetMember> {
    let source_path = source_path(path, module);
    let lines: Vec<&str> = content.split('\n').collect();
    let mut package_name = "";
    let mut members = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        // Malformed clauses are ignored here; only targets treat them as fatal.
        if let Ok(Some(name)) = parse_package_line(line) {
            package_name = name;
        }

        let Some(set_name) = set_name(line) else {
            continue;
        };

        members.push(SetMember {
            set_name: set_name.to_string(),
            function_name: lines
                .get(i + 1)
                .map(|next| function_name(next))
                .unwrap_or_default()
                .to_string(),
            package_name: package_name.to_string(),
            source_path: source_path.clone(),
        });
    }

    members
}

/// Check that every annotation in a file can be rendered.
///
/// Fails on the first annotation whose set name is not a Go identifier or
/// whose next line declares no function name, pointing at the annotation line.
pub fn check_annotations(path: &Path, content: &str) -> Result<()> {
    let lines: Vec<(usize, &str)> = lines_with_offsets(content).collect();

    for (i, (offset, raw)) in lines.iter().enumerate() {
        let line = raw.trim();
        let Some(set_name) = set_name(line) else {
            continue;
        };

        let reason = if !is_identifier(set_name) {
            format!("invalid set name '{}'", set_name)
        } else if lines
            .get(i + 1)
            .is_none_or(|(_, next)| function_name(next).is_empty())
        {
            format!("no function name for set '{}'", set_name)
        } else {
            continue;
        };

        let ctx = SourceContext::new(content, paths::display_path(path));
        return Err(ctx.invalid_annotation(reason, Some(span_of(*offset, raw, line))));
    }

    Ok(())
}

/// Set name of an annotation line, `None` if the line has no annotation.
fn set_name(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once(ANNOTATION_MARKER)?;
    let name = rest.split_once('"').map(|(name, _)| name).unwrap_or("");
    Some(name.trim())
}

/// Function name declared on a `func` line.
fn function_name(line: &str) -> &str {
    line.split_whitespace()
        .nth(1)
        .and_then(|token| token.split('(').next())
        .unwrap_or("")
        .trim()
}

/// Import path of the directory containing `path`.
fn source_path(path: &Path, module: &str) -> String {
    let mut segments = paths::slash_segments(path);
    segments.pop();
    paths::join_import_path(module, &segments)
}
