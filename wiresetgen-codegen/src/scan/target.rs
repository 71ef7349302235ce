//! Generation target detection.

use std::path::Path;

use miette::SourceSpan;
use wiresetgen_core::{GenerationTarget, Result, SourceContext, paths};

use super::{WIREINJECT_MARKER, lines_with_offsets, parse_package_line, span_of};

/// Find the generation target declared by a file, if any.
///
/// After the `wireinject` build constraint, the first package clause names
/// the target package. Blank lines, comments and repeated constraints in
/// between are skipped.
///
/// # Errors
///
/// Returns `MalformedTarget` naming the file if the package clause after the
/// constraint is malformed, or if no package clause follows it at all.
pub fn find_target(path: &Path, content: &str) -> Result<Option<GenerationTarget>> {
    let mut marker: Option<SourceSpan> = None;

    for (offset, raw) in lines_with_offsets(content) {
        let line = raw.trim();

        if line.starts_with(WIREINJECT_MARKER) {
            marker.get_or_insert_with(|| span_of(offset, raw, line));
            continue;
        }

        if marker.is_none() {
            continue;
        }

        match parse_package_line(line) {
            Ok(Some(package_name)) => {
                return Ok(Some(GenerationTarget {
                    package_name: package_name.to_string(),
                    directory_path: paths::parent_dir(path),
                }));
            }
            Ok(None) => {}
            Err(_) => {
                let ctx = SourceContext::new(content, paths::display_path(path));
                return Err(ctx.malformed_target(
                    "invalid package name",
                    Some(span_of(offset, raw, line)),
                ));
            }
        }
    }

    match marker {
        Some(span) => {
            let ctx = SourceContext::new(content, paths::display_path(path));
            Err(ctx.malformed_target("no package", Some(span)))
        }
        None => Ok(None),
    }
}

/// Span of the trimmed `line` within `raw`, which starts at `offset`.
#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use wiresetgen_core::Error;

    use super::*;

    fn wire_target(package: &str, dir: &str) -> Option<GenerationTarget> {
        Some(GenerationTarget {
            package_name: package.to_string(),
            directory_path: PathBuf::from(dir),
        })
    }

    #[test]
    fn test_valid_file_with_wireinject() {
        let content = r#"
			//go:build wireinject
			// +build wireinject

			package wire
			"#;

        let target = find_target(Path::new("internal/wire/wire.go"), content).unwrap();
        assert_eq!(target, wire_target("wire", "internal/wire"));
    }

    #[test]
    fn test_multiple_blank_lines_before_package() {
        let content = "\n//go:build wireinject\n// +build wireinject\n\n\n\n\npackage wire\n";

        let target = find_target(Path::new("internal/wire/wire.go"), content).unwrap();
        assert_eq!(target, wire_target("wire", "internal/wire"));
    }

    #[test]
    fn test_no_wireinject_in_file() {
        let target = find_target(Path::new("internal/wire/not_wire_file.go"), "package notwire");
        assert_eq!(target.unwrap(), None);
    }

    #[test]
    fn test_package_before_marker_is_ignored() {
        let content = "package early\n//go:build wireinject\n\npackage wire\n";

        let target = find_target(Path::new("wire/wire.go"), content).unwrap();
        assert_eq!(target, wire_target("wire", "wire"));
    }

    #[test]
    fn test_root_level_target() {
        let content = "//go:build wireinject\n\npackage main\n";

        let target = find_target(Path::new("wire.go"), content).unwrap();
        assert_eq!(target, wire_target("main", "."));
    }

    #[test]
    fn test_only_wireinject_fails_with_path() {
        let err = find_target(
            Path::new("internal/wire/not_wire_file.go"),
            "//go:build wireinject",
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "no package in wiregen file: internal/wire/not_wire_file.go"
        );
        match *err {
            Error::MalformedTarget { path, span, .. } => {
                assert_eq!(path, "internal/wire/not_wire_file.go");
                assert_eq!(span, Some(SourceSpan::from((0, 21))));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_package_after_marker_fails() {
        let content = "//go:build wireinject\n\npackage wire extra\n";

        let err = find_target(Path::new("internal/wire/wire.go"), content).unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid package name in wiregen file: internal/wire/wire.go"
        );
        match *err {
            Error::MalformedTarget { span, .. } => {
                assert_eq!(span, Some(SourceSpan::from((23, 18))));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_package_with_trailing_comment_after_marker() {
        let content = "//go:build wireinject\npackage wire // injectors\n";

        let target = find_target(Path::new("app/wire.go"), content).unwrap();
        assert_eq!(target, wire_target("wire", "app"));
    }
}
