//! Package clause parsing.

const PACKAGE_KEYWORD: &str = "package";
const COMMENT_MARKER: &str = "//";

/// A line starting with `package` that is not a well-formed package clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPackageName;

/// Parse a package clause.
///
/// Returns `Ok(None)` when the line is not a package clause at all, and
/// `Err(InvalidPackageName)` when it starts with `package` but has no name
/// or trailing tokens other than a comment.
///
/// # Example
///
/// ```
/// use wiresetgen_codegen::scan::parse_package_line;
///
/// assert_eq!(parse_package_line("package main // app"), Ok(Some("main")));
/// assert_eq!(parse_package_line("func main() {}"), Ok(None));
/// assert!(parse_package_line("package main extra").is_err());
/// ```
pub fn parse_package_line(line: &str) -> Result<Option<&str>, InvalidPackageName> {
    let mut tokens = line.split_whitespace();

    if tokens.next() != Some(PACKAGE_KEYWORD) {
        return Ok(None);
    }

    let name = tokens.next().ok_or(InvalidPackageName)?;

    match tokens.next() {
        Some(trailing) if !trailing.starts_with(COMMENT_MARKER) => Err(InvalidPackageName),
        _ => Ok(Some(name)),
    }
}
