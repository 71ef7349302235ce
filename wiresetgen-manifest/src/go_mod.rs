//! Module path resolution from `go.mod`.

use std::str::FromStr;

use wiresetgen_core::{Error, Result, SourceContext, paths};

const MODULE_KEYWORD: &str = "module";

/// The parts of a `go.mod` file the generator cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoMod {
    module: String,
}

impl GoMod {
    /// Parse `go.mod` content, using `filename` for error reporting.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        match find_module(content) {
            Some(module) => Ok(Self { module }),
            None => Err(SourceContext::new(content, filename).invalid_manifest()),
        }
    }

    /// Get the declared module path.
    pub fn module(&self) -> &str {
        &self.module
    }
}

impl FromStr for GoMod {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, paths::MANIFEST_FILE)
    }
}

/// Resolve the module path declared by a `go.mod` file.
///
/// # Example
///
/// ```
/// use wiresetgen_manifest::resolve_module;
///
/// assert_eq!(resolve_module("module foo.bar/baz\n").unwrap(), "foo.bar/baz");
/// assert!(resolve_module("nothing here").is_err());
/// ```
pub fn resolve_module(content: &str) -> Result<String> {
    content.parse::<GoMod>().map(|go_mod| go_mod.module)
}

fn find_module(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some(MODULE_KEYWORD) {
            return None;
        }
        tokens
            .next()
            .map(|module| module.trim_matches('"').to_string())
            .filter(|module| !module.is_empty())
    })
}
