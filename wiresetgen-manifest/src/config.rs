//! Optional `wiresetgen.toml` settings.

use std::str::FromStr;

use miette::SourceSpan;
use serde::Deserialize;
use wiresetgen_core::{Error, FileStore, Result, SourceContext, paths};

/// How a set member is referenced in the generated file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRefs {
    /// `alias.Function`, using the allocated import alias.
    #[default]
    Alias,
    /// `package.Function`, using the package clause of the member's file.
    Package,
}

/// Generator settings.
///
/// Every field is optional in the file; a missing `wiresetgen.toml` is the
/// same as an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Name of the file written into each target directory.
    pub file_name: String,
    /// How member references are qualified.
    pub member_refs: MemberRefs,
    /// Sort member references within each set.
    pub sort_members: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_name: paths::GENERATED_FILE.to_string(),
            member_refs: MemberRefs::Alias,
            sort_members: true,
        }
    }
}

impl Config {
    /// Load `wiresetgen.toml` from the project root, falling back to defaults
    /// when the file does not exist.
    pub fn load(store: &dyn FileStore) -> Result<Self> {
        match store.read_root_file(paths::CONFIG_FILE)? {
            Some(content) => Self::parse(&content, paths::CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Parse config content, using `filename` for error reporting.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| {
            let span = e.span().map(SourceSpan::from);
            ctx.config_error(format!("failed to parse {}: {}", filename, e.message()), span)
        })?;

        if config.file_name.trim().is_empty() || config.file_name.contains(['/', '\\']) {
            return Err(ctx.config_error(
                "file_name must be a plain file name",
                find_key_span(content, "file_name"),
            ));
        }

        Ok(config)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, paths::CONFIG_FILE)
    }
}

fn find_key_span(content: &str, key: &str) -> Option<SourceSpan> {
    content
        .find(key)
        .map(|offset| SourceSpan::from((offset, key.len())))
}
