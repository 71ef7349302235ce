use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for wiresetgen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Bundles a file's content with its display name so that errors pointing
/// into the file can render a code frame.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "internal/wire/wire.go");
/// return Err(ctx.malformed_target("no package", Some(span)));
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create an invalid manifest error.
    pub fn invalid_manifest(&self) -> Box<Error> {
        Box::new(Error::InvalidManifest {
            src: self.named_source(),
        })
    }

    /// Create a malformed target error for this file.
    pub fn malformed_target(
        &self,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MalformedTarget {
            path: self.filename.clone(),
            reason: reason.into(),
            src: self.named_source(),
            span,
        })
    }

    /// Create an invalid annotation error for this file.
    pub fn invalid_annotation(
        &self,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidAnnotation {
            path: self.filename.clone(),
            reason: reason.into(),
            src: self.named_source(),
            span,
        })
    }

    /// Create a configuration error.
    pub fn config_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("is not in project root directory")]
    #[diagnostic(
        code(wiresetgen::not_project_root),
        help("no go.mod found, run wiresetgen from the Go module root")
    )]
    NotProjectRoot,

    #[error("invalid go.mod file")]
    #[diagnostic(
        code(wiresetgen::invalid_manifest),
        help("go.mod must declare the module path, e.g. 'module github.com/acme/app'")
    )]
    InvalidManifest {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("{reason} in wiregen file: {path}")]
    #[diagnostic(
        code(wiresetgen::malformed_target),
        help("a '//go:build wireinject' file must be followed by a single 'package <name>' clause")
    )]
    MalformedTarget {
        path: String,
        reason: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
    },

    #[error("{reason} in annotated file: {path}")]
    #[diagnostic(
        code(wiresetgen::invalid_annotation),
        help("annotate a top-level function: '// @WireSet(\"Name\")' directly above 'func NewX(...)'")
    )]
    InvalidAnnotation {
        path: String,
        reason: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
    },

    #[error("failed to access '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(wiresetgen::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("no import alias allocated for '{source_path}'")]
    #[diagnostic(code(wiresetgen::missing_alias))]
    MissingAlias { source_path: String },

    #[error("failed to render wire set file for '{}'", directory.display())]
    #[diagnostic(code(wiresetgen::template_error))]
    Template {
        directory: PathBuf,
        #[source]
        source: TemplateError,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

/// Failure while executing a template against a generation model.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("set name '{name}' is not a valid Go identifier")]
    InvalidSetName { name: String },

    #[error("reference '{reference}' in set '{set}' is missing a qualifier or function name")]
    IncompleteReference { set: String, reference: String },
}
