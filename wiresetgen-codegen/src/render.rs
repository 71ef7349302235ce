//! Rendering of generation models into Go source.

use std::path::Path;

use wiresetgen_core::{Error, GenerationModel, Result, TemplateError, paths};

use crate::builder::CodeBuilder;

/// Header marking the output as generated, recognised by Go tooling.
pub const GENERATED_HEADER: &str = "Code generated by wiresetgen. DO NOT EDIT.";

/// Turns a [`GenerationModel`] into file content.
pub trait Template {
    /// Render the model.
    fn render(&self, model: &GenerationModel) -> std::result::Result<String, TemplateError>;
}

/// The default template: one `wire.NewSet` variable per set.
///
/// ```text
/// // Code generated by wiresetgen. DO NOT EDIT.
///
/// package wire
///
/// import (
///     "github.com/google/wire"
///
///     repo "github.com/acme/app/internal/repo"
/// )
///
/// var Repositories = wire.NewSet(
///     repo.NewUserRepo,
/// )
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WireSetTemplate;

impl Template for WireSetTemplate {
    fn render(&self, model: &GenerationModel) -> std::result::Result<String, TemplateError> {
        for set in &model.sets {
            if !is_identifier(&set.set_name) {
                return Err(TemplateError::InvalidSetName {
                    name: set.set_name.clone(),
                });
            }
            if let Some(reference) = set.member_refs.iter().find(|r| !is_qualified(r)) {
                return Err(TemplateError::IncompleteReference {
                    set: set.set_name.clone(),
                    reference: reference.clone(),
                });
            }
        }

        let has_sets = !model.sets.is_empty();

        let code = CodeBuilder::new()
            .comment(GENERATED_HEADER)
            .blank()
            .line(&format!("package {}", model.package_name))
            .when(has_sets, |b| {
                b.blank().block_with_close("import (", ")", |b| {
                    b.line(&format!("\"{}\"", paths::WIRE_IMPORT))
                        .when(!model.imports.is_empty(), |b| b.blank())
                        .each(&model.imports, |b, import| {
                            b.line(&format!("{} \"{}\"", import.alias, import.source_path))
                        })
                })
            })
            .each(&model.sets, |b, set| {
                b.blank().block_with_close(
                    &format!("var {} = wire.NewSet(", set.set_name),
                    ")",
                    |b| b.each(&set.member_refs, |b, reference| b.line(&format!("{},", reference))),
                )
            })
            .build();

        Ok(code)
    }
}

/// Renders generation models with a [`Template`].
pub struct Renderer {
    template: Box<dyn Template>,
}

impl Renderer {
    /// Create a renderer using the given template.
    pub fn new(template: impl Template + 'static) -> Self {
        Self {
            template: Box::new(template),
        }
    }

    /// Render the model for the target in `directory`.
    ///
    /// # Errors
    ///
    /// Template failures are returned as [`Error::Template`].
    pub fn render(&self, model: &GenerationModel, directory: &Path) -> Result<String> {
        self.template.render(model).map_err(|source| {
            Box::new(Error::Template {
                directory: directory.to_path_buf(),
                source,
            })
        })
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(WireSetTemplate)
    }
}

/// Whether `name` is a valid Go identifier.
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn is_qualified(reference: &str) -> bool {
    reference
        .split_once('.')
        .is_some_and(|(qualifier, function)| !qualifier.is_empty() && !function.is_empty())
}
