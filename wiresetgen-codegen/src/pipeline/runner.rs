//! Pipeline orchestrator.

use wiresetgen_core::{Error, FileStore, Result, paths};
use wiresetgen_manifest::{Config, GoMod};

use super::{GeneratedFile, GenerationReport, Observer};
use crate::{
    generation::ModelBuilder,
    render::Renderer,
    scan::{Scanner, check_annotations},
};

/// The generation pipeline.
///
/// Runs are all-or-nothing: the first failure aborts the run, and nothing is
/// written unless every target rendered successfully.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .observer(VerboseObserver::new())
///     .dry_run(true);
///
/// let report = pipeline.run(&store)?;
/// ```
#[derive(Default)]
pub struct Pipeline {
    config: Option<Config>,
    renderer: Renderer,
    observers: Vec<Box<dyn Observer>>,
    dry_run: bool,
}

impl Pipeline {
    /// Create a pipeline that reads `wiresetgen.toml` from the project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given config instead of reading `wiresetgen.toml`.
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Add an observer.
    pub fn observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Render without writing to the store.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the pipeline against a project.
    ///
    /// # Errors
    ///
    /// - [`Error::NotProjectRoot`] if the store has no `go.mod`
    /// - [`Error::InvalidManifest`] if `go.mod` declares no module
    /// - [`Error::Config`] if `wiresetgen.toml` is invalid
    /// - [`Error::MalformedTarget`] if a `wireinject` file has no valid package clause
    /// - [`Error::InvalidAnnotation`] if a target exists and an annotation cannot be rendered
    /// - [`Error::Template`] if rendering fails
    /// - [`Error::Io`] for store failures
    pub fn run(&self, store: &dyn FileStore) -> Result<GenerationReport> {
        let manifest = store
            .read_manifest()?
            .ok_or_else(|| Box::new(Error::NotProjectRoot))?;
        let go_mod = GoMod::parse(&manifest, paths::MANIFEST_FILE)?;
        let config = match &self.config {
            Some(config) => config.clone(),
            None => Config::load(store)?,
        };
        let scanner = Scanner::new(go_mod.module());

        // Sorted so alias numbering does not depend on directory order
        let mut sources = store.list_source_files()?;
        sources.sort();

        let mut report = GenerationReport {
            module: go_mod.module().to_string(),
            files_scanned: sources.len(),
            ..GenerationReport::default()
        };
        let mut invalid_annotation = None;

        for source in &sources {
            let content = store.read_file(source)?;
            let result = scanner.scan(source, &content)?;

            if let Some(target) = result.target {
                self.notify(|o| o.on_target(source, &target));
                report.targets.push(target);
                continue;
            }

            if invalid_annotation.is_none() && !result.members.is_empty() {
                invalid_annotation = check_annotations(source, &content).err();
            }
            for member in &result.members {
                self.notify(|o| o.on_member(source, member));
            }
            report.members.extend(result.members);
        }

        // Annotations only matter once there is something to render
        if let Some(err) = invalid_annotation.filter(|_| !report.targets.is_empty()) {
            return Err(err);
        }

        let builder = ModelBuilder::new(&report.members, &config)?;

        for target in &report.targets {
            let model = builder.model_for(target);
            let content = self.renderer.render(&model, &target.directory_path)?;
            let file = GeneratedFile {
                directory: target.directory_path.clone(),
                file_name: config.file_name.clone(),
                content,
            };
            self.notify(|o| o.on_render(&file));
            report.files.push(file);
        }

        if !self.dry_run {
            for file in &report.files {
                store.write_file(&file.directory, &file.file_name, &file.content)?;
                self.notify(|o| o.on_write(file));
            }
            report.written = true;
        }

        Ok(report)
    }

    fn notify(&self, f: impl Fn(&dyn Observer)) {
        for observer in &self.observers {
            f(observer.as_ref());
        }
    }
}
