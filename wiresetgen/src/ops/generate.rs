//! Generate operation - wire set files from annotated sources.

use std::path::Path;

use wiresetgen_codegen::pipeline::Pipeline;
use wiresetgen_core::{FsStore, Result};

use crate::reports::{GenerateReport, TerminalOutput, VerboseObserver};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Project root containing `go.mod`.
    pub root: &'a Path,
    /// Whether to report every target, member and written file.
    pub verbose: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline over the project tree, which also reads
/// `wiresetgen.toml` from the root if present.
pub fn generate(opts: GenerateOptions) -> Result<GenerateReport> {
    let store = FsStore::new(opts.root);

    let mut pipeline = Pipeline::new().dry_run(opts.dry_run);
    if opts.verbose {
        pipeline = pipeline.observer(VerboseObserver::new(TerminalOutput::new()));
    }

    let generation = pipeline.run(&store)?;

    Ok(GenerateReport {
        root: opts.root.to_path_buf(),
        generation,
    })
}
