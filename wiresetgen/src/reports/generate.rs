//! Generate command report and verbose progress output.

use std::{
    cell::RefCell,
    path::{Path, PathBuf},
};

use wiresetgen_codegen::pipeline::{GeneratedFile, GenerationReport, Observer};
use wiresetgen_core::{GenerationTarget, SetMember, paths};

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Project root the pipeline ran against.
    pub root: PathBuf,
    /// What the pipeline found and produced.
    pub generation: GenerationReport,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.generation.written {
            self.render_written(out);
        } else {
            self.render_preview(out);
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output) {
        let generation = &self.generation;

        if generation.targets.is_empty() {
            out.warning("no wireinject file found, nothing was generated");
        }

        out.key_value("Module", &generation.module);
        out.key_value(
            "Scanned",
            &format!(
                "{} files, {} members in {} sets",
                generation.files_scanned,
                generation.members.len(),
                generation.set_count()
            ),
        );

        if !generation.files.is_empty() {
            out.newline();
            out.section("Generated");
            for file in &generation.files {
                out.added_item(&self.display(file));
            }
        }

        out.newline();
        out.preformatted("Wire set generated successfully");
    }

    fn render_preview(&self, out: &mut dyn Output) {
        for file in &self.generation.files {
            out.divider(&self.display(file));
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated",
            self.generation.files.len()
        ));
    }

    fn display(&self, file: &GeneratedFile) -> String {
        paths::display_path(&self.root.join(file.path()))
    }
}

/// Prints each target, member and written file as the pipeline finds them.
pub struct VerboseObserver<O> {
    out: RefCell<O>,
}

impl<O: Output> VerboseObserver<O> {
    pub fn new(out: O) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }
}

impl<O: Output> Observer for VerboseObserver<O> {
    fn on_target(&self, file: &Path, _target: &GenerationTarget) {
        self.out.borrow_mut().info(&format!(
            "Found wire gen file at {}",
            paths::display_path(file)
        ));
    }

    fn on_member(&self, _file: &Path, member: &SetMember) {
        self.out.borrow_mut().info(&format!(
            "Found wire set {} for function {}",
            member.set_name, member.function_name
        ));
    }

    fn on_write(&self, file: &GeneratedFile) {
        self.out.borrow_mut().info(&format!(
            "Generated wire set file at {}",
            paths::display_path(&file.path())
        ));
    }
}
