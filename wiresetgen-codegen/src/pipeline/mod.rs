//! End-to-end generation pipeline.
//!
//! [`Pipeline`] sequences the stages over a [`FileStore`](wiresetgen_core::FileStore):
//!
//! 1. read `go.mod` and resolve the module path
//! 2. enumerate source files in sorted order and scan each one
//! 3. allocate import aliases and aggregate sets once for all targets
//! 4. render and write one file per generation target
//!
//! [`Observer`]s receive callbacks as members, targets and files are found.
//!
//! # Example
//!
//! ```ignore
//! use wiresetgen_codegen::pipeline::Pipeline;
//! use wiresetgen_core::FsStore;
//!
//! let store = FsStore::new(".");
//! let report = Pipeline::new().run(&store)?;
//! println!("{} files generated", report.files.len());
//! ```

mod observer;
mod report;
mod runner;

pub use observer::Observer;
pub use report::{GeneratedFile, GenerationReport};
pub use runner::Pipeline;
