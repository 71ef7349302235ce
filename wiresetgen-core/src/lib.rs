//! Core types and utilities for the wiresetgen generator.
//!
//! This crate provides the data model shared by the scanner, the aggregator
//! and the renderer, the error taxonomy, and the [`FileStore`] abstraction
//! over the project tree.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
pub mod paths;
mod store;
mod types;

pub use error::{Error, Result, SourceContext, TemplateError};
#[cfg(any(test, feature = "testing"))]
pub use store::MemoryStore;
pub use store::{FileStore, FsStore};
pub use types::{AliasTable, AliasedImport, GenerationModel, GenerationTarget, SetMember, WireSet};
