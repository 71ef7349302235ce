//! Output model construction.
//!
//! - [`allocate_aliases`] - unique import aliases per source path
//! - [`aggregate`] / [`ordered_imports`] - sorted sets and imports
//! - [`ModelBuilder`] - per-target [`GenerationModel`](wiresetgen_core::GenerationModel)s

mod aliases;
mod model;
mod sets;

pub use aliases::allocate_aliases;
pub use model::ModelBuilder;
pub use sets::{aggregate, ordered_imports};
