//! Scanning, aggregation and rendering for the wiresetgen generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Code building blocks (CodeBuilder)
//! - [`scan`] - Line-based extraction of `@WireSet` members and `wireinject` targets
//! - [`generation`] - Import alias allocation and set aggregation
//! - [`render`] - Templates turning a generation model into Go source
//! - [`pipeline`] - The end-to-end scan → aggregate → render → write run

pub mod builder;
pub mod generation;
pub mod pipeline;
pub mod render;
pub mod scan;
