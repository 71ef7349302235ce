//! Core operations.
//!
//! This module contains the business logic for wiresetgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;

pub use generate::{GenerateOptions, generate};
