//! Project manifest handling for wiresetgen.
//!
//! - [`GoMod`] resolves the module path declared by `go.mod`
//! - [`Config`] holds the optional `wiresetgen.toml` settings

mod config;
mod go_mod;

pub use config::{Config, MemberRefs};
pub use go_mod::{GoMod, resolve_module};
