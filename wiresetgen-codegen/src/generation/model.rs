//! Generation model construction.

use wiresetgen_core::{AliasedImport, GenerationModel, GenerationTarget, Result, SetMember, WireSet};
use wiresetgen_manifest::Config;

use super::{aggregate, allocate_aliases, ordered_imports};

/// Builds the per-target render input.
///
/// Imports and sets depend only on the scanned members, so they are computed
/// once and shared by every target; targets differ only by package name.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    imports: Vec<AliasedImport>,
    sets: Vec<WireSet>,
}

impl ModelBuilder {
    /// Allocate aliases and aggregate sets for the given members.
    pub fn new(members: &[SetMember], config: &Config) -> Result<Self> {
        let aliases = allocate_aliases(members);
        let sets = aggregate(members, &aliases, config)?;

        Ok(Self {
            imports: ordered_imports(&aliases),
            sets,
        })
    }

    /// Build the model for one target.
    pub fn model_for(&self, target: &GenerationTarget) -> GenerationModel {
        GenerationModel {
            package_name: target.package_name.clone(),
            imports: self.imports.clone(),
            sets: self.sets.clone(),
        }
    }
}
