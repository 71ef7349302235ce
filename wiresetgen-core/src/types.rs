//! Data model shared across the scan, aggregate and render stages.

use std::path::PathBuf;

use indexmap::IndexMap;

/// A constructor function tagged with `@WireSet("<name>")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetMember {
    /// Name of the set the function belongs to.
    pub set_name: String,
    /// Name of the annotated function (may be empty if it could not be read).
    pub function_name: String,
    /// Go package declared by the file containing the function.
    pub package_name: String,
    /// Import path of the directory containing the function.
    pub source_path: String,
}

/// A directory that receives a generated wire set file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTarget {
    /// Go package declared by the `wireinject` file.
    pub package_name: String,
    /// Directory of the `wireinject` file, relative to the project root.
    pub directory_path: PathBuf,
}

/// An import path together with its unique alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasedImport {
    pub source_path: String,
    pub alias: String,
}

/// A named set and the member references it aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireSet {
    pub set_name: String,
    /// References of the form `alias.FunctionName`.
    pub member_refs: Vec<String>,
}

/// Everything a template needs to render one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationModel {
    pub package_name: String,
    /// Imports sorted by source path.
    pub imports: Vec<AliasedImport>,
    /// Sets sorted by name.
    pub sets: Vec<WireSet>,
}

/// Mapping from source path to import alias.
///
/// Maintains insertion order so that allocation is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: IndexMap<String, String>,
}

impl AliasTable {
    /// Create an empty alias table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the alias assigned to a source path.
    pub fn get(&self, source_path: &str) -> Option<&str> {
        self.aliases.get(source_path).map(String::as_str)
    }

    /// Check if a source path already has an alias.
    pub fn contains(&self, source_path: &str) -> bool {
        self.aliases.contains_key(source_path)
    }

    /// Assign an alias to a source path. Existing assignments are kept.
    pub fn insert(&mut self, source_path: impl Into<String>, alias: impl Into<String>) {
        self.aliases
            .entry(source_path.into())
            .or_insert_with(|| alias.into());
    }

    /// Iterate over `(source_path, alias)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Get the number of aliased paths.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_table_keeps_first_assignment() {
        let mut table = AliasTable::new();
        table.insert("example.com/app/repo", "repo");
        table.insert("example.com/app/repo", "other");

        assert_eq!(table.get("example.com/app/repo"), Some("repo"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_alias_table_iterates_in_insertion_order() {
        let mut table = AliasTable::new();
        table.insert("b/zeta", "zeta");
        table.insert("a/alpha", "alpha");

        let paths: Vec<&str> = table.iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["b/zeta", "a/alpha"]);
    }
}
