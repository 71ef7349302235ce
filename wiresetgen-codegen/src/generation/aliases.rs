//! Import alias allocation.

use std::collections::{HashMap, HashSet};

use wiresetgen_core::{AliasTable, SetMember, paths};

/// Assign a unique alias to every distinct source path.
///
/// Paths are visited in member order. The base alias is the last path
/// segment; the first path to claim a base keeps it bare, later ones get a
/// numeric suffix starting at 2 (`repo`, `repo2`, `repo3`). A suffixed
/// candidate that is already taken is skipped, so aliases are always unique.
///
/// # Example
///
/// ```
/// use wiresetgen_codegen::generation::allocate_aliases;
/// use wiresetgen_core::SetMember;
///
/// let member = |path: &str| SetMember {
///     set_name: "Set".into(),
///     function_name: "New".into(),
///     package_name: "repo".into(),
///     source_path: path.into(),
/// };
///
/// let table = allocate_aliases(&[member("app/user/repo"), member("app/order/repo")]);
/// assert_eq!(table.get("app/user/repo"), Some("repo"));
/// assert_eq!(table.get("app/order/repo"), Some("repo2"));
/// ```
pub fn allocate_aliases(members: &[SetMember]) -> AliasTable {
    let mut table = AliasTable::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::new();

    for member in members {
        if table.contains(&member.source_path) {
            continue;
        }

        let base = paths::last_segment(&member.source_path);
        let alias = if !counts.contains_key(base) && !taken.contains(base) {
            counts.insert(base.to_string(), 1);
            base.to_string()
        } else {
            let count = counts.entry(base.to_string()).or_insert(1);
            loop {
                *count += 1;
                let candidate = format!("{}{}", base, count);
                if !taken.contains(&candidate) {
                    break candidate;
                }
            }
        };

        taken.insert(alias.clone());
        table.insert(member.source_path.clone(), alias);
    }

    table
}
