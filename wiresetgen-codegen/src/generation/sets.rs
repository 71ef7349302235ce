//! Set aggregation.

use indexmap::IndexMap;
use wiresetgen_core::{AliasTable, AliasedImport, Error, Result, SetMember, WireSet};
use wiresetgen_manifest::{Config, MemberRefs};

/// Group members into sets, sorted by set name.
///
/// Each member contributes a `qualifier.FunctionName` reference, where the
/// qualifier is the member's import alias or its package name depending on
/// [`Config::member_refs`]. References keep scan order unless
/// [`Config::sort_members`] is set.
///
/// # Errors
///
/// Returns [`Error::MissingAlias`] if a member's source path has no alias.
pub fn aggregate(members: &[SetMember], aliases: &AliasTable, config: &Config) -> Result<Vec<WireSet>> {
    let mut grouped: IndexMap<&str, Vec<String>> = IndexMap::new();

    for member in members {
        let qualifier = match config.member_refs {
            MemberRefs::Alias => aliases.get(&member.source_path).ok_or_else(|| {
                Box::new(Error::MissingAlias {
                    source_path: member.source_path.clone(),
                })
            })?,
            MemberRefs::Package => member.package_name.as_str(),
        };

        grouped
            .entry(member.set_name.as_str())
            .or_default()
            .push(format!("{}.{}", qualifier, member.function_name));
    }

    let mut sets: Vec<WireSet> = grouped
        .into_iter()
        .map(|(set_name, mut member_refs)| {
            if config.sort_members {
                member_refs.sort();
            }
            WireSet {
                set_name: set_name.to_string(),
                member_refs,
            }
        })
        .collect();

    sets.sort_by(|a, b| a.set_name.cmp(&b.set_name));
    Ok(sets)
}

/// All aliased imports, sorted by source path.
pub fn ordered_imports(aliases: &AliasTable) -> Vec<AliasedImport> {
    let mut imports: Vec<AliasedImport> = aliases
        .iter()
        .map(|(source_path, alias)| AliasedImport {
            source_path: source_path.to_string(),
            alias: alias.to_string(),
        })
        .collect();

    imports.sort_by(|a, b| a.source_path.cmp(&b.source_path));
    imports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::allocate_aliases;

    fn member(set: &str, function: &str, package: &str, path: &str) -> SetMember {
        SetMember {
            set_name: set.to_string(),
            function_name: function.to_string(),
            package_name: package.to_string(),
            source_path: path.to_string(),
        }
    }

    fn fixture() -> Vec<SetMember> {
        vec![
            member("Services", "NewUserService", "service", "app/service"),
            member("Repositories", "NewUserRepo", "repository", "app/user/repo"),
            member("Repositories", "NewOrderRepo", "repository", "app/order/repo"),
            member("Repositories", "NewAuditRepo", "repository", "app/user/repo"),
        ]
    }

    fn refs(sets: &[WireSet]) -> Vec<(&str, Vec<&str>)> {
        sets.iter()
            .map(|s| {
                (
                    s.set_name.as_str(),
                    s.member_refs.iter().map(String::as_str).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_sets_sorted_by_name_with_sorted_members() {
        let members = fixture();
        let aliases = allocate_aliases(&members);

        let sets = aggregate(&members, &aliases, &Config::default()).unwrap();

        assert_eq!(
            refs(&sets),
            vec![
                (
                    "Repositories",
                    vec!["repo.NewAuditRepo", "repo.NewUserRepo", "repo2.NewOrderRepo"]
                ),
                ("Services", vec!["service.NewUserService"]),
            ]
        );
    }

    #[test]
    fn test_unsorted_members_keep_scan_order() {
        let members = fixture();
        let aliases = allocate_aliases(&members);
        let config = Config {
            sort_members: false,
            ..Config::default()
        };

        let sets = aggregate(&members, &aliases, &config).unwrap();

        assert_eq!(
            sets[0].member_refs,
            vec!["repo.NewUserRepo", "repo2.NewOrderRepo", "repo.NewAuditRepo"]
        );
    }

    #[test]
    fn test_package_refs() {
        let members = fixture();
        let aliases = allocate_aliases(&members);
        let config = Config {
            member_refs: MemberRefs::Package,
            ..Config::default()
        };

        let sets = aggregate(&members, &aliases, &config).unwrap();

        assert_eq!(
            sets[0].member_refs,
            vec![
                "repository.NewAuditRepo",
                "repository.NewOrderRepo",
                "repository.NewUserRepo"
            ]
        );
        assert_eq!(sets[1].member_refs, vec!["service.NewUserService"]);
    }

    #[test]
    fn test_set_order_is_ordinal() {
        let members = vec![
            member("b", "New", "x", "app/x"),
            member("B", "New", "x", "app/x"),
            member("a", "New", "x", "app/x"),
        ];
        let aliases = allocate_aliases(&members);

        let sets = aggregate(&members, &aliases, &Config::default()).unwrap();
        let names: Vec<&str> = sets.iter().map(|s| s.set_name.as_str()).collect();

        assert_eq!(names, vec!["B", "a", "b"]);
    }

    #[test]
    fn test_missing_alias_is_an_error() {
        let members = fixture();

        let err = aggregate(&members, &AliasTable::new(), &Config::default()).unwrap_err();
        assert!(matches!(*err, Error::MissingAlias { .. }));
    }

    #[test]
    fn test_ordered_imports_sorted_by_path() {
        let members = fixture();
        let aliases = allocate_aliases(&members);

        let imports = ordered_imports(&aliases);
        let pairs: Vec<(&str, &str)> = imports
            .iter()
            .map(|i| (i.source_path.as_str(), i.alias.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("app/order/repo", "repo2"),
                ("app/service", "service"),
                ("app/user/repo", "repo"),
            ]
        );
    }
}
