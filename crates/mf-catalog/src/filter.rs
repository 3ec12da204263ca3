//! Reduce a catalog to the migrations a legacy version implies were applied.

use mf_core::MigrationDescriptor;

/// Keep the `Up` migrations with `version <= legacy_version`, preserving
/// catalog order.
///
/// The result is the seed set of rows for the new bookkeeping table.
pub fn filter_migrations(
    migrations: &[MigrationDescriptor],
    legacy_version: u32,
) -> Vec<MigrationDescriptor> {
    migrations
        .iter()
        .filter(|m| m.is_up() && m.version <= u64::from(legacy_version))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(versions: &[u64]) -> Vec<MigrationDescriptor> {
        versions
            .iter()
            .flat_map(|&v| {
                [
                    MigrationDescriptor::up(v, format!("m{v}")),
                    MigrationDescriptor::down(v, format!("m{v}")),
                ]
            })
            .collect()
    }

    #[test]
    fn test_keeps_up_entries_at_or_below_version() {
        let filtered = filter_migrations(&pairs(&[1, 2, 3, 4, 5]), 3);
        assert_eq!(
            filtered,
            vec![
                MigrationDescriptor::up(1, "m1"),
                MigrationDescriptor::up(2, "m2"),
                MigrationDescriptor::up(3, "m3"),
            ]
        );
    }

    #[test]
    fn test_preserves_catalog_order() {
        let catalog = vec![
            MigrationDescriptor::up(3, "c"),
            MigrationDescriptor::up(1, "a"),
            MigrationDescriptor::up(9, "z"),
            MigrationDescriptor::up(2, "b"),
        ];
        let versions: Vec<u64> = filter_migrations(&catalog, 3)
            .iter()
            .map(|m| m.version)
            .collect();
        assert_eq!(versions, vec![3, 1, 2]);
    }

    #[test]
    fn test_zero_version_keeps_nothing() {
        assert!(filter_migrations(&pairs(&[1, 2]), 0).is_empty());
    }

    #[test]
    fn test_version_above_catalog_keeps_all() {
        assert_eq!(filter_migrations(&pairs(&[1, 2, 3]), 100).len(), 3);
    }
}
