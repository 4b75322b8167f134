// central hub: holds the two loaded datasets, operations live in
// matching.rs / mapping.rs / status.rs as impl blocks on this struct
use std::collections::BTreeMap;

use crate::core::assoc::{CATEGORY_ASSOCIATIONS, CategoryAssociation};
use crate::core::schema::{BenchmarkSchema, GroupsMetadata, MetricGroup, PlaybookEntry};

#[derive(Debug)]
pub struct RiskMapper {
    //metric groups keyed by name, BTreeMap keeps iteration deterministic
    pub groups: BTreeMap<String, MetricGroup>,
    //playbook entries in source order
    pub playbook: Vec<PlaybookEntry>,
}

impl RiskMapper {
    pub fn new(schema: BenchmarkSchema, playbook: Vec<PlaybookEntry>) -> Self {
        let mut groups = BTreeMap::new();
        for mut group in schema.metric_groups {
            if group.display_name.is_empty() {
                group.display_name = group.name.clone();
            }
            groups.insert(group.name.clone(), group);
        }
        Self { groups, playbook }
    }

    /// Backfill display names and descriptions the schema left empty.
    ///
    /// Never overwrites a non-empty value coming from the schema itself.
    pub fn apply_groups_metadata(&mut self, metadata: &GroupsMetadata) {
        for (name, meta) in metadata {
            let Some(group) = self.groups.get_mut(name) else {
                continue;
            };
            //new() already backfilled display_name with the group name, so an
            //"empty" display name here means it still equals the raw name
            if group.display_name == group.name && !meta.display_name.is_empty() {
                group.display_name = meta.display_name.clone();
            }
            if group.description.is_empty() && !meta.description.is_empty() {
                group.description = meta.description.clone();
            }
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn playbook_len(&self) -> usize {
        self.playbook.len()
    }

    /// Association rows whose category actually exists in the loaded schema,
    /// in table order. Rows for absent categories are skipped.
    pub fn active_associations(&self) -> Vec<&'static CategoryAssociation> {
        CATEGORY_ASSOCIATIONS
            .iter()
            .filter(|a| self.groups.contains_key(a.category))
            .collect()
    }
}
