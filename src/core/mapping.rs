// mapping construction: association table x schema x playbook -> weighted rows
use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::mapper::RiskMapper;
use crate::core::types::WeightTier;
use crate::core::weights::{merge_rollups, per_indicator_weight, rollup_by_type};

/// A playbook entry matched to a category, carrying its normalized weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedIndicator {
    pub title: String,
    #[serde(rename = "type")]
    pub indicator_type: String,
    pub category: String,
    pub description: String,
    pub topics: Vec<String>,
    pub mapping_weight: f64,
}

/// One benchmark category mapped onto its playbook indicators.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMapping {
    pub category: String,
    pub display_name: String,
    pub metrics: Vec<String>,
    pub metric_count: usize,
    pub weight_tier: WeightTier,
    pub indicators: Vec<MatchedIndicator>,
    pub weight_by_type: BTreeMap<String, f64>,
}

impl RiskMapper {
    /// Build the full weighted mapping.
    ///
    /// Walks the association table in order, skips categories the schema does
    /// not carry, matches indicators by topic keyword and distributes each
    /// category's tier value evenly across its matches.
    pub fn build_mappings(&self) -> Vec<CategoryMapping> {
        let mut mappings = Vec::new();

        for assoc in self.active_associations() {
            //active_associations() guarantees the group exists
            let group = &self.groups[assoc.category];

            let matched = self.match_indicators(assoc.keywords);
            let weight = per_indicator_weight(assoc.tier, matched.len());

            let indicators: Vec<MatchedIndicator> = matched
                .into_iter()
                .map(|entry| MatchedIndicator {
                    title: entry.title.clone(),
                    indicator_type: entry.indicator_type.clone(),
                    category: entry.category.clone(),
                    description: entry.description.clone(),
                    topics: entry.topics.clone(),
                    mapping_weight: weight,
                })
                .collect();

            let weight_by_type = rollup_by_type(&indicators);

            mappings.push(CategoryMapping {
                category: group.name.clone(),
                display_name: group.display_name.clone(),
                metrics: group.metrics.iter().map(|m| m.name.clone()).collect(),
                metric_count: group.metrics.len(),
                weight_tier: assoc.tier,
                indicators,
                weight_by_type,
            });
        }

        mappings
    }

    /// Category names that made it into the mapping, in table order.
    pub fn mapped_categories(&self) -> Vec<&'static str> {
        self.active_associations()
            .into_iter()
            .map(|a| a.category)
            .collect()
    }
}

/// Aggregate weight rollup across all categories, keyed by indicator type.
pub fn aggregate_rollup(mappings: &[CategoryMapping]) -> BTreeMap<String, f64> {
    merge_rollups(mappings.iter().map(|m| &m.weight_by_type))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::mapper::test_support::{mk_entry, mk_group, mk_mapper};

    #[test]
    fn mapping_skips_categories_missing_from_schema() {
        let mapper = mk_mapper(
            vec![mk_group("accuracy", &["exact_match", "f1_score"])],
            vec![mk_entry("MEASURE 2.5", "Measure", &["Validity and Reliability"])],
        );

        let mappings = mapper.build_mappings();
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings[0].category, "accuracy");
        assert_eq!(mappings[0].metric_count, 2);
        assert_eq!(mapper.mapped_categories(), vec!["accuracy"]);
    }

    #[test]
    fn tier_value_is_split_evenly_across_matches() {
        let mapper = mk_mapper(
            vec![mk_group("toxicity", &["toxic_frac"])],
            vec![
                mk_entry("GOVERN 1.4", "Govern", &["Safety"]),
                mk_entry("MEASURE 2.6", "Measure", &["Safety"]),
                mk_entry("MANAGE 1.3", "Manage", &["Safety"]),
                mk_entry("MANAGE 2.1", "Manage", &["Safety"]),
            ],
        );

        let mappings = mapper.build_mappings();
        let m = &mappings[0];
        assert_eq!(m.weight_tier, WeightTier::High);
        assert_eq!(m.indicators.len(), 4);
        for ind in &m.indicators {
            assert!((ind.mapping_weight - 0.25).abs() < 1e-9);
        }

        //rollup groups the two Manage indicators together
        assert!((m.weight_by_type["Manage"] - 0.5).abs() < 1e-9);
        assert!((m.weight_by_type["Govern"] - 0.25).abs() < 1e-9);
        assert!((m.weight_by_type["Measure"] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn category_with_zero_matches_has_empty_indicator_list() {
        let mapper = mk_mapper(
            vec![mk_group("copyright_metrics", &["longest_common_prefix"])],
            vec![mk_entry("MEASURE 2.5", "Measure", &["Validity and Reliability"])],
        );

        let mappings = mapper.build_mappings();
        let m = &mappings[0];
        assert!(m.indicators.is_empty());
        assert!(m.weight_by_type.is_empty());
        //the category itself still appears in the report
        assert_eq!(m.category, "copyright_metrics");
    }

    #[test]
    fn mappings_follow_association_table_order_not_schema_order() {
        //schema iterates alphabetically (bias before accuracy) but the
        //report must follow the association table (accuracy first)
        let mapper = mk_mapper(
            vec![mk_group("bias", &[]), mk_group("accuracy", &[])],
            vec![],
        );

        let order: Vec<String> = mapper
            .build_mappings()
            .into_iter()
            .map(|m| m.category)
            .collect();
        assert_eq!(order, vec!["accuracy".to_string(), "bias".to_string()]);
    }

    #[test]
    fn aggregate_rollup_sums_across_categories() {
        let mapper = mk_mapper(
            vec![mk_group("toxicity", &[]), mk_group("accuracy", &[])],
            vec![
                mk_entry("GOVERN 1.4", "Govern", &["Safety"]),
                mk_entry("MEASURE 2.5", "Measure", &["Validity and Reliability"]),
            ],
        );

        let mappings = mapper.build_mappings();
        let total = aggregate_rollup(&mappings);
        //accuracy (high, 1 match) -> Measure 1.0; toxicity (high, 1 match) -> Govern 1.0
        assert!((total["Measure"] - 1.0).abs() < 1e-9);
        assert!((total["Govern"] - 1.0).abs() < 1e-9);
    }
}
