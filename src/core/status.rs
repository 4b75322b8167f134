// per-model status: a mapped category fails when no successful statistic exists
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::core::mapper::RiskMapper;
use crate::core::schema::{RunRecord, Statistic};
use crate::core::types::ModelStatus;

impl Statistic {
    /// A statistic counts as successful when it was actually computed over
    /// something (`count > 0`) and produced a finite mean.
    pub fn is_successful(&self) -> bool {
        self.count > 0 && self.mean.is_some_and(f64::is_finite)
    }
}

/// One (model, category) cell of the status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStatus {
    pub status: ModelStatus,
    pub records: usize,
    pub successful_stats: usize,
}

/// model -> category -> status, both levels lexicographically ordered.
pub type ModelStatusMap = BTreeMap<String, BTreeMap<String, CategoryStatus>>;

impl RiskMapper {
    /// Evaluate every model seen in the run records against every mapped
    /// category.
    ///
    /// A category passes for a model when at least one of its records carries
    /// at least one successful statistic; everything else (including no
    /// records at all) fails.
    pub fn evaluate_models(&self, records: &[RunRecord]) -> ModelStatusMap {
        let models: BTreeSet<&str> = records.iter().map(|r| r.model.as_str()).collect();
        let categories = self.mapped_categories();

        let mut out = ModelStatusMap::new();
        for model in models {
            let mut per_category = BTreeMap::new();

            for category in &categories {
                let mut seen = 0usize;
                let mut successful = 0usize;

                for record in records {
                    if record.model != model || record.category != *category {
                        continue;
                    }
                    seen += 1;
                    successful += record.stats.iter().filter(|s| s.is_successful()).count();
                }

                let status = if successful > 0 {
                    ModelStatus::Pass
                } else {
                    ModelStatus::Fail
                };

                per_category.insert(
                    category.to_string(),
                    CategoryStatus {
                        status,
                        records: seen,
                        successful_stats: successful,
                    },
                );
            }

            out.insert(model.to_string(), per_category);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::mapper::test_support::{mk_group, mk_mapper};

    fn mk_stat(name: &str, count: u64, mean: Option<f64>) -> Statistic {
        Statistic {
            name: name.to_string(),
            count,
            mean,
        }
    }

    fn mk_record(model: &str, category: &str, stats: Vec<Statistic>) -> RunRecord {
        RunRecord {
            model: model.to_string(),
            category: category.to_string(),
            stats,
        }
    }

    #[test]
    fn successful_statistic_needs_count_and_finite_mean() {
        assert!(mk_stat("exact_match", 10, Some(0.82)).is_successful());
        assert!(!mk_stat("exact_match", 0, Some(0.82)).is_successful());
        assert!(!mk_stat("exact_match", 10, None).is_successful());
        assert!(!mk_stat("exact_match", 10, Some(f64::NAN)).is_successful());
        assert!(!mk_stat("exact_match", 10, Some(f64::INFINITY)).is_successful());
    }

    #[test]
    fn model_passes_category_with_one_successful_stat() {
        let mapper = mk_mapper(vec![mk_group("accuracy", &["exact_match"])], vec![]);

        let records = vec![mk_record(
            "org/model-a",
            "accuracy",
            vec![
                mk_stat("exact_match", 0, None),
                mk_stat("f1_score", 120, Some(0.64)),
            ],
        )];

        let status = mapper.evaluate_models(&records);
        let cell = &status["org/model-a"]["accuracy"];
        assert_eq!(cell.status, ModelStatus::Pass);
        assert_eq!(cell.records, 1);
        assert_eq!(cell.successful_stats, 1);
    }

    #[test]
    fn category_with_no_records_for_a_model_fails() {
        let mapper = mk_mapper(
            vec![mk_group("accuracy", &[]), mk_group("toxicity", &[])],
            vec![],
        );

        //model-a only ran accuracy; toxicity must fail with zero records
        let records = vec![mk_record(
            "org/model-a",
            "accuracy",
            vec![mk_stat("exact_match", 5, Some(0.5))],
        )];

        let status = mapper.evaluate_models(&records);
        let toxicity = &status["org/model-a"]["toxicity"];
        assert_eq!(toxicity.status, ModelStatus::Fail);
        assert_eq!(toxicity.records, 0);
        assert_eq!(toxicity.successful_stats, 0);
    }

    #[test]
    fn records_without_any_successful_stat_fail() {
        let mapper = mk_mapper(vec![mk_group("toxicity", &[])], vec![]);

        let records = vec![
            mk_record("org/model-a", "toxicity", vec![mk_stat("toxic_frac", 0, None)]),
            mk_record(
                "org/model-a",
                "toxicity",
                vec![mk_stat("toxic_frac", 3, Some(f64::NAN))],
            ),
        ];

        let status = mapper.evaluate_models(&records);
        let cell = &status["org/model-a"]["toxicity"];
        assert_eq!(cell.status, ModelStatus::Fail);
        assert_eq!(cell.records, 2);
        assert_eq!(cell.successful_stats, 0);
    }

    #[test]
    fn records_for_unmapped_categories_are_ignored() {
        let mapper = mk_mapper(vec![mk_group("accuracy", &[])], vec![]);

        let records = vec![
            mk_record("org/model-a", "accuracy", vec![mk_stat("em", 1, Some(1.0))]),
            //"latency" is not in the association table, it must not appear
            mk_record("org/model-a", "latency", vec![mk_stat("ms", 1, Some(9.0))]),
        ];

        let status = mapper.evaluate_models(&records);
        assert_eq!(status["org/model-a"].len(), 1);
        assert!(status["org/model-a"].contains_key("accuracy"));
    }

    #[test]
    fn models_and_categories_come_out_sorted() {
        let mapper = mk_mapper(
            vec![mk_group("accuracy", &[]), mk_group("bias", &[])],
            vec![],
        );

        let records = vec![
            mk_record("org/zeta", "accuracy", vec![mk_stat("em", 1, Some(0.9))]),
            mk_record("org/alpha", "bias", vec![mk_stat("demog", 2, Some(0.1))]),
        ];

        let status = mapper.evaluate_models(&records);
        let models: Vec<&String> = status.keys().collect();
        assert_eq!(models, vec!["org/alpha", "org/zeta"]);

        //both models are evaluated against both mapped categories
        assert_eq!(status["org/alpha"].len(), 2);
        assert_eq!(status["org/zeta"]["bias"].status, ModelStatus::Fail);
        assert_eq!(status["org/alpha"]["bias"].status, ModelStatus::Pass);
    }
}
