// serde input model for the two static datasets plus benchmark run results
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Benchmark schema root: the only part we care about is `metric_groups`.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkSchema {
    #[serde(default)]
    pub metric_groups: Vec<MetricGroup>,
}

/// One metric category from the benchmark schema.
///
/// `display_name`/`description` may be missing in the source; the mapper
/// backfills an empty display name with the group name.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricGroup {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<MetricRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricRef {
    pub name: String,
}

/// Optional sidecar file keyed by group name. Only used to backfill display
/// names and descriptions the schema left empty.
pub type GroupsMetadata = BTreeMap<String, GroupMetadata>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupMetadata {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
}

/// One risk-indicator entry from the governance playbook.
///
/// The playbook is a flat JSON array. Field names follow the source data,
/// including the capitalized `Topic` tag list.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaybookEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub indicator_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    //source data sometimes carries a bare string here instead of a list
    #[serde(default, rename = "Topic", deserialize_with = "string_or_list")]
    pub topics: Vec<String>,
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

/// One benchmark run result record: which model ran which category, with the
/// statistics the run produced.
#[derive(Debug, Clone, Deserialize)]
pub struct RunRecord {
    pub model: String,
    pub category: String,
    #[serde(default)]
    pub stats: Vec<Statistic>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Statistic {
    pub name: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub mean: Option<f64>,
}
