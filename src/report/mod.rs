// report assembly + the two serialized output forms (JSON and TOML)
pub mod summary;

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::core::error::{MapError, Result};
use crate::core::mapper::RiskMapper;
use crate::core::mapping::{CategoryMapping, aggregate_rollup};
use crate::core::schema::RunRecord;
use crate::core::status::ModelStatusMap;

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub benchmark_version: String,
    pub playbook_source: String,
    pub generated: String,
    pub description: String,
}

impl ReportMetadata {
    fn new(benchmark_version: &str, playbook_source: &str, description: &str) -> Self {
        Self {
            benchmark_version: benchmark_version.to_string(),
            playbook_source: playbook_source.to_string(),
            generated: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            description: description.to_string(),
        }
    }
}

/// The weighted category -> indicator mapping report.
#[derive(Debug, Clone, Serialize)]
pub struct MappingReport {
    pub metadata: ReportMetadata,
    pub mappings: Vec<CategoryMapping>,
    pub weight_rollup: BTreeMap<String, f64>,
}

impl MappingReport {
    pub fn build(mapper: &RiskMapper, benchmark_version: &str, playbook_source: &str) -> Self {
        let mappings = mapper.build_mappings();
        let weight_rollup = aggregate_rollup(&mappings);
        Self {
            metadata: ReportMetadata::new(
                benchmark_version,
                playbook_source,
                "Mapping from benchmark metric categories to governance playbook \
                 indicators, weighted by category importance and normalized by \
                 match count.",
            ),
            mappings,
            weight_rollup,
        }
    }

    pub fn category_count(&self) -> usize {
        self.mappings.len()
    }

    /// Total category -> indicator pairs across the whole report.
    pub fn pair_count(&self) -> usize {
        self.mappings.iter().map(|m| m.indicators.len()).sum()
    }
}

/// Per-model pass/fail status over the mapped categories.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub metadata: ReportMetadata,
    pub models: ModelStatusMap,
}

impl StatusReport {
    pub fn build(
        mapper: &RiskMapper,
        records: &[RunRecord],
        benchmark_version: &str,
        playbook_source: &str,
    ) -> Self {
        Self {
            metadata: ReportMetadata::new(
                benchmark_version,
                playbook_source,
                "Per-model pass/fail status for each mapped benchmark category.",
            ),
            models: mapper.evaluate_models(records),
        }
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn failure_count(&self) -> usize {
        self.models
            .values()
            .flat_map(|categories| categories.values())
            .filter(|cell| cell.status.is_fail())
            .count()
    }
}

pub fn to_json_string<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| MapError::Serialize(e.to_string()))
}

pub fn to_toml_string<T: Serialize>(report: &T) -> Result<String> {
    toml::to_string_pretty(report).map_err(|e| MapError::Serialize(e.to_string()))
}
