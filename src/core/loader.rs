// file loading: presence checks plus JSON parsing, nothing more
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::core::error::{MapError, Result};
use crate::core::mapper::RiskMapper;
use crate::core::schema::{BenchmarkSchema, GroupsMetadata, PlaybookEntry, RunRecord};

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(MapError::InputMissing(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| MapError::Json {
        path: path.to_path_buf(),
        source,
    })
}

impl RiskMapper {
    /// Load the two static datasets (plus the optional groups-metadata
    /// sidecar) from disk.
    ///
    /// The sidecar being absent is not an error: it only backfills display
    /// names, so we log and continue without it.
    pub fn from_files(
        schema_path: &Path,
        playbook_path: &Path,
        groups_metadata_path: Option<&Path>,
    ) -> Result<Self> {
        let schema: BenchmarkSchema = load_json(schema_path)?;
        info!(
            "loaded {} metric groups from {}",
            schema.metric_groups.len(),
            schema_path.display()
        );

        let playbook: Vec<PlaybookEntry> = load_json(playbook_path)?;
        info!(
            "loaded {} playbook entries from {}",
            playbook.len(),
            playbook_path.display()
        );

        let mut mapper = RiskMapper::new(schema, playbook);

        if let Some(path) = groups_metadata_path {
            if path.exists() {
                let metadata: GroupsMetadata = load_json(path)?;
                info!("applying {} groups-metadata entries", metadata.len());
                mapper.apply_groups_metadata(&metadata);
            } else {
                warn!("groups metadata not found at {}, continuing without it", path.display());
            }
        }

        Ok(mapper)
    }
}

pub fn load_run_records(path: &Path) -> Result<Vec<RunRecord>> {
    let records: Vec<RunRecord> = load_json(path)?;
    info!("loaded {} run records from {}", records.len(), path.display());
    Ok(records)
}
