// In-memory backing-model registry and record store
use crate::application::model_resolver::{ModelHandle, ModelResolver};
use crate::domain::dataset::{Dataset, DatasetError};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

/// One persisted incident row, reduced to what the visibility check needs.
#[derive(Debug, Clone)]
pub struct IncidentRecord {
    pub department_id: i64,
    /// Public identifier of the incident in the source system.
    pub opaque_id: String,
    pub received_at: DateTime<Utc>,
}

impl IncidentRecord {
    pub fn new(department_id: i64, opaque_id: &str) -> Self {
        Self {
            department_id,
            opaque_id: opaque_id.to_string(),
            received_at: Utc::now(),
        }
    }
}

/// Registry of backing models per (dataset, department short name), with an
/// in-memory record store. Models are registered at startup; records can be
/// added after the registry is shared as a resolver.
#[derive(Debug, Default)]
pub struct InMemoryModelRegistry {
    models: HashSet<(Dataset, String)>,
    records: RwLock<HashMap<String, Vec<IncidentRecord>>>,
}

impl InMemoryModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the backing model for a dataset the department collects.
    pub fn register_model(&mut self, dataset: Dataset, short_name: &str) {
        tracing::debug!("registering model {}", dataset.model_name(short_name));
        self.models.insert((dataset, short_name.to_string()));
    }

    /// Store a record under the department's backing model for the dataset.
    pub fn create_record(
        &self,
        dataset: Dataset,
        short_name: &str,
        record: IncidentRecord,
    ) -> Result<(), DatasetError> {
        let model = self.resolve(dataset, short_name).ok_or_else(|| {
            DatasetError::UndefinedBackingModel {
                dataset,
                short_name: short_name.to_string(),
            }
        })?;

        let mut records = self
            .records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        records
            .entry(model.name().to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    pub fn record_count(&self, model: &ModelHandle, department_id: i64) -> usize {
        let records = self
            .records
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        records
            .get(model.name())
            .map(|rows| {
                rows.iter()
                    .filter(|r| r.department_id == department_id)
                    .count()
            })
            .unwrap_or(0)
    }
}

impl ModelResolver for InMemoryModelRegistry {
    fn resolve(&self, dataset: Dataset, short_name: &str) -> Option<ModelHandle> {
        if self.models.contains(&(dataset, short_name.to_string())) {
            Some(ModelHandle::new(dataset, short_name))
        } else {
            None
        }
    }

    fn has_records(&self, model: &ModelHandle, department_id: i64) -> anyhow::Result<bool> {
        Ok(self.record_count(model, department_id) > 0)
    }
}
