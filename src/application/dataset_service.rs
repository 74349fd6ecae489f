// Dataset visibility service - Use case for "is this dataset displayable"
use crate::application::model_resolver::{ModelHandle, ModelResolver};
use crate::domain::dataset::{self, Dataset, DatasetError, DatasetLookup};
use crate::domain::department::Department;
use std::sync::Arc;

#[derive(Clone)]
pub struct DatasetService {
    resolver: Arc<dyn ModelResolver>,
}

impl DatasetService {
    pub fn new(resolver: Arc<dyn ModelResolver>) -> Self {
        Self { resolver }
    }

    /// Registry entry for a dataset name.
    pub fn get_dataset_lookup(&self, name: &str) -> Result<DatasetLookup, DatasetError> {
        dataset::get_dataset_lookup(name)
    }

    /// Resolve the backing model for a department and dataset name.
    /// `UndefinedBackingModel` is an expected outcome for departments that
    /// do not yet collect that dataset type.
    pub fn resolve_backing_model(
        &self,
        department: &Department,
        name: &str,
    ) -> Result<ModelHandle, DatasetError> {
        let dataset = Dataset::from_name(name)?;
        self.resolver
            .resolve(dataset, &department.short_name)
            .ok_or_else(|| DatasetError::UndefinedBackingModel {
                dataset,
                short_name: department.short_name.clone(),
            })
    }

    /// Whether the dataset is flagged public and has at least one record.
    ///
    /// Returns false without touching storage when the visibility flag is
    /// off. A missing backing model or a failed record check also answers
    /// false; only an unknown dataset name is an error.
    pub fn dataset_is_public_and_has_data(
        &self,
        department: &Department,
        name: &str,
    ) -> Result<bool, DatasetError> {
        let dataset = Dataset::from_name(name)?;
        if !dataset.is_public(department) {
            return Ok(false);
        }

        let model = match self.resolver.resolve(dataset, &department.short_name) {
            Some(model) => model,
            None => {
                tracing::debug!(
                    "no backing model for {} in department {}",
                    dataset,
                    department.short_name
                );
                return Ok(false);
            }
        };

        match self.resolver.has_records(&model, department.id) {
            Ok(has_data) => Ok(has_data),
            Err(e) => {
                tracing::warn!("record check failed for {}: {}", model.name(), e);
                Ok(false)
            }
        }
    }

    /// How many of the four datasets are public and non-empty.
    pub fn displayable_dataset_count(&self, department: &Department) -> usize {
        Dataset::ALL
            .iter()
            .filter(|dataset| {
                self.dataset_is_public_and_has_data(department, dataset.name())
                    .unwrap_or(false)
            })
            .count()
    }
}
