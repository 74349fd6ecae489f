// Resolver trait for backing incident models
use crate::domain::dataset::Dataset;

/// Handle to a resolved backing model: the per-department, per-category
/// record type whose rows decide whether a dataset has data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelHandle {
    name: String,
}

impl ModelHandle {
    pub fn new(dataset: Dataset, short_name: &str) -> Self {
        Self {
            name: dataset.model_name(short_name),
        }
    }

    /// Model name in the `<class_prefix><short_name>` convention,
    /// e.g. `CitizenComplaintBPD`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

pub trait ModelResolver: Send + Sync {
    /// Resolve the backing model registered for a dataset and department
    /// short name. `None` when the department does not collect that dataset.
    fn resolve(&self, dataset: Dataset, short_name: &str) -> Option<ModelHandle>;

    /// Whether at least one record of the model exists for the department.
    fn has_records(&self, model: &ModelHandle, department_id: i64) -> anyhow::Result<bool>;
}
