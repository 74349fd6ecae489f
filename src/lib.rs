// Data-access layer for department dashboard content and dataset visibility
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::dataset_service::DatasetService;
pub use application::model_resolver::{ModelHandle, ModelResolver};
pub use domain::chart_block::{BlockRole, ChartBlock};
pub use domain::dataset::{Dataset, DatasetError, DatasetLookup, get_dataset_lookup};
pub use domain::department::{ContentPageBlocks, Department, SchemaPageBlocks};
pub use infrastructure::config::{DepartmentDefaults, load_department_defaults};
pub use infrastructure::memory_registry::{IncidentRecord, InMemoryModelRegistry};
