// Application layer - Use cases and the resolver seam
pub mod dataset_service;
pub mod model_resolver;
