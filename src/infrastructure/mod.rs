// Infrastructure layer - Configuration and the in-memory registry
pub mod config;
pub mod memory_registry;
