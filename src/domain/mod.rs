// Domain layer - Departments, chart blocks and dataset categories
pub mod chart_block;
pub mod dataset;
pub mod department;
