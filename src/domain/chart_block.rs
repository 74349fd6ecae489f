// Chart block domain model

/// Structural role of a block on a dashboard page, decided by its slug
/// naming convention. Computed once at construction instead of re-matching
/// the slug on every page query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRole {
    Introduction,
    Footer,
    Disclaimer,
    Body,
}

impl BlockRole {
    pub fn from_slug(slug: &str) -> Self {
        // "-schema-introduction" also ends with "-introduction", so the
        // schema-only suffixes are checked first.
        if slug.ends_with("-schema-footer") {
            BlockRole::Footer
        } else if slug.ends_with("-schema-disclaimer") {
            BlockRole::Disclaimer
        } else if slug.ends_with("-introduction") {
            BlockRole::Introduction
        } else {
            BlockRole::Body
        }
    }
}

/// One named, ordered unit of dashboard content owned by a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBlock {
    pub title: String,
    /// Free-form grouping tag set by content editors. Unrelated to the
    /// dataset names used by the registry.
    pub dataset: String,
    pub slug: String,
    pub role: BlockRole,
}

impl ChartBlock {
    pub fn new(title: &str, dataset: &str, slug: &str) -> Self {
        Self {
            title: title.to_string(),
            dataset: dataset.to_string(),
            slug: slug.to_string(),
            role: BlockRole::from_slug(slug),
        }
    }
}
