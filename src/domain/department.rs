// Department domain model and dashboard page classifiers
use super::chart_block::{BlockRole, ChartBlock};
use super::dataset::Dataset;

/// An oversight entity whose public dashboard content and data visibility
/// this layer governs.
#[derive(Debug, Clone)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub short_name: String,
    pub is_public_citizen_complaints: bool,
    pub is_public_use_of_force_incidents: bool,
    pub is_public_officer_involved_shootings: bool,
    pub is_public_assaults_on_officers: bool,
    /// Ordered content sequence. Appended by callers and persisted as a unit
    /// by the storage collaborator.
    pub chart_blocks: Vec<ChartBlock>,
}

/// Classified blocks for a charted content page.
#[derive(Debug, Clone, Default)]
pub struct ContentPageBlocks {
    pub introduction: Option<ChartBlock>,
    pub first_block: Option<ChartBlock>,
    /// Remaining blocks in their original append order.
    pub blocks: Vec<ChartBlock>,
}

/// Classified blocks for a schema documentation page.
#[derive(Debug, Clone, Default)]
pub struct SchemaPageBlocks {
    pub introduction: Option<ChartBlock>,
    pub footer: Option<ChartBlock>,
    pub disclaimer: Option<ChartBlock>,
    /// Remaining field-description blocks. Membership is the contract;
    /// callers must not rely on order.
    pub blocks: Vec<ChartBlock>,
}

impl Department {
    /// Create a department. With `load_defaults` every dataset starts
    /// public; otherwise all visibility flags are off until a caller or a
    /// defaults profile turns them on.
    pub fn create(id: i64, name: &str, short_name: &str, load_defaults: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            short_name: short_name.to_string(),
            is_public_citizen_complaints: load_defaults,
            is_public_use_of_force_incidents: load_defaults,
            is_public_officer_involved_shootings: load_defaults,
            is_public_assaults_on_officers: load_defaults,
            chart_blocks: Vec::new(),
        }
    }

    pub fn get_complaint_blocks(&self) -> ContentPageBlocks {
        self.content_page_blocks()
    }

    pub fn get_uof_blocks(&self) -> ContentPageBlocks {
        self.content_page_blocks()
    }

    pub fn get_ois_blocks(&self) -> ContentPageBlocks {
        self.content_page_blocks()
    }

    pub fn get_assaults_blocks(&self) -> ContentPageBlocks {
        self.content_page_blocks()
    }

    pub fn get_complaint_schema_blocks(&self) -> SchemaPageBlocks {
        self.schema_page_blocks(Dataset::Complaints)
    }

    pub fn get_uof_schema_blocks(&self) -> SchemaPageBlocks {
        self.schema_page_blocks(Dataset::UseOfForce)
    }

    pub fn get_ois_schema_blocks(&self) -> SchemaPageBlocks {
        self.schema_page_blocks(Dataset::OfficerInvolvedShootings)
    }

    pub fn get_assaults_schema_blocks(&self) -> SchemaPageBlocks {
        self.schema_page_blocks(Dataset::AssaultsOnOfficers)
    }

    /// Partition the full block sequence into the content page shape.
    /// Singleton slots are first-in-sequence-wins; later matches fall to the
    /// residual list. Content pages do not filter by category prefix, so
    /// shared blocks such as `officer-demographics` stay in the list.
    fn content_page_blocks(&self) -> ContentPageBlocks {
        let mut page = ContentPageBlocks::default();
        for block in &self.chart_blocks {
            match block.role {
                BlockRole::Introduction if page.introduction.is_none() => {
                    page.introduction = Some(block.clone());
                }
                BlockRole::Introduction => page.blocks.push(block.clone()),
                _ if page.first_block.is_none() => page.first_block = Some(block.clone()),
                _ => page.blocks.push(block.clone()),
            }
        }
        page
    }

    /// Partition the blocks in the dataset's schema namespace (slug starts
    /// with `<prefix>-schema`) into the schema page shape.
    fn schema_page_blocks(&self, dataset: Dataset) -> SchemaPageBlocks {
        let namespace = format!("{}-schema", dataset.slug_prefix());
        let mut page = SchemaPageBlocks::default();
        for block in &self.chart_blocks {
            if !block.slug.starts_with(&namespace) {
                continue;
            }
            match block.role {
                BlockRole::Introduction if page.introduction.is_none() => {
                    page.introduction = Some(block.clone());
                }
                BlockRole::Footer if page.footer.is_none() => {
                    page.footer = Some(block.clone());
                }
                BlockRole::Disclaimer if page.disclaimer.is_none() => {
                    page.disclaimer = Some(block.clone());
                }
                _ => page.blocks.push(block.clone()),
            }
        }
        page
    }
}
