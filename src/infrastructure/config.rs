// Department defaults loaded from configuration
use crate::domain::chart_block::ChartBlock;
use crate::domain::dataset::Dataset;
use crate::domain::department::Department;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DefaultsConfig {
    pub defaults: DepartmentDefaults,
}

/// Defaults applied to a newly onboarded department: which datasets start
/// public, and any seeded chart blocks.
#[derive(Debug, Deserialize, Clone)]
pub struct DepartmentDefaults {
    #[serde(default = "default_public")]
    pub complaints_public: bool,
    #[serde(default = "default_public")]
    pub uof_public: bool,
    #[serde(default = "default_public")]
    pub ois_public: bool,
    #[serde(default = "default_public")]
    pub assaults_public: bool,
    #[serde(default)]
    pub chart_blocks: Vec<ChartBlockConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartBlockConfig {
    pub title: String,
    pub dataset: String,
    pub slug: String,
}

fn default_public() -> bool {
    true
}

impl DepartmentDefaults {
    /// Built-in profile: every dataset public, no seeded content.
    pub fn standard() -> Self {
        Self {
            complaints_public: true,
            uof_public: true,
            ois_public: true,
            assaults_public: true,
            chart_blocks: Vec::new(),
        }
    }

    pub fn apply_to(&self, department: &mut Department) {
        Dataset::Complaints.set_public(department, self.complaints_public);
        Dataset::UseOfForce.set_public(department, self.uof_public);
        Dataset::OfficerInvolvedShootings.set_public(department, self.ois_public);
        Dataset::AssaultsOnOfficers.set_public(department, self.assaults_public);

        for block in &self.chart_blocks {
            department
                .chart_blocks
                .push(ChartBlock::new(&block.title, &block.dataset, &block.slug));
        }
    }
}

pub fn load_department_defaults() -> anyhow::Result<DepartmentDefaults> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/defaults"))
        .build()?;

    Ok(settings.try_deserialize::<DefaultsConfig>()?.defaults)
}
