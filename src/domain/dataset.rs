// Dataset categories and the static registry lookup table
use super::department::Department;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
    #[error("no backing model defined for {dataset} in department {short_name}")]
    UndefinedBackingModel {
        dataset: Dataset,
        short_name: String,
    },
}

/// The four incident categories a department can publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Complaints,
    UseOfForce,
    OfficerInvolvedShootings,
    AssaultsOnOfficers,
}

/// Registry entry for a dataset: the department visibility-flag suffix and
/// the name prefix of the per-department backing model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetLookup {
    /// The department exposes a flag field named `is_public_<var_suffix>`.
    pub var_suffix: &'static str,
    /// `<class_prefix><short_name>` names the backing model, e.g.
    /// `CitizenComplaintBPD`.
    pub class_prefix: &'static str,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [
        Dataset::Complaints,
        Dataset::UseOfForce,
        Dataset::OfficerInvolvedShootings,
        Dataset::AssaultsOnOfficers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dataset::Complaints => "complaints",
            Dataset::UseOfForce => "uof",
            Dataset::OfficerInvolvedShootings => "ois",
            Dataset::AssaultsOnOfficers => "assaults",
        }
    }

    /// Chart-block slugs for this category start with this prefix.
    pub fn slug_prefix(self) -> &'static str {
        self.name()
    }

    pub fn from_name(name: &str) -> Result<Self, DatasetError> {
        match name {
            "complaints" => Ok(Dataset::Complaints),
            "uof" => Ok(Dataset::UseOfForce),
            "ois" => Ok(Dataset::OfficerInvolvedShootings),
            "assaults" => Ok(Dataset::AssaultsOnOfficers),
            other => Err(DatasetError::UnknownDataset(other.to_string())),
        }
    }

    pub fn lookup(self) -> DatasetLookup {
        match self {
            Dataset::Complaints => DatasetLookup {
                var_suffix: "citizen_complaints",
                class_prefix: "CitizenComplaint",
            },
            Dataset::UseOfForce => DatasetLookup {
                var_suffix: "use_of_force_incidents",
                class_prefix: "UseOfForceIncident",
            },
            Dataset::OfficerInvolvedShootings => DatasetLookup {
                var_suffix: "officer_involved_shootings",
                class_prefix: "OfficerInvolvedShooting",
            },
            Dataset::AssaultsOnOfficers => DatasetLookup {
                var_suffix: "assaults_on_officers",
                class_prefix: "AssaultOnOfficer",
            },
        }
    }

    /// Typed accessor for the department's visibility flag, instead of a
    /// name-based attribute lookup.
    pub fn is_public(self, department: &Department) -> bool {
        match self {
            Dataset::Complaints => department.is_public_citizen_complaints,
            Dataset::UseOfForce => department.is_public_use_of_force_incidents,
            Dataset::OfficerInvolvedShootings => department.is_public_officer_involved_shootings,
            Dataset::AssaultsOnOfficers => department.is_public_assaults_on_officers,
        }
    }

    pub fn set_public(self, department: &mut Department, value: bool) {
        match self {
            Dataset::Complaints => department.is_public_citizen_complaints = value,
            Dataset::UseOfForce => department.is_public_use_of_force_incidents = value,
            Dataset::OfficerInvolvedShootings => {
                department.is_public_officer_involved_shootings = value
            }
            Dataset::AssaultsOnOfficers => department.is_public_assaults_on_officers = value,
        }
    }

    /// Name of the backing model for this dataset and department.
    pub fn model_name(self, short_name: &str) -> String {
        format!("{}{}", self.lookup().class_prefix, short_name)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a dataset name to its registry entry.
pub fn get_dataset_lookup(name: &str) -> Result<DatasetLookup, DatasetError> {
    Ok(Dataset::from_name(name)?.lookup())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Dataset::from_name("complaints"), Ok(Dataset::Complaints));
        assert_eq!(Dataset::from_name("uof"), Ok(Dataset::UseOfForce));
        assert_eq!(Dataset::from_name("ois"), Ok(Dataset::OfficerInvolvedShootings));
        assert_eq!(Dataset::from_name("assaults"), Ok(Dataset::AssaultsOnOfficers));
        assert_eq!(
            Dataset::from_name("traffic-stops"),
            Err(DatasetError::UnknownDataset("traffic-stops".to_string()))
        );
    }

    #[test]
    fn test_get_dataset_lookup() {
        let lookup = get_dataset_lookup("complaints").unwrap();
        assert_eq!(lookup.var_suffix, "citizen_complaints");
        assert_eq!(lookup.class_prefix, "CitizenComplaint");

        let lookup = get_dataset_lookup("uof").unwrap();
        assert_eq!(lookup.var_suffix, "use_of_force_incidents");
        assert_eq!(lookup.class_prefix, "UseOfForceIncident");

        let lookup = get_dataset_lookup("ois").unwrap();
        assert_eq!(lookup.var_suffix, "officer_involved_shootings");
        assert_eq!(lookup.class_prefix, "OfficerInvolvedShooting");

        let lookup = get_dataset_lookup("assaults").unwrap();
        assert_eq!(lookup.var_suffix, "assaults_on_officers");
        assert_eq!(lookup.class_prefix, "AssaultOnOfficer");

        assert!(matches!(
            get_dataset_lookup("bogus"),
            Err(DatasetError::UnknownDataset(_))
        ));
    }

    #[test]
    fn test_model_name() {
        assert_eq!(
            Dataset::Complaints.model_name("BPD"),
            "CitizenComplaintBPD"
        );
        assert_eq!(
            Dataset::AssaultsOnOfficers.model_name("SRPD"),
            "AssaultOnOfficerSRPD"
        );
    }

    #[test]
    fn test_public_flag_accessors() {
        let mut department = Department::create(1, "B Police Department", "BPD", true);
        for dataset in Dataset::ALL {
            assert!(dataset.is_public(&department));
        }

        Dataset::UseOfForce.set_public(&mut department, false);
        assert!(!department.is_public_use_of_force_incidents);
        assert!(!Dataset::UseOfForce.is_public(&department));
        assert!(Dataset::Complaints.is_public(&department));
    }
}
