use serde::{Deserialize, Serialize};
use std::fmt;

/// Which relay endpoint a model reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Skin,
    Symptom,
}

/// Skin-condition severity. Symptom triage does not grade severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Care setting used as the map search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityType {
    #[serde(rename = "Primary Care Clinic")]
    PrimaryCareClinic,
    #[serde(rename = "Doctor's Office")]
    DoctorsOffice,
    #[serde(rename = "Emergency Room")]
    EmergencyRoom,
    #[serde(rename = "Dermatologist")]
    Dermatologist,
}

impl FacilityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityType::PrimaryCareClinic => "Primary Care Clinic",
            FacilityType::DoctorsOffice => "Doctor's Office",
            FacilityType::EmergencyRoom => "Emergency Room",
            FacilityType::Dermatologist => "Dermatologist",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label derived from a model reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Present for [`Domain::Skin`] only.
    pub severity: Option<Severity>,
    pub facility: FacilityType,
}
