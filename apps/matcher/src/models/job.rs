use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ScoringError, MAX_WEEKLY_HOURS};

/// The job's operating arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkMode {
    Remote,
    Hybrid,
    InPerson,
}

impl WorkMode {
    /// Exact, case-sensitive match against "remote", "hybrid" and "in-person".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "remote" => Some(WorkMode::Remote),
            "hybrid" => Some(WorkMode::Hybrid),
            "in-person" => Some(WorkMode::InPerson),
            _ => None,
        }
    }
}

/// A job listing as supplied by the ingestion side.
/// `company_name` and `role_name` are display metadata and do not affect scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub id: Uuid,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub weekly_hours: Option<u32>,
    /// Kept as free text: unknown modes are still "present" and score as a mismatch.
    #[serde(default)]
    pub work_mode: Option<String>,
    #[serde(default)]
    pub accommodations: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
}

impl JobListing {
    pub fn validate(&self) -> Result<(), ScoringError> {
        match self.weekly_hours {
            Some(hours) if hours > MAX_WEEKLY_HOURS => Err(ScoringError::InvalidHours {
                record: "job",
                hours,
            }),
            _ => Ok(()),
        }
    }
}
