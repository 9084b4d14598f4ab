use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ScoringError, MAX_WEEKLY_HOURS};
use crate::models::job::WorkMode;

/// Which working arrangements a candidate is open to.
/// The three flags are independent: a candidate may accept any combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkModePreferences {
    #[serde(default, rename = "remote_preference")]
    pub remote: bool,
    #[serde(default, rename = "hybrid_preference")]
    pub hybrid: bool,
    #[serde(default, rename = "in_person_preference")]
    pub in_person: bool,
}

impl WorkModePreferences {
    pub fn accepts(&self, mode: WorkMode) -> bool {
        match mode {
            WorkMode::Remote => self.remote,
            WorkMode::Hybrid => self.hybrid,
            WorkMode::InPerson => self.in_person,
        }
    }
}

/// A job seeker's profile as supplied by the surrounding application.
/// Every field except `id` may be missing on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub hours_per_week: Option<u32>,
    #[serde(flatten)]
    pub work_modes: WorkModePreferences,
    #[serde(default)]
    pub accommodations: Vec<String>,
    #[serde(default)]
    pub educational_background: String,
}

impl CandidateProfile {
    /// Rejects values no real profile can hold.
    pub fn validate(&self) -> Result<(), ScoringError> {
        match self.hours_per_week {
            Some(hours) if hours > MAX_WEEKLY_HOURS => Err(ScoringError::InvalidHours {
                record: "candidate",
                hours,
            }),
            _ => Ok(()),
        }
    }
}
