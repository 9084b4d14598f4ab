use serde::{Deserialize, Serialize};

/// One independent dimension of candidate/job compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Location,
    Hours,
    WorkMode,
    Accommodations,
    Qualifications,
}

impl Factor {
    /// Fixed display/iteration order.
    pub const ALL: [Factor; 5] = [
        Factor::Location,
        Factor::Hours,
        Factor::WorkMode,
        Factor::Accommodations,
        Factor::Qualifications,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Factor::Location => "Location",
            Factor::Hours => "Hours",
            Factor::WorkMode => "Work Mode",
            Factor::Accommodations => "Accommodations",
            Factor::Qualifications => "Qualifications",
        }
    }
}

/// Relative importance of each factor in the overall score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FactorWeights {
    pub location: f64,
    pub hours: f64,
    pub work_mode: f64,
    pub accommodations: f64,
    pub qualifications: f64,
}

/// Location and qualifications dominate; hours and accommodations are tie-breakers.
pub const DEFAULT_WEIGHTS: FactorWeights = FactorWeights {
    location: 0.30,
    hours: 0.10,
    work_mode: 0.20,
    accommodations: 0.10,
    qualifications: 0.30,
};

impl Default for FactorWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl FactorWeights {
    pub fn weight(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Location => self.location,
            Factor::Hours => self.hours,
            Factor::WorkMode => self.work_mode,
            Factor::Accommodations => self.accommodations,
            Factor::Qualifications => self.qualifications,
        }
    }

    pub fn sum(&self) -> f64 {
        Factor::ALL.iter().map(|f| self.weight(*f)).sum()
    }
}
