use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::weights::{Factor, FactorWeights, DEFAULT_WEIGHTS};

/// Per-factor breakdown. `None` marks a factor that is structurally undefined
/// for this pair and must be left out of the aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub location: Option<f64>,
    pub hours: Option<f64>,
    pub work_mode: Option<f64>,
    pub accommodations: Option<f64>,
    pub qualifications: Option<f64>,
}

impl FactorScores {
    pub fn get(&self, factor: Factor) -> Option<f64> {
        match factor {
            Factor::Location => self.location,
            Factor::Hours => self.hours,
            Factor::WorkMode => self.work_mode,
            Factor::Accommodations => self.accommodations,
            Factor::Qualifications => self.qualifications,
        }
    }

    /// Present factors only, in `Factor::ALL` order.
    pub fn present(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL
            .into_iter()
            .filter_map(|f| self.get(f).map(|score| (f, score)))
    }
}

/// Overall compatibility of one candidate/job pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub job_id: Uuid,
    pub overall: f64,
    pub factors: FactorScores,
}

/// Weighted average over the present factors using the default weights.
pub fn aggregate(factors: &FactorScores) -> f64 {
    aggregate_with(factors, &DEFAULT_WEIGHTS)
}

/// Weights of the present factors are rescaled to sum to 1, so a missing
/// factor never lowers the achievable maximum. Zero total weight yields 0.0.
/// Non-finite factor scores are treated as absent.
pub fn aggregate_with(factors: &FactorScores, weights: &FactorWeights) -> f64 {
    let (weighted_sum, total_weight) = factors
        .present()
        .filter(|(_, score)| score.is_finite())
        .fold((0.0_f64, 0.0_f64), |(sum, total), (factor, score)| {
            let w = weights.weight(factor);
            (sum + w * score, total + w)
        });

    if total_weight > 0.0 && weighted_sum.is_finite() {
        (weighted_sum / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
