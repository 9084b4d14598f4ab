//! Scorer — ties the factor calculators and the aggregator together and runs
//! them over batches with per-item failure isolation.
//!
//! Output order always matches input order. Ranking is the caller's job.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::ScoringError;
use crate::models::{CandidateProfile, JobListing};
use crate::scoring::aggregate::{aggregate_with, FactorScores, ScoreResult};
use crate::scoring::factors::{
    accommodations_match, hours_compatibility, location_similarity, qualifications_match,
    work_mode_compatibility,
};
use crate::scoring::similarity::{TextSimilarity, TfIdfCosine};
use crate::scoring::weights::{FactorWeights, DEFAULT_WEIGHTS};

// ────────────────────────────────────────────────────────────────────────────
// Outcome
// ────────────────────────────────────────────────────────────────────────────

/// Result of scoring one listing inside a batch.
/// Callers should exclude `Failed` items from ranking rather than retry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoreOutcome {
    Scored(ScoreResult),
    Failed {
        job_id: Option<Uuid>,
        reason: String,
    },
}

impl ScoreOutcome {
    pub fn is_scored(&self) -> bool {
        matches!(self, ScoreOutcome::Scored(_))
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        match self {
            ScoreOutcome::Scored(result) => Some(result),
            ScoreOutcome::Failed { .. } => None,
        }
    }

    pub fn job_id(&self) -> Option<Uuid> {
        match self {
            ScoreOutcome::Scored(result) => Some(result.job_id),
            ScoreOutcome::Failed { job_id, .. } => *job_id,
        }
    }

    fn failed(job_id: Option<Uuid>, error: &ScoringError) -> Self {
        warn!(?job_id, "Listing could not be scored: {error}");
        ScoreOutcome::Failed {
            job_id,
            reason: error.to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

/// Stateless compatibility scorer. Cheap to clone and safe to share across
/// threads; every call is independent.
#[derive(Clone)]
pub struct Scorer {
    similarity: Arc<dyn TextSimilarity>,
    weights: FactorWeights,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(Arc::new(TfIdfCosine))
    }
}

impl Scorer {
    pub fn new(similarity: Arc<dyn TextSimilarity>) -> Self {
        Self {
            similarity,
            weights: DEFAULT_WEIGHTS,
        }
    }

    /// Replaces the default factor weights. Present weights are still
    /// rescaled to sum to 1 per pair.
    pub fn with_weights(mut self, weights: FactorWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    /// Computes all five factors. Never fails: missing data degrades to defaults.
    pub fn score_factors(&self, candidate: &CandidateProfile, job: &JobListing) -> FactorScores {
        FactorScores {
            location: Some(location_similarity(
                candidate.location.as_deref(),
                job.location.as_deref(),
            )),
            hours: Some(hours_compatibility(
                candidate.hours_per_week,
                job.weekly_hours,
            )),
            work_mode: Some(work_mode_compatibility(
                &candidate.work_modes,
                job.work_mode.as_deref(),
            )),
            accommodations: Some(accommodations_match(
                &candidate.accommodations,
                &job.accommodations,
            )),
            qualifications: Some(qualifications_match(
                &candidate.educational_background,
                &job.qualifications,
                self.similarity.as_ref(),
            )),
        }
    }

    /// Validates both records, then scores the pair.
    pub fn score(
        &self,
        candidate: &CandidateProfile,
        job: &JobListing,
    ) -> Result<ScoreResult, ScoringError> {
        candidate.validate()?;
        job.validate()?;

        let factors = self.score_factors(candidate, job);
        Ok(ScoreResult {
            job_id: job.id,
            overall: aggregate_with(&factors, &self.weights),
            factors,
        })
    }

    /// One outcome per listing, in input order.
    pub fn score_batch(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobListing],
    ) -> Vec<ScoreOutcome> {
        let outcomes: Vec<ScoreOutcome> = jobs
            .iter()
            .map(|job| match self.score(candidate, job) {
                Ok(result) => ScoreOutcome::Scored(result),
                Err(e) => ScoreOutcome::failed(Some(job.id), &e),
            })
            .collect();

        log_summary(candidate.id, &outcomes);
        outcomes
    }

    /// Like `score_batch`, but each record is deserialized on its own so a
    /// record with the wrong shape only fails its own slot.
    pub fn score_raw_batch(
        &self,
        candidate: &CandidateProfile,
        jobs: &[serde_json::Value],
    ) -> Vec<ScoreOutcome> {
        let outcomes: Vec<ScoreOutcome> = jobs
            .iter()
            .map(|raw| {
                let job = match serde_json::from_value::<JobListing>(raw.clone()) {
                    Ok(job) => job,
                    Err(e) => {
                        return ScoreOutcome::failed(raw_job_id(raw), &ScoringError::from(e))
                    }
                };
                match self.score(candidate, &job) {
                    Ok(result) => ScoreOutcome::Scored(result),
                    Err(e) => ScoreOutcome::failed(Some(job.id), &e),
                }
            })
            .collect();

        log_summary(candidate.id, &outcomes);
        outcomes
    }
}

/// Best-effort id recovery from a record that failed to deserialize.
fn raw_job_id(raw: &serde_json::Value) -> Option<Uuid> {
    raw.get("id")
        .and_then(|v| v.as_str())
        .and_then(|s| Uuid::parse_str(s).ok())
}

fn log_summary(candidate_id: Uuid, outcomes: &[ScoreOutcome]) {
    let scored = outcomes.iter().filter(|o| o.is_scored()).count();
    info!(
        %candidate_id,
        total = outcomes.len(),
        scored,
        failed = outcomes.len() - scored,
        "Batch scored"
    );
}

// ────────────────────────────────────────────────────────────────────────────
// Free-function entry points (default TF-IDF backend)
// ────────────────────────────────────────────────────────────────────────────

pub fn score_factors(candidate: &CandidateProfile, job: &JobListing) -> FactorScores {
    Scorer::default().score_factors(candidate, job)
}

pub fn score_batch(candidate: &CandidateProfile, jobs: &[JobListing]) -> Vec<ScoreOutcome> {
    Scorer::default().score_batch(candidate, jobs)
}

pub fn score_raw_batch(
    candidate: &CandidateProfile,
    jobs: &[serde_json::Value],
) -> Vec<ScoreOutcome> {
    Scorer::default().score_raw_batch(candidate, jobs)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
