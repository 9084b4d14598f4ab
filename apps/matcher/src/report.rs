//! Matches report — the caller side of the engine.
//!
//! Loads a candidate plus raw job records, ranks the scored listings by
//! descending compatibility and keeps failures aside as unscored.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CandidateProfile, JobListing};
use crate::scoring::{Factor, FactorScores, ScoreOutcome};

// ────────────────────────────────────────────────────────────────────────────
// Input
// ────────────────────────────────────────────────────────────────────────────

/// Input file shape. Jobs stay raw so one bad record cannot sink the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInput {
    pub candidate: CandidateProfile,
    #[serde(default)]
    pub jobs: Vec<serde_json::Value>,
}

pub fn load_input(path: &Path) -> Result<MatchInput> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read match input '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Match input '{}' is not valid JSON", path.display()))
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// One factor as shown to users: whole-number percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorDisplay {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub job_id: Uuid,
    pub company_name: Option<String>,
    pub role_name: Option<String>,
    pub location: Option<String>,
    pub weekly_hours: Option<u32>,
    pub work_mode: Option<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub compatibility_score: f64,
    pub factors: FactorScores,
    pub display: Vec<FactorDisplay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnscoredJob {
    pub job_id: Option<Uuid>,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesReport {
    pub candidate_id: Uuid,
    pub matches: Vec<RankedMatch>,
    pub unscored: Vec<UnscoredJob>,
}

/// Factors in fixed order as percentages rounded half to even; absent
/// factors show 0.
pub fn display_factors(factors: &FactorScores) -> Vec<FactorDisplay> {
    Factor::ALL
        .iter()
        .map(|f| FactorDisplay {
            name: f.label().to_string(),
            score: factors
                .get(*f)
                .map(|s| (s * 100.0).round_ties_even() as u32)
                .unwrap_or(0),
        })
        .collect()
}

/// Pairs each outcome with the raw record at the same index (the batch scorer
/// preserves order), sorts matches by descending score and applies `limit`.
pub fn build_report(
    candidate_id: Uuid,
    jobs: &[serde_json::Value],
    outcomes: Vec<ScoreOutcome>,
    limit: Option<usize>,
) -> MatchesReport {
    let mut matches = Vec::new();
    let mut unscored = Vec::new();

    for (raw, outcome) in jobs.iter().zip(outcomes) {
        match outcome {
            ScoreOutcome::Scored(result) => {
                // Scored records have already deserialized once.
                let job = serde_json::from_value::<JobListing>(raw.clone()).ok();
                let job = job.as_ref();
                matches.push(RankedMatch {
                    job_id: result.job_id,
                    company_name: job.and_then(|j| j.company_name.clone()),
                    role_name: job.and_then(|j| j.role_name.clone()),
                    location: job.and_then(|j| j.location.clone()),
                    weekly_hours: job.and_then(|j| j.weekly_hours),
                    work_mode: job.and_then(|j| j.work_mode.clone()),
                    qualifications: job.map(|j| j.qualifications.clone()).unwrap_or_default(),
                    compatibility_score: result.overall,
                    display: display_factors(&result.factors),
                    factors: result.factors,
                })
            }
            ScoreOutcome::Failed { job_id, reason } => {
                unscored.push(UnscoredJob { job_id, reason })
            }
        }
    }

    // Stable sort: ties keep input order.
    matches.sort_by(|a, b| {
        b.compatibility_score
            .partial_cmp(&a.compatibility_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(limit) = limit {
        matches.truncate(limit);
    }

    MatchesReport {
        candidate_id,
        matches,
        unscored,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_raw_batch;
    use serde_json::json;
    use std::io::Write;

    fn candidate_json(id: Uuid) -> serde_json::Value {
        json!({
            "id": id,
            "location": "Portland, OR, USA",
            "hours_per_week": 25,
            "remote_preference": true,
            "accommodations": ["screen reader"],
            "educational_background": "Certificate in graphic design, Figma and Illustrator"
        })
    }

    #[test]
    fn test_display_factors_rounds_to_percent() {
        let factors = FactorScores {
            location: Some(0.666),
            hours: Some(0.5),
            work_mode: Some(0.2),
            accommodations: None,
            qualifications: Some(0.0),
        };
        let display = display_factors(&factors);
        let names: Vec<_> = display.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Location", "Hours", "Work Mode", "Accommodations", "Qualifications"]
        );
        let scores: Vec<_> = display.iter().map(|d| d.score).collect();
        assert_eq!(scores, vec![67, 50, 20, 0, 0]);
    }

    #[test]
    fn test_display_factors_rounds_half_to_even() {
        // One of eight needs covered: 12.5% shows as 12.
        let factors = FactorScores {
            accommodations: Some(0.125),
            hours: Some(0.375),
            ..Default::default()
        };
        let display = display_factors(&factors);
        assert_eq!(display[1].score, 38);
        assert_eq!(display[3].score, 12);
    }

    #[test]
    fn test_build_report_sorts_descending_and_separates_failures() {
        let candidate_id = Uuid::new_v4();
        let candidate: CandidateProfile =
            serde_json::from_value(candidate_json(candidate_id)).unwrap();

        let weak = Uuid::new_v4();
        let strong = Uuid::new_v4();
        let jobs = vec![
            json!({"id": weak, "company_name": "Mill Co", "location": "Dallas, TX, USA",
                   "weekly_hours": 40, "work_mode": "in-person"}),
            json!({"id": "not-a-uuid"}),
            json!({"id": strong, "company_name": "Studio", "role_name": "Designer",
                   "location": "Portland, OR, USA", "weekly_hours": 25, "work_mode": "remote",
                   "accommodations": ["Screen reader compatible tools"],
                   "qualifications": ["Figma", "Illustrator"]}),
        ];

        let outcomes = score_raw_batch(&candidate, &jobs);
        let report = build_report(candidate_id, &jobs, outcomes, None);

        assert_eq!(report.candidate_id, candidate_id);
        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.matches[0].job_id, strong);
        assert_eq!(report.matches[0].company_name.as_deref(), Some("Studio"));
        assert_eq!(report.matches[0].role_name.as_deref(), Some("Designer"));
        assert_eq!(report.matches[0].location.as_deref(), Some("Portland, OR, USA"));
        assert_eq!(report.matches[0].weekly_hours, Some(25));
        assert_eq!(report.matches[0].work_mode.as_deref(), Some("remote"));
        assert_eq!(report.matches[0].qualifications, vec!["Figma", "Illustrator"]);
        assert_eq!(report.matches[1].weekly_hours, Some(40));
        assert!(report.matches[1].qualifications.is_empty());
        assert_eq!(report.matches[1].job_id, weak);
        assert!(report.matches[0].compatibility_score > report.matches[1].compatibility_score);

        assert_eq!(report.unscored.len(), 1);
        assert!(report.unscored[0].job_id.is_none());
    }

    #[test]
    fn test_build_report_applies_limit() {
        let candidate_id = Uuid::new_v4();
        let candidate: CandidateProfile =
            serde_json::from_value(candidate_json(candidate_id)).unwrap();
        let jobs: Vec<_> = (0..5)
            .map(|_| json!({"id": Uuid::new_v4(), "location": "Portland, OR, USA"}))
            .collect();

        let outcomes = score_raw_batch(&candidate, &jobs);
        let report = build_report(candidate_id, &jobs, outcomes, Some(2));
        assert_eq!(report.matches.len(), 2);
    }

    #[test]
    fn test_load_input_reads_candidate_and_raw_jobs() {
        let candidate_id = Uuid::new_v4();
        let body = json!({
            "candidate": candidate_json(candidate_id),
            "jobs": [{"id": Uuid::new_v4()}, {"weekly_hours": "n/a"}]
        });

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{body}").unwrap();

        let input = load_input(file.path()).unwrap();
        assert_eq!(input.candidate.id, candidate_id);
        assert_eq!(input.jobs.len(), 2);
    }

    #[test]
    fn test_load_input_reports_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_input(file.path()).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_load_input_reports_missing_file() {
        let err = load_input(Path::new("/nonexistent/matches.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read match input"));
    }
}
