//! Factor calculators — one pure function per compatibility dimension.
//!
//! Every calculator returns a value in [0, 1]. Missing data yields the neutral
//! score (0.5) for location, hours and work mode; qualifications fall back to
//! 0.0 when text similarity cannot be computed.

use tracing::debug;

use crate::models::{WorkMode, WorkModePreferences};
use crate::scoring::similarity::TextSimilarity;

/// "No evidence either way."
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Mismatched work mode: discouraged, not disqualifying.
pub const WORK_MODE_MISMATCH_SCORE: f64 = 0.2;

/// Hour gap at which hours compatibility reaches zero.
const HOURS_TOLERANCE: f64 = 10.0;

/// Positional fragment match over `"<city>, <state>, <country>"` strings.
///
/// score = positional exact matches / max(fragment counts)
pub fn location_similarity(candidate: Option<&str>, job: Option<&str>) -> f64 {
    let (candidate, job) = match (candidate, job) {
        (Some(c), Some(j)) if !c.is_empty() && !j.is_empty() => (c, j),
        _ => return NEUTRAL_SCORE,
    };

    let candidate = candidate.to_lowercase();
    let job = job.to_lowercase();
    let candidate_parts: Vec<&str> = candidate.split(", ").collect();
    let job_parts: Vec<&str> = job.split(", ").collect();

    let matches = candidate_parts
        .iter()
        .zip(&job_parts)
        .filter(|(c, j)| c == j)
        .count();

    matches as f64 / candidate_parts.len().max(job_parts.len()) as f64
}

/// Linear decay over the hour gap; a gap of 10 or more scores zero.
/// Zero hours on either side counts as missing.
pub fn hours_compatibility(candidate: Option<u32>, job: Option<u32>) -> f64 {
    match (candidate, job) {
        (Some(c), Some(j)) if c > 0 && j > 0 => {
            let difference = c.abs_diff(j) as f64;
            (1.0 - difference / HOURS_TOLERANCE).max(0.0)
        }
        _ => NEUTRAL_SCORE,
    }
}

pub fn work_mode_compatibility(prefs: &WorkModePreferences, job_mode: Option<&str>) -> f64 {
    let job_mode = match job_mode {
        Some(m) if !m.is_empty() => m,
        _ => return NEUTRAL_SCORE,
    };

    match WorkMode::parse(job_mode) {
        Some(mode) if prefs.accepts(mode) => 1.0,
        _ => WORK_MODE_MISMATCH_SCORE,
    }
}

/// Fraction of the candidate's needs found as a substring of any offered
/// accommodation, case-insensitively ("wheelchair" matches
/// "Wheelchair accessible office").
pub fn accommodations_match(needs: &[String], offered: &[String]) -> f64 {
    if needs.is_empty() {
        return 1.0;
    }

    let offered: Vec<String> = offered.iter().map(|o| o.to_lowercase()).collect();
    let matched = needs
        .iter()
        .map(|n| n.to_lowercase())
        .filter(|need| offered.iter().any(|o| o.contains(need.as_str())))
        .count();

    matched as f64 / needs.len() as f64
}

/// Lexical similarity between the candidate's background and the job's
/// qualifications (joined with a space). Falls back to 0.0 when similarity
/// cannot be computed.
pub fn qualifications_match(
    background: &str,
    qualifications: &[String],
    similarity: &dyn TextSimilarity,
) -> f64 {
    let candidate_text = background.to_lowercase();
    let job_text = qualifications.join(" ").to_lowercase();

    match similarity.similarity(&candidate_text, &job_text) {
        Ok(score) if score.is_finite() => score.clamp(0.0, 1.0),
        Ok(score) => {
            debug!(
                backend = similarity.backend(),
                "Qualifications similarity was {score}, scoring 0.0"
            );
            0.0
        }
        Err(e) => {
            debug!(
                backend = similarity.backend(),
                "Qualifications similarity unavailable, scoring 0.0: {e}"
            );
            0.0
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
