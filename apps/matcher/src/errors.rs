use thiserror::Error;

/// Maximum number of hours in a week. Anything above this on a record is a
/// data-shape defect, not a preference.
pub const MAX_WEEKLY_HOURS: u32 = 168;

/// Per-item scoring failure.
/// Surfaced to callers as a `ScoreOutcome::Failed` marker; never aborts a batch.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Malformed record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    #[error("Invalid {record} hours: {hours} exceeds 168 hours per week")]
    InvalidHours { record: &'static str, hours: u32 },
}

/// Text similarity could not be computed.
/// Always recovered to a 0.0 qualifications score by the factor calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimilarityError {
    #[error("Empty document: nothing to vectorize")]
    EmptyDocument,

    #[error("Empty vocabulary: no tokens survived tokenization")]
    EmptyVocabulary,
}
