// Compatibility scoring engine.
// Factor calculators → aggregator → batch scorer. Pure and synchronous; no I/O.

pub mod aggregate;
pub mod batch;
pub mod factors;
pub mod similarity;
pub mod weights;

pub use aggregate::{aggregate, aggregate_with, FactorScores, ScoreResult};
pub use batch::{score_batch, score_factors, score_raw_batch, ScoreOutcome, Scorer};
pub use similarity::{TextSimilarity, TfIdfCosine};
pub use weights::{Factor, FactorWeights, DEFAULT_WEIGHTS};
