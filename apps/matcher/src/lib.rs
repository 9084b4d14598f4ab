//! Candidate/job compatibility scoring.
//!
//! The surrounding application supplies a `CandidateProfile` and `JobListing`
//! records; this crate returns a normalized score per listing with a
//! per-factor breakdown. Storage, HTTP and ranking UI live elsewhere.

pub mod config;
pub mod errors;
pub mod models;
pub mod report;
pub mod scoring;
