pub mod candidate;
pub mod job;

pub use candidate::{CandidateProfile, WorkModePreferences};
pub use job::{JobListing, WorkMode};
