use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime configuration for the `matcher` binary, loaded from environment
/// variables (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    /// Maximum number of ranked matches to report. `None` reports all.
    pub match_limit: Option<usize>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            input_path: PathBuf::from(require_env("MATCH_INPUT_PATH")?),
            match_limit: optional_env("MATCH_LIMIT")
                .map(|v| {
                    v.parse::<usize>()
                        .context("MATCH_LIMIT must be a non-negative integer")
                })
                .transpose()?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_names_missing_variable() {
        let err = require_env("MATCHER_TEST_DEFINITELY_UNSET").unwrap_err();
        assert!(err.to_string().contains("MATCHER_TEST_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_optional_env_treats_unset_as_none() {
        assert!(optional_env("MATCHER_TEST_ALSO_UNSET").is_none());
    }
}
