use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::config::Config;
use matcher::report::{build_report, load_input};
use matcher::scoring::Scorer;

fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the JSON report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    let input = load_input(&config.input_path)?;
    info!(
        candidate_id = %input.candidate.id,
        jobs = input.jobs.len(),
        "Loaded match input from {}",
        config.input_path.display()
    );

    let scorer = Scorer::default();
    let outcomes = scorer.score_raw_batch(&input.candidate, &input.jobs);
    let report = build_report(input.candidate.id, &input.jobs, outcomes, config.match_limit);

    info!(
        matches = report.matches.len(),
        unscored = report.unscored.len(),
        "Report ready"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
