//! Credit Sentry - Bad-debt prediction engine
//!
//! Loads the trained model artifact once at startup, reads one applicant
//! record as JSON (file path argument, or stdin when no argument is given),
//! and prints the decision and credit-score band.

use std::io::Read;

use credit_sentry::utils::constants::{APP_NAME, APP_VERSION, ENV_ARTIFACT_PATH};
use credit_sentry::{ApplicantRecord, AppError, EvaluatorConfig, ModelArtifact, RiskEvaluator};

use eyre::Result;
use tracing::{debug, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    println!("🏦 {} v{} - Credit Risk Evaluation", APP_NAME, APP_VERSION);

    if std::env::var(ENV_ARTIFACT_PATH).is_err() {
        eprintln!("⚠️  {} not set, using default artifact path", ENV_ARTIFACT_PATH);
    }

    // Load configuration and the model artifact (one-time, fatal on failure)
    let config = EvaluatorConfig::default();
    let artifact = ModelArtifact::load(&config.artifact_path)?;
    let evaluator = RiskEvaluator::new(artifact, config)?;

    // Read the applicant record: file argument or stdin
    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| AppError::record_parse(format!("Cannot read record {}: {}", path, e)))?,
        None => {
            info!("Reading applicant record from stdin...");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let record: ApplicantRecord = serde_json::from_str(&raw)
        .map_err(|e| AppError::record_parse(format!("Invalid applicant record: {}", e)))?;
    record.validate()?;

    let result = evaluator.evaluate(&record)?;
    debug!("probability_bad = {:.6}", result.probability_bad);

    println!("{}", result.summary());

    Ok(())
}
