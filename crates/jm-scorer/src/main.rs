use clap::Parser;
use dotenvy::dotenv;
use jm_common::logging;
use jm_common::matching::pipeline::MatchingEngine;
use jm_common::remote::{GeminiConfig, GeminiEstimator, RemoteEstimator};
use jm_common::{CandidateProfile, JobPosting};
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "jm-scorer",
    about = "Score and rank job postings for a candidate profile"
)]
struct Cli {
    /// Path to the candidate profile JSON file
    #[arg(long)]
    candidate: std::path::PathBuf,

    /// Path to the job postings JSON array file
    #[arg(long)]
    jobs: std::path::PathBuf,

    /// Print only the top N matches (default: all)
    #[arg(long)]
    top: Option<usize>,

    /// Skip the remote estimator even when GEMINI_API_KEY is configured
    #[arg(long, default_value_t = false)]
    offline: bool,
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init("jm-scorer");

    let args = Cli::parse();

    let candidate: CandidateProfile =
        serde_json::from_str(&std::fs::read_to_string(&args.candidate)?)?;
    let jobs: Vec<JobPosting> = serde_json::from_str(&std::fs::read_to_string(&args.jobs)?)?;

    let config = GeminiConfig::from_env();
    let estimator = if args.offline || !config.enabled || config.api_key.is_empty() {
        None
    } else {
        Some(GeminiEstimator::new(config))
    };

    info!(
        jobs = jobs.len(),
        remote = estimator.is_some(),
        "scoring candidate against job postings"
    );

    let engine = MatchingEngine::new();
    let mut matches = engine
        .rank_jobs(
            &candidate,
            &jobs,
            estimator.as_ref().map(|e| e as &dyn RemoteEstimator),
        )
        .await;

    if let Some(top) = args.top {
        matches.truncate(top);
    }

    for job_match in &matches {
        println!("{}", serde_json::to_string(job_match)?);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("jm-scorer failed: {err}");
        std::process::exit(1);
    }
}
