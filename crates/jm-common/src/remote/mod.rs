pub mod fallback;
pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

use crate::criteria::MatchCriteria;
use crate::JobPosting;

pub use fallback::fallback_estimate;
pub use gemini::GeminiEstimator;

/// Where an estimate ultimately came from. Recorded for logging and
/// diagnostics; callers treat both sources identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct RemoteEstimate {
    pub percentage: u8,
    pub source: EstimateSource,
}

/// Failure taxonomy for the remote-call wrapper. Never crosses the
/// estimator boundary: every variant resolves to the local fallback.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote estimator disabled by configuration")]
    Disabled,
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },
    #[error("model returned empty content")]
    EmptyResponse,
    #[error("no integer found in model response")]
    NoInteger,
    #[error("model score {0} outside 0-100")]
    OutOfRange(i64),
}

/// The seam the ranking pipeline consumes. Implementations must always
/// yield a usable estimate; transport and parse failures are absorbed by
/// the implementation's local fallback rather than surfaced.
#[async_trait]
pub trait RemoteEstimator: Send + Sync {
    /// Implementation name ("gemini") for log records.
    fn name(&self) -> &'static str;

    async fn estimate(&self, criteria: &MatchCriteria, job: &JobPosting) -> RemoteEstimate;
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub enabled: bool,
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        let model = "gemini-1.5-flash".to_string();
        Self {
            enabled: true,
            api_key: String::new(),
            endpoint: default_endpoint(&model),
            model,
            timeout_secs: 30,
            temperature: 0.1,
            max_output_tokens: 16,
        }
    }
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        fn parse_bool(key: &str, default: bool) -> bool {
            match std::env::var(key) {
                Ok(val) => matches!(val.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
                Err(_) => default,
            }
        }

        fn parse_u64(key: &str, default: u64) -> u64 {
            std::env::var(key)
                .ok()
                .and_then(|raw| raw.parse::<u64>().ok())
                .unwrap_or(default)
        }

        fn parse_u32(key: &str, default: u32) -> u32 {
            std::env::var(key)
                .ok()
                .and_then(|raw| raw.parse::<u32>().ok())
                .unwrap_or(default)
        }

        fn parse_f32(key: &str, default: f32) -> f32 {
            std::env::var(key)
                .ok()
                .and_then(|raw| raw.parse::<f32>().ok())
                .unwrap_or(default)
        }

        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());

        Self {
            enabled: parse_bool("GEMINI_ENABLED", true),
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            endpoint: std::env::var("GEMINI_ENDPOINT").unwrap_or_else(|_| default_endpoint(&model)),
            model,
            timeout_secs: parse_u64("GEMINI_TIMEOUT_SECONDS", 30),
            temperature: parse_f32("GEMINI_TEMPERATURE", 0.1),
            max_output_tokens: parse_u32("GEMINI_MAX_OUTPUT_TOKENS", 16),
        }
    }
}

fn default_endpoint(model: &str) -> String {
    format!("https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent")
}
