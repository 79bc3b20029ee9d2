use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    fallback::fallback_estimate, EstimateSource, GeminiConfig, RemoteEstimate, RemoteError,
    RemoteEstimator,
};
use crate::criteria::MatchCriteria;
use crate::JobPosting;

/// Remote estimator backed by the Gemini generateContent endpoint.
///
/// One HTTPS call per job, single attempt, bounded timeout, near-zero
/// sampling temperature. Any transport failure, non-2xx status, empty
/// body or unusable score is absorbed by the local fallback at the
/// `estimate` call site; the caller always receives an in-range value.
pub struct GeminiEstimator {
    client: Client,
    config: GeminiConfig,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<ResponseCandidate>>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiEstimator {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()
                .expect("failed to build HTTP client"),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    /// Single-attempt remote score. The explicit Result keeps the
    /// recovery path visible: the fallback substitution happens in
    /// `estimate`, not behind a swallowed exception.
    pub async fn score(&self, criteria: &MatchCriteria, job: &JobPosting) -> Result<u8, RemoteError> {
        if !self.config.enabled || self.config.api_key.is_empty() {
            return Err(RemoteError::Disabled);
        }

        let prompt = build_match_prompt(criteria, job);
        let text = self.generate(&prompt).await?;
        parse_first_integer(&text)
    }

    async fn generate(&self, prompt: &str) -> Result<String, RemoteError> {
        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;
        let text = body
            .candidates
            .and_then(|mut candidates| {
                if candidates.is_empty() {
                    None
                } else {
                    candidates.swap_remove(0).content
                }
            })
            .and_then(|content| content.parts)
            .and_then(|parts| {
                parts
                    .into_iter()
                    .find_map(|part| part.text.filter(|t| !t.trim().is_empty()))
            })
            .ok_or(RemoteError::EmptyResponse)?;

        debug!(model = %self.config.model, response = %text.trim(), "gemini call succeeded");
        Ok(text)
    }
}

#[async_trait]
impl RemoteEstimator for GeminiEstimator {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn estimate(&self, criteria: &MatchCriteria, job: &JobPosting) -> RemoteEstimate {
        match self.score(criteria, job).await {
            Ok(percentage) => RemoteEstimate {
                percentage,
                source: EstimateSource::Remote,
            },
            Err(err) => {
                warn!(
                    error = %err,
                    job_title = %job.title,
                    "remote estimate unavailable; using local fallback"
                );
                RemoteEstimate {
                    percentage: fallback_estimate(criteria, job),
                    source: EstimateSource::Fallback,
                }
            }
        }
    }
}

/// Structured natural-language prompt embedding every candidate and job
/// field in a fixed order, the weight guidance, and the scoring bands.
pub fn build_match_prompt(criteria: &MatchCriteria, job: &JobPosting) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are scoring how well a candidate matches a job posting. \
         Reply with a single integer between 0 and 100 and nothing else.\n\n",
    );

    prompt.push_str("Candidate:\n");
    push_line(&mut prompt, "Field", &criteria.field);
    push_line(&mut prompt, "Sub-field", &criteria.sub_field);
    push_line(&mut prompt, "Skills", &criteria.skills.join(", "));
    push_line(&mut prompt, "Experience", &criteria.experience_text);
    push_line(&mut prompt, "Years of experience", &criteria.years_of_experience);
    push_line(&mut prompt, "Education", &criteria.education_text);
    push_line(&mut prompt, "Expected salary", &criteria.expected_salary);
    push_line(&mut prompt, "Province", &criteria.province);
    push_line(&mut prompt, "City", &criteria.city);

    prompt.push_str("\nJob posting:\n");
    push_line(&mut prompt, "Title", &job.title);
    push_line(&mut prompt, "Field", job.field.as_deref().unwrap_or(""));
    push_line(
        &mut prompt,
        "Specialization",
        job.specialization.as_deref().unwrap_or(""),
    );
    push_line(&mut prompt, "Description", &job.description);
    push_line(&mut prompt, "Requirements", &job.requirements);
    push_line(
        &mut prompt,
        "Experience level",
        job.experience_level.as_deref().unwrap_or(""),
    );
    push_line(&mut prompt, "Salary", job.salary.as_deref().unwrap_or(""));
    push_line(&mut prompt, "Province", job.province.as_deref().unwrap_or(""));
    push_line(&mut prompt, "City", job.city.as_deref().unwrap_or(""));

    prompt.push_str(
        "\nWeigh the factors as: field/specialization 30%, skills 25%, \
         experience 20%, location 15%, education 5%, salary 5%.\n",
    );
    prompt.push_str(
        "Scoring bands: 90-100 perfect match, 80-89 excellent, 70-79 good, \
         60-69 fair, 50-59 weak, 0-49 very poor.\n",
    );

    prompt
}

fn push_line(prompt: &mut String, label: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        prompt.push_str(&format!("- {label}: not specified\n"));
    } else {
        prompt.push_str(&format!("- {label}: {value}\n"));
    }
}

/// First integer token in the raw model output, validated to 0-100.
pub fn parse_first_integer(text: &str) -> Result<u8, RemoteError> {
    let mut digits = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if !digits.is_empty() {
            break;
        }
    }

    if digits.is_empty() {
        return Err(RemoteError::NoInteger);
    }

    let value: i64 = digits.parse().map_err(|_| RemoteError::NoInteger)?;
    if !(0..=100).contains(&value) {
        return Err(RemoteError::OutOfRange(value));
    }

    Ok(value as u8)
}
