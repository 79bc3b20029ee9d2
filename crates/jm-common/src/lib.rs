pub mod criteria;
pub mod logging;
pub mod matching;
pub mod parse;
pub mod remote;
pub mod skill_normalizer;

use serde::{Deserialize, Serialize};

// Commonly used data models for the matching functions. The surrounding
// application supplies candidate and job records as JSON; absent scalars
// arrive as nulls and absent lists as missing keys.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    /// Free text, e.g. "Jan 2020", "2020-03", "2019".
    #[serde(default)]
    pub start_date: String,
    /// Free text; "present"/"current" and empty mean still employed.
    #[serde(default)]
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub institution: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub summary: String,
    pub field: Option<String>,
    pub sub_field: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    /// Free-text bucket, e.g. "2-3 years".
    pub years_of_experience: Option<String>,
    /// Free text: a single number, a range "A-B", or open-ended "N+".
    pub expected_salary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    pub field: Option<String>,
    pub specialization: Option<String>,
    pub experience_level: Option<String>,
    pub salary: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub company_name: Option<String>,
}

/// Final scoring result for one (candidate, job) pair. All percentages
/// are clamped to 0-100 and the reasoning string is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job: JobPosting,
    pub percentage: u8,
    pub reasoning: String,
    pub skills_match: u8,
    pub experience_match: u8,
    pub education_match: u8,
    pub location_match: u8,
}
