use crate::{CandidateProfile, Education, WorkExperience};

/// Normalized projection of a candidate profile used as estimator input.
///
/// Created per match request and discarded afterwards. Absent profile
/// fields become empty strings/lists; field order is fixed so prompt text
/// and fallback computations are deterministic for identical input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchCriteria {
    pub skills: Vec<String>,
    pub experience_text: String,
    pub education_text: String,
    pub field: String,
    pub sub_field: String,
    pub years_of_experience: String,
    pub expected_salary: String,
    pub province: String,
    pub city: String,
}

pub fn extract(candidate: &CandidateProfile) -> MatchCriteria {
    MatchCriteria {
        skills: candidate
            .skills
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        experience_text: render_experience(&candidate.work_experience),
        education_text: render_education(&candidate.education),
        field: opt_text(&candidate.field),
        sub_field: opt_text(&candidate.sub_field),
        years_of_experience: opt_text(&candidate.years_of_experience),
        expected_salary: opt_text(&candidate.expected_salary),
        province: opt_text(&candidate.province),
        city: opt_text(&candidate.city),
    }
}

fn opt_text(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").trim().to_string()
}

fn render_experience(entries: &[WorkExperience]) -> String {
    let rendered: Vec<String> = entries
        .iter()
        .map(|entry| {
            let title = non_empty(&entry.title, "Unspecified role");
            let company = non_empty(&entry.company, "unspecified employer");
            let start = non_empty(&entry.start_date, "?");
            let end = non_empty(&entry.end_date, "present");
            format!("{title} at {company} ({start} - {end})")
        })
        .collect();
    rendered.join("; ")
}

fn render_education(entries: &[Education]) -> String {
    let rendered: Vec<String> = entries
        .iter()
        .map(|entry| {
            let degree = non_empty(&entry.degree, "Qualification");
            let institution = non_empty(&entry.institution, "unspecified institution");
            let study = entry.field_of_study.trim();
            if study.is_empty() {
                format!("{degree}, {institution}")
            } else {
                format!("{degree} in {study}, {institution}")
            }
        })
        .collect();
    rendered.join("; ")
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
