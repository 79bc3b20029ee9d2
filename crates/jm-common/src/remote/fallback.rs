use crate::criteria::MatchCriteria;
use crate::matching::{
    education::score_education_text,
    experience::score_experience_years,
    field::score_field,
    location::score_location,
    salary::score_salary,
    scoring::{weighted_total, SubScores},
    skills::score_skills,
    weights::REMOTE_FALLBACK_WEIGHTS,
};
use crate::parse::period::parse_years_bucket;
use crate::JobPosting;

/// Local estimate substituted when the remote call yields no usable
/// signal. Computed from the criteria projection with the remote weight
/// set, so repeated failures produce identical scores for identical
/// input.
///
/// The criteria record carries the years-of-experience bucket text
/// rather than structured work history; an unparseable bucket is
/// neutral (70), matching the unknown-level default.
pub fn fallback_estimate(criteria: &MatchCriteria, job: &JobPosting) -> u8 {
    let experience_level = job.experience_level.as_deref().unwrap_or("");
    let experience = match parse_years_bucket(&criteria.years_of_experience) {
        Some(years) => score_experience_years(years, experience_level),
        None => 70,
    };

    let scores = SubScores {
        field: score_field(
            &criteria.field,
            &criteria.sub_field,
            job.field.as_deref().unwrap_or(""),
            job.specialization.as_deref().unwrap_or(""),
        ),
        skills: score_skills(&criteria.skills, &job.requirements),
        experience,
        education: score_education_text(
            &criteria.education_text,
            job.field.as_deref().unwrap_or(""),
        ),
        location: score_location(
            &criteria.city,
            &criteria.province,
            job.city.as_deref().unwrap_or(""),
            job.province.as_deref().unwrap_or(""),
        ),
        salary: score_salary(
            &criteria.expected_salary,
            job.salary.as_deref().unwrap_or(""),
        ),
    };

    weighted_total(&scores, &REMOTE_FALLBACK_WEIGHTS)
}
