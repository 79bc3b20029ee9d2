use chrono::Utc;

use super::{
    education::score_education, experience::score_experience, field::score_field,
    location::score_location, salary::score_salary, skills::score_skills,
    weights::{Weights, RULE_WEIGHTS},
};
use crate::{CandidateProfile, JobPosting};

/// The six independent sub-scores, each already clamped to 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubScores {
    pub field: u8,
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub location: u8,
    pub salary: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleScore {
    pub total: u8,
    pub breakdown: SubScores,
}

/// Deterministic, offline rule-based estimate for one candidate/job pair.
pub fn calculate_rule_score(candidate: &CandidateProfile, job: &JobPosting) -> RuleScore {
    let today = Utc::now().date_naive();

    let breakdown = SubScores {
        field: score_field(
            candidate.field.as_deref().unwrap_or(""),
            candidate.sub_field.as_deref().unwrap_or(""),
            job.field.as_deref().unwrap_or(""),
            job.specialization.as_deref().unwrap_or(""),
        ),
        skills: score_skills(&candidate.skills, &job.requirements),
        experience: score_experience(
            &candidate.work_experience,
            job.experience_level.as_deref().unwrap_or(""),
            today,
        ),
        education: score_education(&candidate.education, job.field.as_deref().unwrap_or("")),
        location: score_location(
            candidate.city.as_deref().unwrap_or(""),
            candidate.province.as_deref().unwrap_or(""),
            job.city.as_deref().unwrap_or(""),
            job.province.as_deref().unwrap_or(""),
        ),
        salary: score_salary(
            candidate.expected_salary.as_deref().unwrap_or(""),
            job.salary.as_deref().unwrap_or(""),
        ),
    };

    RuleScore {
        total: weighted_total(&breakdown, &RULE_WEIGHTS),
        breakdown,
    }
}

/// Weighted combination of sub-scores, truncated and clamped to 0-100.
pub fn weighted_total(scores: &SubScores, weights: &Weights) -> u8 {
    let total = f64::from(scores.field) * weights.field
        + f64::from(scores.skills) * weights.skills
        + f64::from(scores.experience) * weights.experience
        + f64::from(scores.education) * weights.education
        + f64::from(scores.location) * weights.location
        + f64::from(scores.salary) * weights.salary;

    total.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Education, WorkExperience};

    fn full_candidate() -> CandidateProfile {
        CandidateProfile {
            skills: vec!["Java".into(), "SQL".into()],
            work_experience: vec![WorkExperience {
                title: "Developer".into(),
                company: "Acme".into(),
                start_date: "Jan 2022".into(),
                end_date: "present".into(),
            }],
            education: vec![Education {
                degree: "BSc".into(),
                field_of_study: "Information Technology".into(),
                institution: "UJ".into(),
            }],
            field: Some("Information Technology".into()),
            sub_field: Some("Software Development".into()),
            province: Some("Gauteng".into()),
            city: Some("Johannesburg".into()),
            years_of_experience: Some("2-3 years".into()),
            expected_salary: Some("20000-30000".into()),
            ..CandidateProfile::default()
        }
    }

    fn full_job() -> JobPosting {
        JobPosting {
            title: "Software Developer".into(),
            requirements: "Java, Spring, SQL".into(),
            field: Some("Information Technology".into()),
            specialization: Some("Software Development".into()),
            experience_level: Some("mid".into()),
            salary: Some("25000-35000".into()),
            province: Some("Gauteng".into()),
            city: Some("Johannesburg".into()),
            ..JobPosting::default()
        }
    }

    #[test]
    fn strong_pair_scores_across_the_board() {
        let score = calculate_rule_score(&full_candidate(), &full_job());

        assert_eq!(score.breakdown.field, 90);
        assert_eq!(score.breakdown.skills, 85);
        assert_eq!(score.breakdown.location, 100);
        assert_eq!(score.breakdown.education, 90);
        assert_eq!(score.breakdown.salary, 90);
        assert!(score.total >= 80);
    }

    #[test]
    fn rule_estimate_is_deterministic() {
        let candidate = full_candidate();
        let job = full_job();
        assert_eq!(
            calculate_rule_score(&candidate, &job),
            calculate_rule_score(&candidate, &job)
        );
    }

    #[test]
    fn empty_records_stay_in_range_on_neutral_defaults() {
        let score = calculate_rule_score(&CandidateProfile::default(), &JobPosting::default());

        assert!(score.total <= 100);
        assert_eq!(score.breakdown.field, 50);
        assert_eq!(score.breakdown.skills, 20);
        assert_eq!(score.breakdown.experience, 70);
        assert_eq!(score.breakdown.education, 70);
        assert_eq!(score.breakdown.location, 80);
        assert_eq!(score.breakdown.salary, 85);
    }

    #[test]
    fn every_sub_score_is_a_valid_percentage() {
        let score = calculate_rule_score(&full_candidate(), &full_job());
        let b = score.breakdown;
        for value in [b.field, b.skills, b.experience, b.education, b.location, b.salary] {
            assert!(value <= 100);
        }
        assert!(score.total <= 100);
    }

    #[test]
    fn weighted_total_truncates_and_clamps() {
        let scores = SubScores {
            field: 100,
            skills: 100,
            experience: 100,
            education: 100,
            location: 100,
            salary: 100,
        };
        assert_eq!(weighted_total(&scores, &RULE_WEIGHTS), 100);

        let floor = SubScores {
            field: 0,
            skills: 0,
            experience: 0,
            education: 0,
            location: 0,
            salary: 0,
        };
        assert_eq!(weighted_total(&floor, &RULE_WEIGHTS), 0);
    }
}
