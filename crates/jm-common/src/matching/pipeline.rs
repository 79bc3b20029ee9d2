use std::cmp::Ordering;

use tracing::debug;

use super::{reasoning::generate_reasoning, reconcile::combine, scoring::calculate_rule_score};
use crate::criteria::{extract, MatchCriteria};
use crate::remote::RemoteEstimator;
use crate::{CandidateProfile, JobMatch, JobPosting};

/// Stateless scoring pipeline: criteria extraction, both estimators,
/// reconciliation and reasoning. One instance can score any number of
/// candidate/job pairs; no state is shared between invocations.
#[derive(Debug, Default)]
pub struct MatchingEngine;

impl MatchingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score one job for a candidate. When no remote estimator is
    /// supplied the rule-based score stands alone.
    pub async fn score_job(
        &self,
        candidate: &CandidateProfile,
        job: &JobPosting,
        remote: Option<&dyn RemoteEstimator>,
    ) -> JobMatch {
        let criteria = extract(candidate);
        self.score_with_criteria(candidate, &criteria, job, remote)
            .await
    }

    /// Score every job for one candidate and return the results sorted
    /// by descending percentage (input order preserved on ties).
    pub async fn rank_jobs(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobPosting],
        remote: Option<&dyn RemoteEstimator>,
    ) -> Vec<JobMatch> {
        let criteria = extract(candidate);

        let mut matches = Vec::with_capacity(jobs.len());
        for job in jobs {
            matches.push(
                self.score_with_criteria(candidate, &criteria, job, remote)
                    .await,
            );
        }

        matches.sort_by(|a, b| match b.percentage.cmp(&a.percentage) {
            Ordering::Equal => Ordering::Equal,
            other => other,
        });

        matches
    }

    async fn score_with_criteria(
        &self,
        candidate: &CandidateProfile,
        criteria: &MatchCriteria,
        job: &JobPosting,
        remote: Option<&dyn RemoteEstimator>,
    ) -> JobMatch {
        let rule = calculate_rule_score(candidate, job);

        let percentage = match remote {
            Some(estimator) => {
                let estimate = estimator.estimate(criteria, job).await;
                debug!(
                    estimator = estimator.name(),
                    remote = estimate.percentage,
                    rule = rule.total,
                    source = ?estimate.source,
                    job_title = %job.title,
                    "combining estimates"
                );
                combine(estimate.percentage, rule.total, criteria, job)
            }
            None => rule.total,
        };

        let reasoning = generate_reasoning(
            percentage,
            &criteria.field,
            job.field.as_deref().unwrap_or(""),
        );

        JobMatch {
            job: job.clone(),
            percentage,
            reasoning,
            skills_match: rule.breakdown.skills,
            experience_match: rule.breakdown.experience,
            education_match: rule.breakdown.education,
            location_match: rule.breakdown.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{
        EstimateSource, GeminiConfig, GeminiEstimator, RemoteEstimate,
    };
    use crate::{Education, WorkExperience};
    use async_trait::async_trait;

    struct FixedEstimator(u8);

    #[async_trait]
    impl RemoteEstimator for FixedEstimator {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn estimate(&self, _criteria: &MatchCriteria, _job: &JobPosting) -> RemoteEstimate {
            RemoteEstimate {
                percentage: self.0,
                source: EstimateSource::Remote,
            }
        }
    }

    fn base_candidate() -> CandidateProfile {
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

    fn base_job() -> JobPosting {
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

    fn weak_job() -> JobPosting {
        JobPosting {
            title: "Theatre Nurse".into(),
            requirements: "Nursing registration, theatre experience".into(),
            field: Some("Healthcare".into()),
            experience_level: Some("senior".into()),
            province: Some("Western Cape".into()),
            city: Some("Cape Town".into()),
            ..JobPosting::default()
        }
    }

    #[tokio::test]
    async fn end_to_end_strong_pair_scores_at_least_eighty() {
        let engine = MatchingEngine::new();
        // Disabled remote estimator exercises the deterministic fallback.
        let gemini = GeminiEstimator::new(GeminiConfig {
            enabled: false,
            ..GeminiConfig::default()
        });

        let result = engine
            .score_job(&base_candidate(), &base_job(), Some(&gemini))
            .await;

        assert!(result.percentage >= 80, "got {}", result.percentage);
        assert!(
            result.reasoning.starts_with("Excellent match")
                || result.reasoning.starts_with("Strong match"),
            "got {}",
            result.reasoning
        );
        assert_eq!(result.skills_match, 85);
        assert_eq!(result.location_match, 100);
    }

    #[tokio::test]
    async fn results_come_back_sorted_by_percentage() {
        let engine = MatchingEngine::new();
        let jobs = vec![weak_job(), base_job()];

        let ranked = engine.rank_jobs(&base_candidate(), &jobs, None).await;

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].job.title, "Software Developer");
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].percentage >= pair[1].percentage));
    }

    #[tokio::test]
    async fn without_remote_estimator_the_rule_score_stands() {
        let engine = MatchingEngine::new();
        let rule = calculate_rule_score(&base_candidate(), &base_job());

        let result = engine.score_job(&base_candidate(), &base_job(), None).await;

        assert_eq!(result.percentage, rule.total);
    }

    #[tokio::test]
    async fn remote_estimate_is_reconciled_not_trusted_blindly() {
        let engine = MatchingEngine::new();
        // A wildly optimistic remote score for a weak pairing gets pulled
        // back toward the rule score.
        let optimistic = FixedEstimator(95);

        let result = engine
            .score_job(&base_candidate(), &weak_job(), Some(&optimistic))
            .await;

        assert!(result.percentage < 95, "got {}", result.percentage);
    }

    #[tokio::test]
    async fn sub_scores_and_percentage_stay_in_range() {
        let engine = MatchingEngine::new();
        let pairs = [
            (CandidateProfile::default(), JobPosting::default()),
            (base_candidate(), weak_job()),
            (base_candidate(), base_job()),
        ];

        for (candidate, job) in pairs {
            let result = engine
                .score_job(&candidate, &job, Some(&FixedEstimator(100)))
                .await;
            assert!(result.percentage <= 100);
            for sub in [
                result.skills_match,
                result.experience_match,
                result.education_match,
                result.location_match,
            ] {
                assert!(sub <= 100);
            }
            assert!(!result.reasoning.is_empty());
        }
    }
}
