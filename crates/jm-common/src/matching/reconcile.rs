use tracing::debug;

use super::{field::score_field, skills::score_skills};
use crate::criteria::MatchCriteria;
use crate::JobPosting;

/// Merge the remote and rule-based estimates into one percentage.
///
/// The rule score is the trust anchor: an unconstrained generative-text
/// score is noisy, so a large disagreement only resolves in the AI's
/// favor when the field and skills signals corroborate it. Tiers are
/// evaluated strictly in order:
///
/// 1. both scores >= 80 -> max of the two
/// 2. |diff| <= 10 -> max of the two
/// 3. |diff| > 20 -> max if field >= 80 and skills >= 70, otherwise
///    0.7*rule + 0.3*ai
/// 4. otherwise -> 0.6*rule + 0.4*ai
pub fn combine(ai: u8, rule: u8, criteria: &MatchCriteria, job: &JobPosting) -> u8 {
    let combined = if ai >= 80 && rule >= 80 {
        debug!(ai, rule, tier = "both_high", "reconciling estimates");
        ai.max(rule)
    } else {
        let diff = i16::from(ai).abs_diff(i16::from(rule));
        if diff <= 10 {
            debug!(ai, rule, diff, tier = "close", "reconciling estimates");
            ai.max(rule)
        } else if diff > 20 {
            let field = score_field(
                &criteria.field,
                &criteria.sub_field,
                job.field.as_deref().unwrap_or(""),
                job.specialization.as_deref().unwrap_or(""),
            );
            let skills = score_skills(&criteria.skills, &job.requirements);
            if field >= 80 && skills >= 70 {
                debug!(ai, rule, diff, field, skills, tier = "outlier_corroborated", "reconciling estimates");
                ai.max(rule)
            } else {
                debug!(ai, rule, diff, field, skills, tier = "outlier_distrusted", "reconciling estimates");
                (0.7 * f64::from(rule) + 0.3 * f64::from(ai)) as u8
            }
        } else {
            debug!(ai, rule, diff, tier = "default_blend", "reconciling estimates");
            (0.6 * f64::from(rule) + 0.4 * f64::from(ai)) as u8
        }
    };

    combined.min(100)
}
