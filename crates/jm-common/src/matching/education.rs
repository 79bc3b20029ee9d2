use crate::Education;

/// Education sub-score: 90 when any entry's field of study overlaps the
/// job's field, 60 when the candidate studied something else, 50 with no
/// education history, 70 when the job does not state a field.
pub fn score_education(education: &[Education], job_field: &str) -> u8 {
    let field = job_field.trim().to_lowercase();
    if field.is_empty() {
        return 70;
    }
    if education.is_empty() {
        return 50;
    }

    let hit = education.iter().any(|entry| {
        let study = entry.field_of_study.trim().to_lowercase();
        !study.is_empty() && (study.contains(&field) || field.contains(&study))
    });

    if hit {
        90
    } else {
        60
    }
}

/// Text-only variant used by the remote estimator's local fallback,
/// which sees the criteria projection rather than structured entries.
pub fn score_education_text(education_text: &str, job_field: &str) -> u8 {
    let field = job_field.trim().to_lowercase();
    if field.is_empty() {
        return 70;
    }
    let text = education_text.trim().to_lowercase();
    if text.is_empty() {
        return 50;
    }
    if text.contains(&field) {
        90
    } else {
        60
    }
}
