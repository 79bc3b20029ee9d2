use crate::skill_normalizer::aliases_for;

/// Skills sub-score against the job's free-text requirements.
///
/// Each candidate skill earns full credit for an exact (case-folded)
/// substring hit in the requirements, or half credit when a sibling
/// spelling from the synonym table appears instead. The combined ratio
/// is bucketed into discrete tiers. An empty skill list scores 20; an
/// empty requirements text scores 40.
pub fn score_skills(skills: &[String], requirements: &str) -> u8 {
    let skills: Vec<&str> = skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if skills.is_empty() {
        return 20;
    }

    let requirements = requirements.trim().to_lowercase();
    if requirements.is_empty() {
        return 40;
    }

    let mut exact = 0usize;
    let mut partial = 0usize;
    for skill in &skills {
        let needle = skill.to_lowercase();
        if requirements.contains(&needle) {
            exact += 1;
        } else if synonym_hit(skill, &needle, &requirements) {
            partial += 1;
        }
    }

    let combined = (exact as f64 + 0.5 * partial as f64) / skills.len() as f64 * 100.0;

    if combined >= 90.0 {
        85
    } else if combined >= 70.0 {
        75
    } else if combined >= 50.0 {
        60
    } else if combined >= 30.0 {
        45
    } else if combined > 0.0 {
        30
    } else {
        15
    }
}

fn synonym_hit(skill: &str, needle: &str, requirements: &str) -> bool {
    let Some(aliases) = aliases_for(skill) else {
        return false;
    };
    aliases
        .iter()
        .any(|alias| *alias != needle && requirements.contains(alias))
}
