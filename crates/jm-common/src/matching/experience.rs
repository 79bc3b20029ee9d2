use chrono::NaiveDate;

use crate::parse::period::span_years;
use crate::WorkExperience;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

/// Total employment history length in fractional years, with the
/// documented 1-year default per unparseable entry.
pub fn total_experience_years(entries: &[WorkExperience], today: NaiveDate) -> f64 {
    entries
        .iter()
        .map(|entry| span_years(&entry.start_date, &entry.end_date, today))
        .sum()
}

/// Experience sub-score: accumulated years against the job's stated
/// experience level.
pub fn score_experience(entries: &[WorkExperience], experience_level: &str, today: NaiveDate) -> u8 {
    score_experience_years(total_experience_years(entries, today), experience_level)
}

/// Threshold ladder per level bracket. A missing or unrecognized level
/// is neutral (70).
pub fn score_experience_years(years: f64, experience_level: &str) -> u8 {
    match classify_level(experience_level) {
        Some(ExperienceLevel::Senior) => {
            if years >= 5.0 {
                90
            } else if years >= 2.0 {
                70
            } else {
                50
            }
        }
        Some(ExperienceLevel::Mid) => {
            if years >= 2.0 {
                90
            } else if years >= 1.0 {
                70
            } else {
                50
            }
        }
        Some(ExperienceLevel::Entry) => {
            if years < 2.0 {
                90
            } else if years <= 5.0 {
                75
            } else {
                60
            }
        }
        None => 70,
    }
}

pub fn classify_level(raw: &str) -> Option<ExperienceLevel> {
    let lower = raw.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    const SENIOR: &[&str] = &["senior", "lead", "principal", "head of"];
    const MID: &[&str] = &["mid", "intermediate"];
    const ENTRY: &[&str] = &["entry", "junior", "graduate", "intern", "trainee"];

    if SENIOR.iter().any(|kw| lower.contains(kw)) {
        return Some(ExperienceLevel::Senior);
    }
    if MID.iter().any(|kw| lower.contains(kw)) {
        return Some(ExperienceLevel::Mid);
    }
    if ENTRY.iter().any(|kw| lower.contains(kw)) {
        return Some(ExperienceLevel::Entry);
    }
    None
}
