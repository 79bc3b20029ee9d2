use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

/// Span assumed for entries whose dates cannot be parsed.
pub const DEFAULT_SPAN_YEARS: f64 = 1.0;

lazy_static! {
    static ref YEAR_MONTH_RE: Regex = Regex::new(r"^(\d{4})[/-](\d{1,2})$").unwrap();
    static ref MONTH_YEAR_RE: Regex = Regex::new(r"^(\d{1,2})[/-](\d{4})$").unwrap();
    static ref YEAR_RE: Regex = Regex::new(r"^(\d{4})$").unwrap();
    static ref MONTH_NAME_RE: Regex = Regex::new(r"(?i)^([a-z]{3,9})\.?\s+(\d{4})$").unwrap();
    static ref PRESENT_RE: Regex =
        Regex::new(r"(?i)^(present|current|now|ongoing|to date)$").unwrap();
    static ref YEARS_RANGE_RE: Regex =
        Regex::new(r"(\d+(?:\.\d+)?)\s*(?:-|–|to)\s*(\d+(?:\.\d+)?)").unwrap();
    static ref YEARS_OPEN_RE: Regex = Regex::new(r"(\d+(?:\.\d+)?)\s*\+").unwrap();
    static ref YEARS_NUMBER_RE: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();
}

/// Parse one free-text work-experience date.
///
/// Accepted: "2020", "2020-03", "03/2020", "Jan 2020", "January 2020",
/// and the still-employed markers ("present", "current", ...) which
/// resolve to `today`. Month-less dates resolve to January 1st.
pub fn parse_experience_date(raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if PRESENT_RE.is_match(trimmed) {
        return Some(today);
    }

    if let Some(caps) = YEAR_MONTH_RE.captures(trimmed) {
        let year: i32 = caps.get(1)?.as_str().parse().ok()?;
        let month: u32 = caps.get(2)?.as_str().parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    if let Some(caps) = MONTH_YEAR_RE.captures(trimmed) {
        let month: u32 = caps.get(1)?.as_str().parse().ok()?;
        let year: i32 = caps.get(2)?.as_str().parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    if let Some(caps) = YEAR_RE.captures(trimmed) {
        let year: i32 = caps.get(1)?.as_str().parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    if let Some(caps) = MONTH_NAME_RE.captures(trimmed) {
        let month = month_number(caps.get(1)?.as_str())?;
        let year: i32 = caps.get(2)?.as_str().parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    None
}

/// Length of one employment entry in fractional years.
///
/// An empty end date means still employed. Unparseable or inverted
/// spans fall back to [`DEFAULT_SPAN_YEARS`].
pub fn span_years(start_raw: &str, end_raw: &str, today: NaiveDate) -> f64 {
    let start = parse_experience_date(start_raw, today);
    let end = if end_raw.trim().is_empty() {
        Some(today)
    } else {
        parse_experience_date(end_raw, today)
    };

    match (start, end) {
        (Some(start), Some(end)) if end > start => {
            (end - start).num_days() as f64 / 365.25
        }
        _ => DEFAULT_SPAN_YEARS,
    }
}

/// Parse a years-of-experience bucket such as "2-3 years", "5+ years"
/// or "1 year" into a single representative number of years (the upper
/// bound of a range).
pub fn parse_years_bucket(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = YEARS_RANGE_RE.captures(trimmed) {
        return caps.get(2)?.as_str().parse().ok();
    }

    if let Some(caps) = YEARS_OPEN_RE.captures(trimmed) {
        return caps.get(1)?.as_str().parse().ok();
    }

    YEARS_NUMBER_RE
        .find(trimmed)
        .and_then(|m| m.as_str().parse().ok())
}

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let month = match lower.as_str() {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(month)
}
