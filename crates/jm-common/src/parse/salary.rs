use lazy_static::lazy_static;
use regex::Regex;

/// Inclusive salary range in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
}

impl SalaryRange {
    pub fn width(&self) -> i64 {
        self.max - self.min
    }

    /// Size of the intersection with `other`; negative when disjoint.
    pub fn overlap(&self, other: &SalaryRange) -> i64 {
        self.max.min(other.max) - self.min.max(other.min)
    }
}

lazy_static! {
    static ref RANGE_RE: Regex =
        Regex::new(r"(?i)(\d[\d,.\s]*)\s*(?:-|–|to)\s*(?:r\s*)?(\d[\d,.\s]*)").unwrap();
    static ref OPEN_RE: Regex = Regex::new(r"(\d[\d,.\s]*)\s*\+").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"\d[\d,.\s]*").unwrap();
}

/// Parse a free-text salary into an inclusive range.
///
/// Accepted forms: a single number, "min-max", and the open-ended "N+"
/// (treated as [N, 2N]). Currency symbols, thousands separators and
/// spacing inside numbers are ignored. Returns None for anything else;
/// never panics.
pub fn parse_salary_range(raw: &str) -> Option<SalaryRange> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = RANGE_RE.captures(trimmed) {
        let a = parse_amount(caps.get(1)?.as_str())?;
        let b = parse_amount(caps.get(2)?.as_str())?;
        return Some(SalaryRange {
            min: a.min(b),
            max: a.max(b),
        });
    }

    if let Some(caps) = OPEN_RE.captures(trimmed) {
        let min = parse_amount(caps.get(1)?.as_str())?;
        return Some(SalaryRange {
            min,
            max: min.saturating_mul(2),
        });
    }

    if let Some(m) = NUMBER_RE.find(trimmed) {
        let value = parse_amount(m.as_str())?;
        return Some(SalaryRange {
            min: value,
            max: value,
        });
    }

    None
}

fn parse_amount(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_range() {
        let range = parse_salary_range("20000-30000").unwrap();
        assert_eq!(range, SalaryRange { min: 20000, max: 30000 });
        assert_eq!(range.width(), 10000);
    }

    #[test]
    fn parses_formatted_currency_range() {
        let range = parse_salary_range("R25,000 - R35,000 per month").unwrap();
        assert_eq!(range, SalaryRange { min: 25000, max: 35000 });
    }

    #[test]
    fn open_ended_doubles_the_floor() {
        let range = parse_salary_range("15000+").unwrap();
        assert_eq!(range, SalaryRange { min: 15000, max: 30000 });
    }

    #[test]
    fn single_number_collapses_to_a_point() {
        let range = parse_salary_range("R18 000").unwrap();
        assert_eq!(range, SalaryRange { min: 18000, max: 18000 });
        assert_eq!(range.width(), 0);
    }

    #[test]
    fn inverted_ranges_are_reordered() {
        let range = parse_salary_range("30000-20000").unwrap();
        assert_eq!(range, SalaryRange { min: 20000, max: 30000 });
    }

    #[test]
    fn unparseable_input_is_none() {
        assert_eq!(parse_salary_range(""), None);
        assert_eq!(parse_salary_range("market related"), None);
        assert_eq!(parse_salary_range("negotiable"), None);
    }

    #[test]
    fn overlap_is_negative_when_disjoint() {
        let a = SalaryRange { min: 10000, max: 15000 };
        let b = SalaryRange { min: 20000, max: 25000 };
        assert!(a.overlap(&b) < 0);

        let c = SalaryRange { min: 12000, max: 22000 };
        assert_eq!(a.overlap(&c), 3000);
    }
}
