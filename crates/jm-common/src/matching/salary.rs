use crate::parse::salary::parse_salary_range;

/// Salary sub-score over the candidate's expected range and the job's
/// offered range. Either side failing to parse is neutral (85).
pub fn score_salary(expected: &str, offered: &str) -> u8 {
    let (Some(candidate), Some(job)) = (parse_salary_range(expected), parse_salary_range(offered))
    else {
        return 85;
    };

    // Offer entirely above expectations.
    if job.min > candidate.max {
        return 95;
    }

    let overlap = candidate.overlap(&job);
    if overlap >= 0 {
        let width = candidate.width();
        let fraction = if width == 0 {
            1.0
        } else {
            overlap as f64 / width as f64
        };
        return if fraction >= 0.8 {
            100
        } else if fraction >= 0.5 {
            90
        } else if fraction >= 0.2 {
            80
        } else {
            70
        };
    }

    // Offer entirely below expectations; score decays with the gap.
    let gap = (candidate.min - job.max) as f64 / candidate.min as f64;
    if gap <= 0.10 {
        75
    } else if gap <= 0.25 {
        60
    } else if gap <= 0.50 {
        40
    } else {
        20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_overlap_of_candidate_range() {
        // Overlap 25000-30000 is 5000 of the candidate's 10000 width.
        assert_eq!(score_salary("20000-30000", "25000-35000"), 90);
    }

    #[test]
    fn near_total_overlap_is_perfect() {
        assert_eq!(score_salary("20000-30000", "21000-35000"), 100);
    }

    #[test]
    fn thin_overlap_tiers_down() {
        // Overlap 28000-30000 = 2000 of 10000 -> 20%.
        assert_eq!(score_salary("20000-30000", "28000-40000"), 80);
        // Overlap 29500-30000 = 500 of 10000 -> 5%.
        assert_eq!(score_salary("20000-30000", "29500-40000"), 70);
    }

    #[test]
    fn single_number_inside_offer_counts_as_full_overlap() {
        assert_eq!(score_salary("25000", "20000-30000"), 100);
    }

    #[test]
    fn offer_above_expectations_is_rewarded() {
        assert_eq!(score_salary("20000-30000", "32000-40000"), 95);
    }

    #[test]
    fn offer_below_expectations_decays_with_gap() {
        assert_eq!(score_salary("20000-30000", "15000-19000"), 75); // 5% gap
        assert_eq!(score_salary("20000-30000", "12000-16000"), 60); // 20% gap
        assert_eq!(score_salary("20000-30000", "9000-12000"), 40); // 40% gap
        assert_eq!(score_salary("20000-30000", "5000-8000"), 20); // 60% gap
    }

    #[test]
    fn unparseable_or_missing_sides_are_neutral() {
        assert_eq!(score_salary("", "25000-35000"), 85);
        assert_eq!(score_salary("market related", "25000-35000"), 85);
        assert_eq!(score_salary("20000-30000", ""), 85);
    }

    #[test]
    fn open_ended_expectation_doubles_its_floor() {
        // "20000+" reads as 20000-40000; offer 25000-35000 overlaps by 10000
        // of the candidate's 20000 width -> 50%.
        assert_eq!(score_salary("20000+", "25000-35000"), 90);
    }
}
