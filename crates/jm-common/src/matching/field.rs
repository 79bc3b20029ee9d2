/// Fields considered adjacent enough that moving between them is common.
/// Matching entries use substring containment in either direction, so
/// "BSc Computer Science" still lands in the technology group.
const RELATED_FIELD_GROUPS: &[&[&str]] = &[
    &[
        "information technology",
        "computer science",
        "software engineering",
        "software development",
        "information systems",
    ],
    &["finance", "accounting", "economics", "banking", "auditing"],
    &[
        "marketing",
        "sales",
        "advertising",
        "communications",
        "public relations",
    ],
    &[
        "engineering",
        "mechanical engineering",
        "electrical engineering",
        "civil engineering",
        "industrial engineering",
    ],
    &[
        "healthcare",
        "nursing",
        "medicine",
        "health sciences",
        "pharmacy",
    ],
    &["education", "teaching", "training and development"],
    &["human resources", "industrial psychology", "recruitment"],
    &["law", "legal services", "compliance"],
    &["hospitality", "tourism", "events management"],
    &["logistics", "supply chain", "procurement", "transport"],
];

/// Skills that transfer between otherwise unrelated fields; presence on
/// both sides earns a weak match instead of the floor score.
const TRANSFERABLE_KEYWORDS: &[&str] = &[
    "management",
    "sales",
    "communication",
    "customer service",
    "administration",
    "leadership",
    "project management",
    "training",
];

/// Field/specialization sub-score.
///
/// 90 exact field + sub-field, 80 same field with overlapping
/// specializations, 65 same field only, 50 related fields, 30
/// transferable-keyword overlap, 15 otherwise. A missing field on either
/// side is neutral (50).
pub fn score_field(
    candidate_field: &str,
    candidate_sub_field: &str,
    job_field: &str,
    job_specialization: &str,
) -> u8 {
    let c_field = norm(candidate_field);
    let j_field = norm(job_field);

    if c_field.is_empty() || j_field.is_empty() {
        return 50;
    }

    let c_sub = norm(candidate_sub_field);
    let j_spec = norm(job_specialization);

    if c_field == j_field {
        if !c_sub.is_empty() && c_sub == j_spec {
            return 90;
        }
        if !c_sub.is_empty() && !j_spec.is_empty() && overlaps(&c_sub, &j_spec) {
            return 80;
        }
        return 65;
    }

    if are_related_fields(&c_field, &j_field) {
        return 50;
    }

    if transferable_overlap(&c_field, &c_sub, &j_field, &j_spec) {
        return 30;
    }

    15
}

fn norm(value: &str) -> String {
    value.trim().to_lowercase()
}

fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn group_of(field: &str) -> Option<usize> {
    RELATED_FIELD_GROUPS
        .iter()
        .position(|group| group.iter().any(|entry| overlaps(field, entry)))
}

fn are_related_fields(a: &str, b: &str) -> bool {
    match (group_of(a), group_of(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn transferable_overlap(c_field: &str, c_sub: &str, j_field: &str, j_spec: &str) -> bool {
    let candidate_text = format!("{c_field} {c_sub}");
    let job_text = format!("{j_field} {j_spec}");
    TRANSFERABLE_KEYWORDS
        .iter()
        .any(|keyword| candidate_text.contains(keyword) && job_text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_field_and_sub_field() {
        assert_eq!(
            score_field(
                "Information Technology",
                "Software Development",
                "Information Technology",
                "Software Development"
            ),
            90
        );
    }

    #[test]
    fn overlapping_specializations_within_field() {
        assert_eq!(
            score_field(
                "Information Technology",
                "Software Development",
                "Information Technology",
                "Software"
            ),
            80
        );
    }

    #[test]
    fn same_field_only() {
        assert_eq!(
            score_field("Finance", "Auditing", "Finance", "Tax Consulting"),
            65
        );
        assert_eq!(score_field("Finance", "", "Finance", ""), 65);
    }

    #[test]
    fn related_fields_via_group_table() {
        assert_eq!(
            score_field("Computer Science", "", "Information Technology", ""),
            50
        );
        assert_eq!(score_field("Accounting", "", "Banking", ""), 50);
    }

    #[test]
    fn transferable_keywords_rescue_unrelated_fields() {
        assert_eq!(
            score_field(
                "Retail Management",
                "",
                "Hospitality Management",
                ""
            ),
            30
        );
    }

    #[test]
    fn unrelated_fields_hit_the_floor() {
        assert_eq!(score_field("Nursing", "", "Civil Engineering", ""), 15);
    }

    #[test]
    fn missing_field_is_neutral() {
        assert_eq!(score_field("", "", "Finance", ""), 50);
        assert_eq!(score_field("Finance", "", "", ""), 50);
    }
}
