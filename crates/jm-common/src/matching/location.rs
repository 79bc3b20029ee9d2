/// Metro/city -> province lookup used to complete a half-specified
/// location pair before giving up on a province comparison.
const CITY_PROVINCES: &[(&str, &str)] = &[
    ("johannesburg", "gauteng"),
    ("pretoria", "gauteng"),
    ("sandton", "gauteng"),
    ("midrand", "gauteng"),
    ("centurion", "gauteng"),
    ("soweto", "gauteng"),
    ("randburg", "gauteng"),
    ("benoni", "gauteng"),
    ("vereeniging", "gauteng"),
    ("cape town", "western cape"),
    ("stellenbosch", "western cape"),
    ("paarl", "western cape"),
    ("george", "western cape"),
    ("durban", "kwazulu-natal"),
    ("pietermaritzburg", "kwazulu-natal"),
    ("richards bay", "kwazulu-natal"),
    ("gqeberha", "eastern cape"),
    ("port elizabeth", "eastern cape"),
    ("east london", "eastern cape"),
    ("mthatha", "eastern cape"),
    ("bloemfontein", "free state"),
    ("welkom", "free state"),
    ("polokwane", "limpopo"),
    ("mbombela", "mpumalanga"),
    ("nelspruit", "mpumalanga"),
    ("emalahleni", "mpumalanga"),
    ("kimberley", "northern cape"),
    ("upington", "northern cape"),
    ("rustenburg", "north west"),
    ("mahikeng", "north west"),
    ("potchefstroom", "north west"),
];

pub fn province_of_city(city: &str) -> Option<&'static str> {
    let city = city.trim().to_lowercase();
    CITY_PROVINCES
        .iter()
        .find(|(known, _)| *known == city)
        .map(|(_, province)| *province)
}

/// Hierarchical location sub-score.
///
/// Remote jobs and exact city matches are perfect; agreement degrades
/// through province-level and derived (city -> province) comparisons down
/// to a 50 floor for different provinces. A candidate with no location
/// at all is neutral (80).
pub fn score_location(
    candidate_city: &str,
    candidate_province: &str,
    job_city: &str,
    job_province: &str,
) -> u8 {
    let c_city = norm(candidate_city);
    let c_province = norm(candidate_province);
    let j_city = norm(job_city);
    let j_province = norm(job_province);

    if j_city.contains("remote") || j_province.contains("remote") {
        return 100;
    }

    if c_city.is_empty() && c_province.is_empty() {
        return 80;
    }

    if !c_city.is_empty() && c_city == j_city {
        return 100;
    }

    if !c_province.is_empty() && c_province == j_province {
        // Same province; exact-city equality was already handled above.
        if !c_city.is_empty() && !j_city.is_empty() {
            return 85;
        }
        return 90;
    }

    if !c_city.is_empty()
        && !j_province.is_empty()
        && province_of_city(&c_city) == Some(j_province.as_str())
    {
        return 95;
    }
    if !j_city.is_empty()
        && !c_province.is_empty()
        && province_of_city(&j_city) == Some(c_province.as_str())
    {
        return 95;
    }

    if !c_city.is_empty() && !j_city.is_empty() && overlaps(&c_city, &j_city) {
        return 80;
    }
    if !c_province.is_empty() && !j_province.is_empty() && overlaps(&c_province, &j_province) {
        return 75;
    }

    50
}

fn norm(value: &str) -> String {
    value.trim().to_lowercase()
}

fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
