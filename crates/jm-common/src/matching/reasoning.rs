/// Human-readable explanation for a final match percentage.
///
/// Pure bucket lookup: identical percentage and field pair always yields
/// the identical sentence, and the sentence is never empty.
pub fn generate_reasoning(percentage: u8, candidate_field: &str, job_field: &str) -> String {
    let yours = match candidate_field.trim() {
        "" => "your background".to_string(),
        field => format!("your {field} background"),
    };
    let theirs = match job_field.trim() {
        "" => "this role".to_string(),
        field => format!("this {field} role"),
    };

    if percentage >= 85 {
        format!("Excellent match: {yours} aligns strongly with {theirs}.")
    } else if percentage >= 75 {
        format!("Strong match: {yours} covers most of what {theirs} requires.")
    } else if percentage >= 65 {
        format!("Good match: {yours} is relevant to {theirs}, though a few requirements may need development.")
    } else if percentage >= 50 {
        format!("Moderate match: parts of {yours} carry over to {theirs}.")
    } else {
        format!("Limited match: {theirs} falls largely outside {yours}.")
    }
}
