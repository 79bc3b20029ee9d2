use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use strsim::damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

/// Canonical skill -> accepted aliases. Used both to normalize candidate
/// skill strings and to award partial credit when a job's requirements
/// mention a sibling spelling of the same skill.
static ALIAS_GROUPS: &[(&str, &[&str])] = &[
    // Languages
    (
        "javascript",
        &["js", "javascript", "java script", "ecmascript", "es6"],
    ),
    ("typescript", &["ts", "typescript", "type script"]),
    ("java", &["java8", "java11", "java17", "openjdk", "java"]),
    ("python", &["python3", "python 3", "py", "python"]),
    ("csharp", &["c#", "c sharp", "csharp", ".net", "dotnet"]),
    ("cplusplus", &["c++", "cpp", "c plus plus"]),
    ("php", &["php7", "php8", "php"]),
    ("kotlin", &["kotlin jvm", "kotlin"]),
    ("swift", &["ios swift", "swift"]),
    // Data
    (
        "sql",
        &[
            "sql",
            "mysql",
            "postgresql",
            "postgres",
            "sql server",
            "tsql",
            "pl/sql",
            "relational databases",
        ],
    ),
    ("mongodb", &["mongo", "mongo db", "mongodb", "nosql"]),
    (
        "excel",
        &["microsoft excel", "ms excel", "excel", "spreadsheets"],
    ),
    (
        "powerbi",
        &["power bi", "powerbi", "power-bi", "microsoft power bi"],
    ),
    (
        "dataanalysis",
        &["data analysis", "data analytics", "analytics", "reporting"],
    ),
    // Frameworks
    ("react", &["reactjs", "react.js", "react js", "react"]),
    ("angular", &["angularjs", "angular.js", "angular"]),
    (
        "spring",
        &["spring boot", "springboot", "spring framework", "spring"],
    ),
    ("django", &["django rest framework", "drf", "django"]),
    ("nodejs", &["node.js", "node js", "nodejs", "node"]),
    (
        "android",
        &["android development", "android studio", "android"],
    ),
    // Cloud and DevOps
    (
        "aws",
        &["amazon web services", "amazon aws", "aws cloud", "aws"],
    ),
    ("azure", &["microsoft azure", "ms azure", "azure"]),
    ("gcp", &["google cloud platform", "google cloud", "gcp"]),
    ("docker", &["containerization", "docker container", "docker"]),
    ("kubernetes", &["k8s", "kube", "kubernetes"]),
    ("git", &["version control", "github", "gitlab", "git"]),
    // Business and transferable
    (
        "projectmanagement",
        &[
            "project management",
            "agile",
            "scrum",
            "prince2",
            "project planning",
        ],
    ),
    (
        "customerservice",
        &[
            "customer service",
            "client service",
            "customer support",
            "customer care",
        ],
    ),
    (
        "sales",
        &["sales", "selling", "business development", "cold calling"],
    ),
    (
        "marketing",
        &[
            "marketing",
            "digital marketing",
            "social media marketing",
            "seo",
        ],
    ),
    (
        "accounting",
        &[
            "accounting",
            "bookkeeping",
            "financial accounting",
            "pastel",
            "sage",
        ],
    ),
    (
        "communication",
        &[
            "communication",
            "communication skills",
            "written communication",
            "presentation skills",
        ],
    ),
    (
        "administration",
        &["administration", "office administration", "admin", "clerical"],
    ),
];

static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (canonical, aliases) in ALIAS_GROUPS {
        map.insert(*canonical, *canonical);
        for alias in *aliases {
            map.insert(*alias, *canonical);
        }
    }
    map
});

static CANONICAL_TO_ALIASES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| ALIAS_GROUPS.iter().map(|(c, a)| (*c, *a)).collect());

/// Separator-free lookup key so "Node.js", "node js" and "nodejs" meet.
static COMPACT_ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        map.entry(compact_key(alias)).or_insert(*canonical);
    }
    map
});

fn nfkc_lower_trim(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

fn compact_key(input: &str) -> String {
    input
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/' | ','))
        .collect()
}

fn match_canonical_token(token: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }

    if let Some(canonical) = ALIAS_TO_CANONICAL.get(token) {
        return Some((*canonical).to_string());
    }

    let compact = compact_key(token);
    if let Some(canonical) = COMPACT_ALIAS_TO_CANONICAL.get(&compact) {
        return Some((*canonical).to_string());
    }

    fuzzy_match_canonical(&compact)
}

fn split_segments(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split(|c: char| matches!(c, ' ' | '/' | ',' | ';' | '|' | '+'))
        .map(nfkc_lower_trim)
        .filter(|s| !s.is_empty())
}

fn fuzzy_match_canonical(compact: &str) -> Option<String> {
    // Short tokens (java, php, sql) are only matched exactly; fuzzing
    // them produces too many false positives.
    if compact.len() < 5 {
        return None;
    }

    let mut best: Option<(&str, usize)> = None;
    for (alias, canonical) in COMPACT_ALIAS_TO_CANONICAL.iter() {
        if alias.len() < 5 || canonical.len() < 5 {
            continue;
        }

        let distance = damerau_levenshtein(compact, alias);
        if distance == 0 {
            return Some((*canonical).to_string());
        }

        let len = compact.len().max(alias.len());
        let acceptable = distance == 1 || (len >= 8 && distance == 2);
        if !acceptable {
            continue;
        }

        match best {
            None => best = Some((*canonical, distance)),
            Some((_, best_dist)) if distance < best_dist => best = Some((*canonical, distance)),
            _ => {}
        }
    }

    best.map(|(canonical, _)| canonical.to_string())
}

/// Normalize one skill string to its canonical form; unknown skills are
/// returned trimmed and lowercased.
pub fn normalize_skill(skill: &str) -> String {
    let normalized = nfkc_lower_trim(skill);
    if let Some(canonical) = match_canonical_token(&normalized) {
        return canonical;
    }

    for segment in split_segments(skill) {
        if let Some(canonical) = match_canonical_token(&segment) {
            return canonical;
        }
    }

    normalized
}

/// Normalize a skill list into a deduplicated set of canonical forms.
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize_skill(s))
        .collect()
}

/// Alias group (canonical spelling included) for a skill, if the skill
/// resolves to a known canonical form.
pub fn aliases_for(skill: &str) -> Option<&'static [&'static str]> {
    let canonical = normalize_skill(skill);
    CANONICAL_TO_ALIASES.get(canonical.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_canonical() {
        assert_eq!(normalize_skill("JavaScript"), "javascript");
        assert_eq!(normalize_skill("js"), "javascript");
        assert_eq!(normalize_skill("K8s"), "kubernetes");
        assert_eq!(normalize_skill("C#"), "csharp");
        assert_eq!(normalize_skill("MySQL"), "sql");
    }

    #[test]
    fn separators_and_case_are_ignored() {
        assert_eq!(normalize_skill("Node.JS"), "nodejs");
        assert_eq!(normalize_skill("Power BI"), "powerbi");
        assert_eq!(normalize_skill("Spring Boot"), "spring");
    }

    #[test]
    fn tolerates_small_typos_for_known_aliases() {
        assert_eq!(normalize_skill("javascirpt"), "javascript");
        assert_eq!(normalize_skill("kuberntes"), "kubernetes");
    }

    #[test]
    fn does_not_fuzz_short_tokens() {
        assert_eq!(normalize_skill("javaa"), "javaa");
        assert_eq!(normalize_skill("ab"), "ab");
    }

    #[test]
    fn unknown_skills_lowercase() {
        assert_eq!(normalize_skill("MyCustomFramework"), "mycustomframework");
    }

    #[test]
    fn skill_sets_meet_after_normalization() {
        let candidate = normalize_skill_set(&["React.js".to_string(), "K8s".to_string()]);
        let job = normalize_skill_set(&["react".to_string(), "kubernetes".to_string()]);
        assert_eq!(candidate, job);
    }

    #[test]
    fn alias_groups_are_exposed_for_synonym_checks() {
        let aliases = aliases_for("MySQL").unwrap();
        assert!(aliases.contains(&"sql"));
        assert!(aliases.contains(&"postgresql"));
        assert!(aliases_for("underwater basket weaving").is_none());
    }
}
