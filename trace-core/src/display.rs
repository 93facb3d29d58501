//! Display fields derived from the search query
//!
//! Live candidates carry no role or skill data of their own, so both are
//! inferred from what the user searched for.

use regex::Regex;
use std::sync::LazyLock;

/// Role used when the query is empty
pub const GENERIC_ROLE: &str = "Software Engineer";

/// Occupation suffix appended to derived roles
const ROLE_SUFFIX: &str = "Engineer";

/// Skills appended after the leading query token
pub const FALLBACK_SKILLS: [&str; 3] = ["Python", "TensorFlow", "Git"];

/// Skills used when the query is empty
pub const GENERIC_SKILLS: [&str; 2] = ["Coding", "Design"];

/// Maximum number of derived skills
pub const MAX_SKILLS: usize = 4;

/// Search link base for the professional network
const LINKEDIN_SEARCH: &str = "https://www.linkedin.com/search/results/all/?keywords=";

static OCCUPATION_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)engineer").unwrap());

/// Derive a display role: strip the occupation keyword, title-case the rest
pub fn derive_role(query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return GENERIC_ROLE.to_string();
    }

    let stripped = OCCUPATION_KEYWORD.replace_all(query, " ");
    let remainder = title_case(&stripped);

    if remainder.is_empty() {
        ROLE_SUFFIX.to_string()
    } else {
        format!("{} {}", remainder, ROLE_SUFFIX)
    }
}

/// Derive a skill list: the first query token followed by the fixed fallbacks
pub fn derive_skills(query: &str) -> Vec<String> {
    let Some(first) = query.split_whitespace().next() else {
        return GENERIC_SKILLS.iter().map(|s| s.to_string()).collect();
    };

    std::iter::once(first)
        .chain(FALLBACK_SKILLS)
        .take(MAX_SKILLS)
        .map(str::to_string)
        .collect()
}

/// Professional-network search pre-filled with name and query
pub fn linkedin_search_url(name: &str, query: &str) -> String {
    let keywords = match query.trim() {
        "" => "developer",
        q => q,
    };

    format!(
        "{}{}+{}",
        LINKEDIN_SEARCH,
        urlencoding::encode(name),
        urlencoding::encode(keywords)
    )
}

/// Upper-case the first letter of every word, lower-case the rest
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
