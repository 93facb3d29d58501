//! Fallback matcher over the static catalog
//!
//! Unranked token search: an entry matches when any lower-cased query token,
//! or the whole lower-cased query, occurs in its name, role or skills.
//! Results keep catalog order.

use crate::CatalogEntry;

/// Filter catalog entries matching the query
pub fn match_catalog(query: &str, catalog: &[CatalogEntry]) -> Vec<CatalogEntry> {
    let query = query.trim().to_lowercase();
    let tokens: Vec<&str> = query.split_whitespace().collect();

    catalog
        .iter()
        .filter(|entry| {
            let haystack = entry.haystack();
            tokens.iter().any(|token| haystack.contains(token))
                || (!query.is_empty() && haystack.contains(&query))
        })
        .cloned()
        .collect()
}
