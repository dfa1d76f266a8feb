// Two-stage location name resolution: a cheap candidate filter over the
// spelling corpus, then precise Levenshtein ranking of the survivors.

use thiserror::Error;

use crate::catalog::{Catalog, Location};
use crate::levenshtein;

/// A spelling that survived the coarse filter, with its owning location.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub spelling: &'a str,
    pub location: &'a Location,
}

/// One ranked search result: the best-scoring spelling for a location.
#[derive(Debug, Clone, Copy)]
pub struct RankedMatch<'a> {
    pub location: &'a Location,
    pub spelling: &'a str,
    pub distance: usize,
}

/// Recoverable per-request resolution failures. These become descriptive
/// text for the chatbot caller, never a crash.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no search term was provided")]
    BlankSearch,
    #[error("No results found for search: {0}")]
    NoResults(String),
}

/// Coarse filter: keep spellings related to the query by case-insensitive
/// substring containment in either direction. This bounds the number of
/// O(len*len) distance computations without excluding any spelling a
/// substring scan would have found.
pub fn find_candidates<'a>(catalog: &'a Catalog, search: &str) -> Vec<Candidate<'a>> {
    let needle = search.to_lowercase();
    catalog
        .spelling_entries()
        .filter(|(spelling, _)| {
            let haystack = spelling.to_lowercase();
            haystack.contains(&needle) || needle.contains(&haystack)
        })
        .map(|(spelling, location)| Candidate { spelling, location })
        .collect()
}

/// Rank candidates by exact (case-sensitive) edit distance to the search.
///
/// The sort is stable so filter order breaks ties, the list is truncated to
/// `max_results` before deduplication, and dedup keeps the best-ranked
/// spelling per location. Truncating first mirrors the original behavior:
/// a location can crowd itself out of a small result window.
pub fn rank<'a>(
    search: &str,
    candidates: Vec<Candidate<'a>>,
    max_results: usize,
) -> Vec<RankedMatch<'a>> {
    let mut ranked: Vec<RankedMatch<'a>> = candidates
        .into_iter()
        .map(|c| RankedMatch {
            location: c.location,
            spelling: c.spelling,
            distance: levenshtein::distance(search, c.spelling),
        })
        .collect();

    ranked.sort_by_key(|m| m.distance);
    ranked.truncate(max_results);

    let mut seen = std::collections::HashSet::new();
    ranked.retain(|m| seen.insert(m.location.id));
    ranked
}

/// Full resolution pipeline for a trimmed, non-empty search string.
pub fn search<'a>(
    catalog: &'a Catalog,
    search: &str,
    max_results: usize,
) -> Result<Vec<RankedMatch<'a>>, ResolveError> {
    if search.trim().is_empty() {
        return Err(ResolveError::BlankSearch);
    }

    let candidates = find_candidates(catalog, search);
    let ranked = rank(search, candidates, max_results.max(1));
    if ranked.is_empty() {
        return Err(ResolveError::NoResults(search.to_string()));
    }
    Ok(ranked)
}
