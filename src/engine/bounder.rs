// * Link Deduplicator / Bounder
// * Merges candidates by href, tops sparse results up from the fallback set,
// * then truncates. Augmentation always runs before truncation.

use std::collections::HashSet;

use super::link::ContextualLink;

/// Removes later links whose href was already seen, preserving first-seen order
pub fn dedup_by_href(candidates: Vec<ContextualLink>) -> Vec<ContextualLink> {
    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|link| seen.insert(link.href.clone()))
        .collect()
}

/// Deduplicates, augments with fallback links up to `min_results`, truncates to `max_results`
pub fn finalize(
    candidates: Vec<ContextualLink>,
    min_results: usize,
    max_results: usize,
    fallback: &[ContextualLink],
) -> Vec<ContextualLink> {
    let candidate_count = candidates.len();
    let mut links = dedup_by_href(candidates);
    let unique_count = links.len();

    // * Phase 1: augment
    let mut present: HashSet<String> = links.iter().map(|link| link.href.clone()).collect();
    for link in fallback {
        if links.len() >= min_results {
            break;
        }
        if present.insert(link.href.clone()) {
            links.push(link.clone());
        }
    }
    let fallback_count = links.len() - unique_count;

    // * Phase 2: bound
    links.truncate(max_results);

    tracing::debug!(
        candidates = candidate_count,
        unique = unique_count,
        fallback = fallback_count,
        returned = links.len(),
        "Finalized contextual links"
    );

    links
}
