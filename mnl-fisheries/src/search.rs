//! Name-search ranking for lakes.
//!
//! The policy, collapsed from the source variants into one documented
//! behavior:
//!
//! - matching is case-insensitive and considers both the display name and
//!   the alternate name;
//! - an empty (or whitespace) query matches nothing;
//! - if any lake matches the query exactly or as a word-boundary prefix,
//!   only those lakes are returned (exact matches pinned first, then
//!   prefix matches);
//! - otherwise the search falls back to substring containment anywhere in
//!   either name;
//! - within a tier, results order shortest-name-first, with the input
//!   (insertion) order as the stable tie-break.
//!
//! A "word-boundary prefix" means the name starts with the query and the
//! match ends at the end of a word: "gull" prefix-matches "Gull Lake",
//! while "gul" only substring-matches it.

use crate::lake::Lake;

/// Match quality tiers, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchTier {
    Exact,
    Prefix,
    Substring,
}

/// Ranks `lakes` against `query` per the canonical search policy.
///
/// Returns references into `lakes` in display order.
pub fn search_by_name<'a>(lakes: &'a [Lake], query: &str) -> Vec<&'a Lake> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }

    let mut matched: Vec<(MatchTier, &Lake)> = lakes
        .iter()
        .filter_map(|lake| match_tier(lake, &q).map(|tier| (tier, lake)))
        .collect();

    let strong = matched.iter().any(|(tier, _)| *tier != MatchTier::Substring);
    if strong {
        matched.retain(|(tier, _)| *tier != MatchTier::Substring);
    }

    // Stable sort: tier, then name length; insertion order breaks ties.
    matched.sort_by_key(|(tier, lake)| (*tier, lake.name.len()));
    matched.into_iter().map(|(_, lake)| lake).collect()
}

/// Best tier at which `lake` matches the lowercased query, if any.
fn match_tier(lake: &Lake, q: &str) -> Option<MatchTier> {
    let names = [Some(lake.name.as_str()), lake.alternate_name.as_deref()];
    let mut best: Option<MatchTier> = None;
    for name in names.into_iter().flatten() {
        let lowered = name.to_lowercase();
        let tier = if lowered == *q {
            Some(MatchTier::Exact)
        } else if is_word_boundary_prefix(&lowered, q) {
            Some(MatchTier::Prefix)
        } else if lowered.contains(q) {
            Some(MatchTier::Substring)
        } else {
            None
        };
        best = match (best, tier) {
            (None, t) => t,
            (Some(b), Some(t)) if t < b => Some(t),
            (b, _) => b,
        };
    }
    best
}

/// Whether `name` starts with `q` and the match ends at a word boundary.
/// Both inputs must already be lowercased.
fn is_word_boundary_prefix(name: &str, q: &str) -> bool {
    if !name.starts_with(q) {
        return false;
    }
    match name[q.len()..].chars().next() {
        None => true,
        Some(next) => !next.is_alphanumeric(),
    }
}
