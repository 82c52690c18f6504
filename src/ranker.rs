use std::collections::HashSet;

use crate::types::{MediaType, SearchResult, PROVIDER_ID};

const NO_POSTER_PENALTY: f32 = 0.01;

/// A search hit as read off the results page, before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub title: String,
    pub url: String,
    pub poster_url: String,
}

/// Case-insensitive similarity in [0, 1].
pub fn similarity(query: &str, title: &str) -> f32 {
    let q = query.trim().to_lowercase();
    let t = title.trim().to_lowercase();
    strsim::normalized_levenshtein(&q, &t) as f32
}

pub fn score(query: &str, candidate: &Candidate) -> f32 {
    let mut score = similarity(query, &candidate.title);
    if candidate.poster_url.is_empty() || candidate.poster_url.contains("nopicture") {
        tracing::debug!("no poster for {}, downgrading score by {}", candidate.id, NO_POSTER_PENALTY);
        score -= NO_POSTER_PENALTY;
    }
    score
}

/// Drops incomplete candidates and repeated URLs, then orders by score
/// descending. The sort is stable: equal scores keep discovery order.
pub fn rank(query: &str, candidates: Vec<Candidate>) -> Vec<SearchResult> {
    let scored = candidates.into_iter().map(|c| {
        let s = score(query, &c);
        (c, s)
    });
    rank_scored(scored)
}

pub(crate) fn rank_scored(scored: impl IntoIterator<Item = (Candidate, f32)>) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut results = Vec::new();
    for (c, score) in scored {
        if c.title.trim().is_empty() || c.id.trim().is_empty() {
            tracing::warn!("search hit without title or id, skipping");
            continue;
        }
        if !seen.insert(c.url.clone()) {
            continue;
        }
        results.push(SearchResult {
            provider_id: PROVIDER_ID.to_string(),
            id: c.id,
            original_title: c.title.clone(),
            title: c.title,
            year: None,
            media_type: MediaType::Movie,
            url: c.url,
            poster_url: c.poster_url,
            score,
        });
    }
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}
