//! Scoring stored requests against query phrases, then filtering and ordering.

use qabase_core::config::MatchingConfig;
use qabase_core::models::{RankedAnswer, Request};

use crate::similarity::ratio;

/// Candidate phrases for a normalized query. With more than one phrase the
/// space-joined query is appended, so a question matches its own record.
pub fn candidate_phrases(phrases: &[String]) -> Vec<String> {
    let mut candidates = phrases.to_vec();
    if phrases.len() > 1 {
        candidates.push(phrases.join(" "));
    }
    candidates
}

/// Best score of any phrase against the request's normalized text.
pub fn score_request(phrases: &[String], request: &Request) -> f64 {
    phrases
        .iter()
        .map(|phrase| ratio(phrase, &request.request))
        .fold(0.0, f64::max)
}

/// Score every request, apply `min_score`, sort by score descending.
///
/// The sort is stable: equal scores keep store order.
pub fn rank(phrases: &[String], requests: &[Request], config: &MatchingConfig) -> Vec<RankedAnswer> {
    let mut ranked: Vec<RankedAnswer> = requests
        .iter()
        .map(|request| RankedAnswer {
            answer: request.answer.clone(),
            score: score_request(phrases, request),
            request_id: request.id,
        })
        .filter(|ranked| config.min_score.map_or(true, |min| ranked.score > min))
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(max) = config.max_results {
        ranked.truncate(max);
    }
    ranked
}
