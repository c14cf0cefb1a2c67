//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a newly recorded question/answer pair.
pub fn answer_recorded(request_id: i64, normalized: &str) {
    tracing::info!(
        event = "answer_recorded",
        request_id = request_id,
        normalized = %normalized,
        "answer recorded"
    );
}

/// Log a completed query.
pub fn query_answered(phrases: usize, candidates: usize, returned: usize, top_score: Option<f64>) {
    tracing::info!(
        event = "query_answered",
        phrases = phrases,
        candidates = candidates,
        returned = returned,
        top_score = ?top_score,
        "query answered"
    );
}

/// Log a lexicon snapshot being built for an engine instance.
pub fn lexicon_loaded(stopwords: usize, service_words: usize, senses: usize) {
    tracing::info!(
        event = "lexicon_loaded",
        stopwords = stopwords,
        service_words = service_words,
        senses = senses,
        "lexicon snapshot loaded"
    );
}

/// Log a finished bulk import.
pub fn import_completed(kind: &str, source: &str, rows: usize) {
    tracing::info!(
        event = "import_completed",
        kind = %kind,
        source = %source,
        rows = rows,
        "bulk import completed"
    );
}

/// Log input rejected before it reached the store.
pub fn input_rejected(operation: &str, reason: &str) {
    tracing::warn!(
        event = "input_rejected",
        operation = %operation,
        reason = %reason,
        "input rejected"
    );
}
