use serde::{Deserialize, Serialize};

/// One entry of an `answer_query` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAnswer {
    pub answer: String,
    /// Best similarity in `[0.0, 1.0]` across all query phrases.
    pub score: f64,
    /// Id of the matched request row.
    pub request_id: i64,
}
