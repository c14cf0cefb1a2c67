use serde::{Deserialize, Serialize};

/// A recorded question/answer pair.
///
/// `request` holds the normalized question: the resolved bigram lemmas
/// joined with single spaces. `answer` is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub id: i64,
    pub request: String,
    pub answer: String,
}

/// A request that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRequest {
    pub request: String,
    pub answer: String,
}
