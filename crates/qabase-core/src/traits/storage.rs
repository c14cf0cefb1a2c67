use crate::errors::QaResult;
use crate::models::{NewRequest, Request, Sense, ServiceWord, Synonym};

/// Read/write contract the normalization pipeline needs from the relational store.
///
/// Every call blocks until the store answers. List operations return rows in
/// insertion (`id`) order.
pub trait IQaStorage: Send + Sync {
    // --- Requests ---
    fn insert_request(&self, request: &NewRequest) -> QaResult<i64>;
    fn list_requests(&self) -> QaResult<Vec<Request>>;
    fn count_requests(&self) -> QaResult<usize>;

    // --- Synonyms ---
    fn insert_synonym(&self, core_word: &str, synonym: &str) -> QaResult<i64>;
    /// Synonyms whose `core_word` equals one of `words` exactly.
    fn synonyms_for(&self, words: &[String]) -> QaResult<Vec<Synonym>>;
    fn list_synonyms(&self) -> QaResult<Vec<Synonym>>;

    // --- Lexicon ---
    fn insert_service_words(&self, words: &[String]) -> QaResult<usize>;
    fn list_service_words(&self) -> QaResult<Vec<ServiceWord>>;
    fn insert_senses(&self, senses: &[(String, String)]) -> QaResult<usize>;
    fn list_senses(&self) -> QaResult<Vec<Sense>>;
}
