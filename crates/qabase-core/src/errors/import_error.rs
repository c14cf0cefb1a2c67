/// Bulk import errors (service word and sense lists).
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("malformed XML at byte {position}: {reason}")]
    MalformedXml { position: u64, reason: String },

    #[error("incomplete <{element}> entry: missing {field}")]
    MissingField { element: String, field: String },
}
