use qabase_core::errors::*;

#[test]
fn invalid_input_carries_reason() {
    let err = QaError::InvalidInput {
        reason: "blank phrase".into(),
    };
    assert!(err.to_string().contains("blank phrase"));
}

#[test]
fn empty_query_carries_question() {
    let err = QaError::EmptyQuery {
        question: "и в на".into(),
    };
    assert!(err.to_string().contains("и в на"));
}

// --- From impls ---

#[test]
fn storage_error_converts_to_qa_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let qa_err: QaError = storage_err.into();
    assert!(matches!(qa_err, QaError::StorageError(_)));
    assert!(qa_err.to_string().contains("disk full"));
}

#[test]
fn import_error_converts_to_qa_error() {
    let import_err = ImportError::MissingField {
        element: "sense".into(),
        field: "lemma".into(),
    };
    let qa_err: QaError = import_err.into();
    assert!(matches!(qa_err, QaError::ImportError(_)));
}

#[test]
fn serialization_error_converts_to_qa_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let qa_err: QaError = json_err.into();
    assert!(matches!(qa_err, QaError::SerializationError(_)));
}

#[test]
fn migration_failed_carries_version() {
    let err = StorageError::MigrationFailed {
        version: 2,
        reason: "syntax error".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains('2'));
    assert!(msg.contains("syntax error"));
}

#[test]
fn malformed_xml_carries_position() {
    let err = ImportError::MalformedXml {
        position: 117,
        reason: "unexpected end".into(),
    };
    assert!(err.to_string().contains("117"));
}
