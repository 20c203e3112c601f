use thiserror::Error;

/// Catalog integrity violations detected when a catalog is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("workflow at position {0} has an empty id")]
    EmptyId(usize),

    #[error("workflow id '{0}' appears more than once")]
    DuplicateId(String),

    #[error("workflow '{id}' has an empty tag")]
    EmptyTag { id: String },
}

/// A non-fatal data problem found in an otherwise valid catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityIssue {
    #[error("workflow '{id}' has a malformed price '{raw}'")]
    MalformedPrice { id: String, raw: String },
}
