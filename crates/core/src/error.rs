/// Errors raised by the content core.
///
/// The variants fall into three groups which the API layer maps onto HTTP
/// statuses: invalid input, unknown records, and store faults.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to write content document: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read content document: {0}")]
    FileRead(std::io::Error),
    #[error("failed to remove content document: {0}")]
    FileRemove(std::io::Error),
    #[error("failed to serialize content document: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize content document: {0}")]
    Deserialization(serde_json::Error),
    #[error("record store lock poisoned")]
    StoreLockPoisoned,
    #[error("failed to allocate a unique record id after {0} attempts")]
    IdAllocation(usize),
}

impl ContentError {
    /// True for errors caused by the caller's input rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ContentError::InvalidInput(_) | ContentError::MissingField { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }
}

pub type ContentResult<T> = std::result::Result<T, ContentError>;
