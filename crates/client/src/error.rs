/// Errors surfaced by the notebook client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status; `message` is the server's
    /// own error payload.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(reqwest::Error),
    #[error("failed to decode response: {0}")]
    Decode(reqwest::Error),
    #[error("invalid API base url: {0}")]
    InvalidBaseUrl(String),
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }

    /// Text suitable for a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Validation(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
