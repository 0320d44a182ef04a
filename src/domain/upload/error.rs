use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The transfer's response document lacks a field or cannot be parsed.
    Extraction(String),
    TokenUnavailable(String),
    /// The backend answered, but outside the 200..400 range.
    Rejected { status: u16, body: String },
    /// The notification request never completed.
    Transport(String),
    AlreadySettled(String),
    InvalidOptions(String),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::Extraction(msg) => write!(f, "Extraction failed: {msg}"),
            NotifyError::TokenUnavailable(msg) => write!(f, "CSRF token unavailable: {msg}"),
            NotifyError::Rejected { status, .. } => {
                write!(f, "Server error: notification rejected with status {status}")
            }
            NotifyError::Transport(msg) => write!(f, "Connection error: {msg}"),
            NotifyError::AlreadySettled(msg) => write!(f, "Upload already settled: {msg}"),
            NotifyError::InvalidOptions(msg) => write!(f, "Invalid widget options: {msg}"),
        }
    }
}

impl std::error::Error for NotifyError {}

impl NotifyError {
    pub fn extraction(message: impl Into<String>) -> Self {
        NotifyError::Extraction(message.into())
    }

    pub fn token_unavailable(message: impl Into<String>) -> Self {
        NotifyError::TokenUnavailable(message.into())
    }

    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        NotifyError::Rejected {
            status,
            body: body.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        NotifyError::Transport(message.into())
    }

    pub fn already_settled(message: impl Into<String>) -> Self {
        NotifyError::AlreadySettled(message.into())
    }

    pub fn invalid_options(message: impl Into<String>) -> Self {
        NotifyError::InvalidOptions(message.into())
    }

    /// True when the failure happened before the backend could answer.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, NotifyError::Transport(_))
    }
}
