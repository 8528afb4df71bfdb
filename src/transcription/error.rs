use thiserror::Error;

/// Failures from the speech-to-text provider
#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("Recording URL is empty")]
    EmptyRecordingUrl,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl TranscriptionError {
    /// Classify a non-success HTTP status from the provider
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::Authentication(message),
            400 => Self::BadRequest(message),
            _ => Self::Provider { status, message },
        }
    }
}
