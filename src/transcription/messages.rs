use serde::{Deserialize, Serialize};

/// Request body for pre-recorded transcription of hosted audio
#[derive(Debug, Serialize)]
pub struct UrlSource<'a> {
    pub url: &'a str,
}

/// Response from the pre-recorded listen endpoint
#[derive(Debug, Deserialize)]
pub struct ListenResponse {
    pub results: ListenResults,
}

#[derive(Debug, Deserialize)]
pub struct ListenResults {
    #[serde(default)]
    pub channels: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub transcript: String,
    pub confidence: Option<f32>,
}

/// Error body returned with non-success statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub err_code: Option<String>,
    pub err_msg: Option<String>,
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn describe(&self) -> String {
        let mut message = match (&self.err_code, &self.err_msg) {
            (Some(code), Some(msg)) => format!("{}: {}", code, msg),
            (None, Some(msg)) => msg.clone(),
            (Some(code), None) => code.clone(),
            (None, None) => "unknown error".to_string(),
        };
        if let Some(id) = &self.request_id {
            message.push_str(&format!(" [request_id: {}]", id));
        }
        message
    }
}

/// Transcript of a single recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Transcribed text
    pub text: String,

    /// Confidence score (0.0 to 1.0), if available
    pub confidence: Option<f32>,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
        }
    }

    /// True when no speech was recognised
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
