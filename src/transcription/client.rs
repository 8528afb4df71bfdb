use super::error::TranscriptionError;
use super::messages::{ErrorResponse, ListenResponse, Transcript, UrlSource};
use crate::config::DeepgramConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("twilogram/", env!("CARGO_PKG_VERSION"));

/// Speech-to-text service seam
///
/// Handlers only see this trait, so tests and alternative providers can be
/// injected through `AppState`.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the audio hosted at `audio_url`
    async fn transcribe(&self, audio_url: &str) -> Result<Transcript, TranscriptionError>;
}

/// Client for Deepgram's pre-recorded listen API
pub struct DeepgramClient {
    http: Client,
    api_key: String,
    config: DeepgramConfig,
}

impl DeepgramClient {
    pub fn new(api_key: impl Into<String>, config: DeepgramConfig) -> Result<Self, TranscriptionError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            config,
        })
    }

    fn listen_url(&self) -> String {
        format!("{}/v1/listen", self.config.base_url.trim_end_matches('/'))
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("model", self.config.model.clone()),
            ("punctuate", "true".to_string()),
            ("smart_format", "true".to_string()),
        ];
        if let Some(language) = &self.config.language {
            query.push(("language", language.clone()));
        }
        query
    }
}

#[async_trait]
impl Transcriber for DeepgramClient {
    async fn transcribe(&self, audio_url: &str) -> Result<Transcript, TranscriptionError> {
        if audio_url.trim().is_empty() {
            return Err(TranscriptionError::EmptyRecordingUrl);
        }

        info!(model = %self.config.model, "Requesting transcription for {}", audio_url);

        let response = self
            .http
            .post(self.listen_url())
            .query(&self.query())
            .header("Authorization", format!("Token {}", self.api_key))
            .json(&UrlSource { url: audio_url })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.describe())
                .unwrap_or_else(|_| body.clone());
            return Err(TranscriptionError::from_status(status.as_u16(), message));
        }

        let parsed: ListenResponse = serde_json::from_str(&body)
            .map_err(|e| TranscriptionError::MalformedResponse(e.to_string()))?;

        let alternative = parsed
            .results
            .channels
            .into_iter()
            .next()
            .ok_or_else(|| TranscriptionError::MalformedResponse("no channels".to_string()))?
            .alternatives
            .into_iter()
            .next()
            .ok_or_else(|| TranscriptionError::MalformedResponse("no alternatives".to_string()))?;

        debug!(
            "Transcription complete ({} chars, confidence={:?})",
            alternative.transcript.len(),
            alternative.confidence
        );

        Ok(Transcript {
            text: alternative.transcript,
            confidence: alternative.confidence,
        })
    }
}
