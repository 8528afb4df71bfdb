use crate::config::CallConfig;
use crate::reply::{ReplyStrategy, TemplateReply};
use crate::telephony::TwilioClient;
use crate::transcription::Transcriber;
use std::sync::Arc;

/// Long-lived service context shared by the webhook handlers
///
/// Everything here is immutable; calls never share per-request state.
#[derive(Clone)]
pub struct AppState {
    /// Speech-to-text client
    pub transcriber: Arc<dyn Transcriber>,

    /// Builds the spoken reply from a transcript
    pub reply: Arc<dyn ReplyStrategy>,

    /// Voice, greeting and recording settings
    pub call: Arc<CallConfig>,

    /// Telephony management API client, when credentials are configured
    pub telephony: Option<Arc<TwilioClient>>,
}

impl AppState {
    /// State with the template reply and no telephony client
    pub fn new(transcriber: Arc<dyn Transcriber>, call: CallConfig) -> Self {
        Self {
            transcriber,
            reply: Arc::new(TemplateReply),
            call: Arc::new(call),
            telephony: None,
        }
    }

    pub fn with_reply(mut self, reply: Arc<dyn ReplyStrategy>) -> Self {
        self.reply = reply;
        self
    }

    pub fn with_telephony(mut self, telephony: TwilioClient) -> Self {
        self.telephony = Some(Arc::new(telephony));
        self
    }
}
