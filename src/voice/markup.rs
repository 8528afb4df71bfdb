use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::fmt::Write;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Options for the `<Record>` verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOptions {
    /// Path the provider posts the finished recording to
    pub action: String,

    /// HTTP method used for the action callback
    pub method: String,

    /// Maximum recording length in seconds
    pub max_length_secs: u32,

    /// Key that ends the recording early
    pub finish_on_key: String,

    /// Whether the provider should run its own transcription
    pub transcribe: bool,
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self {
            action: "/handle-recording".to_string(),
            method: "POST".to_string(),
            max_length_secs: 60,
            finish_on_key: "#".to_string(),
            transcribe: false, // Transcription is done by our own STT client
        }
    }
}

/// A single instruction inside a voice-markup document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Say { voice: String, text: String },
    Record(RecordOptions),
    Hangup,
}

/// Voice-markup document returned to the telephony provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceResponse {
    verbs: Vec<Verb>,
}

impl VoiceResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Speak `text` with the given provider voice
    pub fn say(mut self, voice: impl Into<String>, text: impl Into<String>) -> Self {
        self.verbs.push(Verb::Say {
            voice: voice.into(),
            text: text.into(),
        });
        self
    }

    /// Record the caller, posting the result to `options.action`
    pub fn record(mut self, options: RecordOptions) -> Self {
        self.verbs.push(Verb::Record(options));
        self
    }

    /// End the call
    pub fn hangup(mut self) -> Self {
        self.verbs.push(Verb::Hangup);
        self
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// Render the document as XML
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256);
        xml.push_str(XML_DECLARATION);
        xml.push_str("<Response>");

        for verb in &self.verbs {
            match verb {
                Verb::Say { voice, text } => {
                    let _ = write!(
                        xml,
                        r#"<Say voice="{}">{}</Say>"#,
                        escape(voice),
                        escape(text)
                    );
                }
                Verb::Record(options) => {
                    let _ = write!(
                        xml,
                        r#"<Record action="{}" method="{}" maxLength="{}" finishOnKey="{}" transcribe="{}"/>"#,
                        escape(&options.action),
                        escape(&options.method),
                        options.max_length_secs,
                        escape(&options.finish_on_key),
                        options.transcribe
                    );
                }
                Verb::Hangup => xml.push_str("<Hangup/>"),
            }
        }

        xml.push_str("</Response>");
        xml
    }
}

impl IntoResponse for VoiceResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/xml")],
            self.to_xml(),
        )
            .into_response()
    }
}

/// Escape text for use in XML content and attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
