use serde::Deserialize;

/// Form body posted when a call comes in
///
/// Only the fields the call flow looks at are kept; the provider sends many
/// more, which are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IncomingCall {
    /// Unique identifier for the call
    pub call_sid: Option<String>,

    /// The phone number that initiated the call
    pub from: Option<String>,

    /// The phone number that was called
    pub to: Option<String>,

    pub call_status: Option<String>,
}

/// Form body posted by the `<Record>` action callback
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordingCallback {
    pub call_sid: Option<String>,

    /// Where the finished recording is hosted
    pub recording_url: Option<String>,

    pub recording_sid: Option<String>,

    /// Recording length in seconds, as sent by the provider
    pub recording_duration: Option<String>,
}

impl RecordingCallback {
    /// The recording URL, if present and non-blank
    pub fn recording_url(&self) -> Option<&str> {
        self.recording_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
