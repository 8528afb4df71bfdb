use super::state::AppState;
use crate::call::CallStage;
use crate::telephony::{IncomingCall, RecordingCallback};
use crate::voice::{RecordOptions, VoiceResponse};
use anyhow::Result;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

/// Spoken when transcription or reply generation fails
pub const APOLOGY_MESSAGE: &str =
    "I am sorry, but there was an error processing your request. Please call back later.";

/// Spoken when the recording contained no recognisable speech
pub const NO_SPEECH_MESSAGE: &str = "I am sorry, I did not catch that. Could you please call again?";

/// POST /voice
/// Greet the caller and start recording
pub async fn incoming_call(
    State(state): State<AppState>,
    form: Option<Form<IncomingCall>>,
) -> VoiceResponse {
    let call = form.map(|Form(call)| call).unwrap_or_default();
    let from = call.from.as_deref().unwrap_or("unknown");
    let call_sid = call.call_sid.as_deref().unwrap_or("unknown");

    info!(call_sid, stage = %CallStage::Idle, "Incoming call from: {}", from);

    let record = RecordOptions {
        action: state.call.recording_action.clone(),
        max_length_secs: state.call.max_length_secs,
        finish_on_key: state.call.finish_on_key.clone(),
        ..RecordOptions::default()
    };

    // A <Hangup> after <Record> is only reached if recording never calls back
    let response = VoiceResponse::new()
        .say(&state.call.voice, &state.call.greeting)
        .record(record)
        .hangup();

    info!(call_sid, stage = %CallStage::Greeted, "Greeting sent, waiting for recording");
    response
}

/// POST /handle-recording
/// Transcribe the finished recording and read a reply back
pub async fn handle_recording(
    State(state): State<AppState>,
    form: Option<Form<RecordingCallback>>,
) -> Response {
    let callback = form.map(|Form(callback)| callback).unwrap_or_default();
    let call_sid = callback.call_sid.as_deref().unwrap_or("unknown");

    let Some(recording_url) = callback.recording_url() else {
        error!(call_sid, "No RecordingUrl was provided in the request");
        return (StatusCode::BAD_REQUEST, "Bad Request: No RecordingUrl").into_response();
    };

    info!(
        call_sid,
        stage = %CallStage::Recording,
        duration = callback.recording_duration.as_deref().unwrap_or("?"),
        "Received recording for processing. URL: {}",
        recording_url
    );

    let reply = match reply_for_recording(&state, call_sid, recording_url).await {
        Ok(reply) => reply,
        Err(e) => {
            error!(call_sid, "An error occurred in /handle-recording: {:#}", e);
            APOLOGY_MESSAGE.to_string()
        }
    };

    info!(call_sid, stage = %CallStage::Responded, "Reply: {}", reply);

    let response = VoiceResponse::new().say(&state.call.voice, reply).hangup();

    info!(call_sid, stage = %CallStage::Terminated, "Call ended");
    response.into_response()
}

async fn reply_for_recording(
    state: &AppState,
    call_sid: &str,
    recording_url: &str,
) -> Result<String> {
    info!(call_sid, stage = %CallStage::Transcribing, "Transcribing recording");

    let transcript = state.transcriber.transcribe(recording_url).await?;
    info!(call_sid, confidence = ?transcript.confidence, "Transcript: \"{}\"", transcript.text);

    if transcript.is_empty() {
        warn!(call_sid, "Recording contained no speech");
        return Ok(NO_SPEECH_MESSAGE.to_string());
    }

    state.reply.reply(transcript.text.trim()).await
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
