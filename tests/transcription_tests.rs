// Integration tests for the speech-to-text client against a mock provider

use serde_json::json;
use twilogram::{DeepgramClient, DeepgramConfig, Transcriber, TranscriptionError};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DeepgramClient {
    let config = DeepgramConfig {
        base_url: server.uri(),
        ..DeepgramConfig::default()
    };
    DeepgramClient::new("test-key", config).unwrap()
}

fn listen_response(transcript: &str) -> serde_json::Value {
    json!({
        "metadata": { "request_id": "req-1" },
        "results": {
            "channels": [{
                "alternatives": [{
                    "transcript": transcript,
                    "confidence": 0.98,
                    "words": []
                }]
            }]
        }
    })
}

#[tokio::test]
async fn test_transcribe_sends_url_and_options() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/listen"))
        .and(query_param("model", "nova-2"))
        .and(query_param("punctuate", "true"))
        .and(query_param("smart_format", "true"))
        .and(header("Authorization", "Token test-key"))
        .and(body_json(json!({ "url": "https://example.com/rec.wav" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(listen_response("Hello world.")))
        .expect(1)
        .mount(&server)
        .await;

    let transcript = client_for(&server)
        .transcribe("https://example.com/rec.wav")
        .await
        .unwrap();

    assert_eq!(transcript.text, "Hello world.");
    assert_eq!(transcript.confidence, Some(0.98));
    assert!(!transcript.is_empty());
}

#[tokio::test]
async fn test_transcribe_includes_language_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/listen"))
        .and(query_param("language", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listen_response("hi")))
        .expect(1)
        .mount(&server)
        .await;

    let config = DeepgramConfig {
        base_url: server.uri(),
        language: Some("en-US".to_string()),
        ..DeepgramConfig::default()
    };
    let client = DeepgramClient::new("test-key", config).unwrap();

    assert_eq!(client.transcribe("https://x/r").await.unwrap().text, "hi");
}

#[tokio::test]
async fn test_empty_transcript_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/listen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listen_response("")))
        .mount(&server)
        .await;

    let transcript = client_for(&server).transcribe("https://x/r").await.unwrap();
    assert!(transcript.is_empty());
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/listen"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "err_code": "INVALID_AUTH",
            "err_msg": "Invalid credentials.",
            "request_id": "abc"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).transcribe("https://x/r").await.unwrap_err();
    match err {
        TranscriptionError::Authentication(message) => {
            assert!(message.contains("INVALID_AUTH"));
            assert!(message.contains("Invalid credentials."));
            assert!(message.contains("abc"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_maps_to_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/listen"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server).transcribe("https://x/r").await.unwrap_err();
    match err {
        TranscriptionError::Provider { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_channels_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/listen"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "results": { "channels": [] } })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).transcribe("https://x/r").await.unwrap_err();
    assert!(matches!(err, TranscriptionError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_empty_url_is_rejected_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).transcribe("  ").await.unwrap_err();
    assert!(matches!(err, TranscriptionError::EmptyRecordingUrl));
}
