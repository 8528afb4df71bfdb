// Tests for the telephony management client and webhook form bodies

use serde_json::json;
use twilogram::telephony::TelephonyError;
use twilogram::{RecordingCallback, TwilioClient};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_call() {
    let server = MockServer::start().await;

    // "AC123:secret" base64-encoded
    Mock::given(method("GET"))
        .and(path("/Accounts/AC123/Calls/CA456.json"))
        .and(header("Authorization", "Basic QUMxMjM6c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "CA456",
            "status": "in-progress",
            "from": "+15551234567",
            "to": "+15557654321",
            "direction": "inbound"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TwilioClient::with_base_url("AC123", "secret", server.uri()).unwrap();
    let call = client.fetch_call("CA456").await.unwrap();

    assert_eq!(call.sid, "CA456");
    assert_eq!(call.status, "in-progress");
    assert_eq!(call.from.as_deref(), Some("+15551234567"));
}

#[tokio::test]
async fn test_fetch_call_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = TwilioClient::with_base_url("AC123", "secret", server.uri()).unwrap();
    let err = client.fetch_call("CA404").await.unwrap_err();

    assert!(matches!(err, TelephonyError::Api { status: 404, .. }));
}

#[test]
fn test_recording_callback_url() {
    let callback = RecordingCallback {
        recording_url: Some(" https://x/r ".to_string()),
        ..Default::default()
    };
    assert_eq!(callback.recording_url(), Some("https://x/r"));

    let blank = RecordingCallback {
        recording_url: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(blank.recording_url(), None);
    assert_eq!(RecordingCallback::default().recording_url(), None);
}
