use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

const DEFAULT_API_BASE: &str = "https://api.twilio.com/2010-04-01";

#[derive(Debug, Error)]
pub enum TelephonyError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Telephony API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// A call as reported by the management API
#[derive(Debug, Clone, Deserialize)]
pub struct CallResource {
    pub sid: String,
    pub status: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Client for the telephony provider's management API
///
/// Built at startup and kept in `AppState`; the record-and-reply flow is
/// driven entirely by webhooks and does not call it.
pub struct TwilioClient {
    http: Client,
    account_sid: String,
    auth_token: String,
    base_url: String,
}

impl TwilioClient {
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, TelephonyError> {
        Self::with_base_url(account_sid, auth_token, DEFAULT_API_BASE)
    }

    pub fn with_base_url(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, TelephonyError> {
        Ok(Self {
            http: Client::builder().build()?,
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    /// Fetch the current state of a call
    pub async fn fetch_call(&self, call_sid: &str) -> Result<CallResource, TelephonyError> {
        let url = format!(
            "{}/Accounts/{}/Calls/{}.json",
            self.base_url, self.account_sid, call_sid
        );
        info!("Fetching call {}", call_sid);

        let response = self
            .http
            .get(url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await?;
            return Err(TelephonyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
