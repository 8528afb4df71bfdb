use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the webhook server binds to
    pub bind: String,
    pub port: u16,

    /// Telephony management API credentials (optional, client is latent)
    pub twilio_account_sid: Option<String>,
    pub twilio_auth_token: Option<String>,

    /// Speech-to-text API key; startup fails without it
    pub deepgram_api_key: Option<String>,

    #[serde(default)]
    pub deepgram: DeepgramConfig,

    #[serde(default)]
    pub call: CallConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeepgramConfig {
    pub base_url: String,
    pub model: String,
    pub language: Option<String>,
}

impl Default for DeepgramConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.deepgram.com".to_string(),
            model: "nova-2".to_string(),
            language: None,
        }
    }
}

/// What the caller hears and how they are recorded
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CallConfig {
    /// Provider voice used for every `<Say>`
    pub voice: String,
    pub greeting: String,
    pub max_length_secs: u32,
    pub finish_on_key: String,
    /// Path the provider posts finished recordings to
    pub recording_action: String,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            voice: "Polly.Joanna-Neural".to_string(),
            greeting: "Hello, and thank you for calling the TwiloGram assistant. \
                       Please leave your message after the tone. \
                       Press the pound key when you are finished."
                .to_string(),
            max_length_secs: 60,
            finish_on_key: "#".to_string(),
            recording_action: "/handle-recording".to_string(),
        }
    }
}

/// Routes the webhook server already owns
const RESERVED_PATHS: &[&str] = &["/voice", "/health"];

impl CallConfig {
    /// The recording action doubles as a route path, so it must be an
    /// absolute path that no other route uses
    pub fn validate(&self) -> Result<()> {
        let action = self.recording_action.as_str();
        if !action.starts_with('/') {
            bail!(
                "call.recording_action must be an absolute path starting with '/', got {:?}",
                action
            );
        }
        if RESERVED_PATHS.contains(&action) {
            bail!("call.recording_action {:?} collides with a built-in route", action);
        }
        Ok(())
    }
}

/// Load `KEY=value` pairs from an env file into the process environment
///
/// Returns `Ok(false)` when the file does not exist.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to parse {}", path.display())),
    }
}

impl Config {
    /// Load from defaults, an optional TOML file, then the process environment
    ///
    /// Call `load_env_file` first so `.env` values are visible here.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .set_default("bind", "0.0.0.0")?
            .set_default("port", 8080)?
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::default().try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let cfg: Self = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        cfg.call.validate()?;

        Ok(cfg)
    }

    /// The speech-to-text key, or an error if it is missing or blank
    pub fn require_deepgram_api_key(&self) -> Result<&str> {
        match non_blank(&self.deepgram_api_key) {
            Some(key) => Ok(key),
            None => bail!("DEEPGRAM_API_KEY is not set. Please check your .env file."),
        }
    }

    /// Both telephony credentials, if configured
    pub fn twilio_credentials(&self) -> Option<(&str, &str)> {
        Some((
            non_blank(&self.twilio_account_sid)?,
            non_blank(&self.twilio_auth_token)?,
        ))
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
