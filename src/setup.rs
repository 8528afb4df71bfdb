//! Interactive setup
//!
//! Collects API credentials and writes them to a local `.env` file that the
//! server loads at startup.

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

const DEFAULT_PORT: &str = "8080";

/// Values written to the env file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub deepgram_api_key: String,
    pub port: String,
}

impl Credentials {
    /// Fail with the names of every blank value
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("twilioAccountSid", &self.twilio_account_sid),
            ("twilioAuthToken", &self.twilio_auth_token),
            ("deepgramApiKey", &self.deepgram_api_key),
            ("port", &self.port),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
        .collect();

        if !missing.is_empty() {
            bail!("Missing required values for: {}", missing.join(", "));
        }
        Ok(())
    }

    pub fn to_env(&self) -> String {
        format!(
            "TWILIO_ACCOUNT_SID={}\nTWILIO_AUTH_TOKEN={}\nDEEPGRAM_API_KEY={}\nPORT={}",
            self.twilio_account_sid.trim(),
            self.twilio_auth_token.trim(),
            self.deepgram_api_key.trim(),
            self.port.trim()
        )
    }
}

/// Outcome of a setup run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    Created,
    AlreadyExists,
}

/// Run setup against the given terminal streams
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, env_path: &Path) -> Result<SetupOutcome> {
    writeln!(output, "--- Starting Setup for TwiloGram ---")?;
    writeln!(output, "\n[Step 1/2] Setting up environment variables...")?;

    let (outcome, port) = if env_path.exists() {
        writeln!(
            output,
            "  > {} already exists. Skipping creation.",
            env_path.display()
        )?;
        (SetupOutcome::AlreadyExists, existing_port(env_path))
    } else {
        writeln!(output, "  > Please provide your API credentials.")?;
        let credentials = prompt_credentials(input, output)?;
        credentials.validate()?;

        fs::write(env_path, credentials.to_env())
            .with_context(|| format!("Failed to write {}", env_path.display()))?;
        writeln!(output, "  > {} created successfully.", env_path.display())?;
        (SetupOutcome::Created, credentials.port.trim().to_string())
    };

    print_instructions(output, &port)?;
    Ok(outcome)
}

fn prompt_credentials<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Credentials> {
    let twilio_account_sid = prompt(input, output, "  Enter your Twilio Account SID: ")?;
    let twilio_auth_token = prompt(input, output, "  Enter your Twilio Auth Token: ")?;
    let deepgram_api_key = prompt(input, output, "  Enter your Deepgram API Key: ")?;
    let mut port = prompt(
        input,
        output,
        "  Enter the port for the server (default 8080): ",
    )?;
    if port.is_empty() {
        port = DEFAULT_PORT.to_string();
    }

    Ok(Credentials {
        twilio_account_sid,
        twilio_auth_token,
        deepgram_api_key,
        port,
    })
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;
    Ok(line.trim().to_string())
}

/// PORT from an existing env file, falling back to the default
fn existing_port(env_path: &Path) -> String {
    dotenvy::from_path_iter(env_path)
        .ok()
        .and_then(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .find(|(key, _)| key == "PORT")
                .map(|(_, value)| value)
        })
        .filter(|port| !port.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PORT.to_string())
}

fn print_instructions<W: Write>(output: &mut W, port: &str) -> Result<()> {
    writeln!(output, "\n[Step 2/2] Configuration Instructions:")?;
    writeln!(output, "1. Expose the server port to the internet, e.g.:")?;
    writeln!(output, "     ngrok http {}", port)?;
    writeln!(output, "   Copy the HTTPS URL it prints.")?;
    writeln!(output, "2. Configure your Twilio phone number:")?;
    writeln!(
        output,
        "   - Under \"A CALL COMES IN\", select \"Webhook\" and paste <your-url>/voice"
    )?;
    writeln!(output, "   - Set the method to HTTP POST and save.")?;
    writeln!(output, "3. Configure Google Voice forwarding (optional):")?;
    writeln!(output, "   - In Google Voice, go to Settings > Calls > Call forwarding.")?;
    writeln!(output, "   - Add your Twilio phone number as a forwarding number.")?;
    writeln!(output, "\n--- Setup Complete ---")?;
    writeln!(output, "Start the server with: twilogram serve")?;
    Ok(())
}
