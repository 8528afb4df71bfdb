use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use twilogram::{config, create_router, setup, AppState, Config, DeepgramClient, TwilioClient};

/// TwiloGram - record a caller's message, transcribe it, and read a reply back
#[derive(Parser, Debug)]
#[command(name = "twilogram")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short = 'c', long = "config", default_value = "twilogram.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the webhook server (default)
    Serve,

    /// Interactively write API credentials to an env file
    Setup {
        #[arg(long = "env-file", default_value = ".env")]
        env_file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Setup { env_file }) = &cli.command {
        let stdin = std::io::stdin();
        setup::run(&mut stdin.lock(), &mut std::io::stdout(), env_file)?;
        return Ok(());
    }

    // Missing .env is fine; values may come from the real environment
    let env_file = config::load_env_file(".env");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twilogram=info,tower_http=info".into()),
        )
        .init();

    match env_file {
        Ok(true) => info!("Loaded environment from .env"),
        Ok(false) => {}
        Err(e) => warn!("Ignoring .env: {:#}", e),
    }

    serve(Config::load(&cli.config)?).await
}

async fn serve(cfg: Config) -> Result<()> {
    let api_key = cfg.require_deepgram_api_key()?;
    let transcriber = DeepgramClient::new(api_key, cfg.deepgram.clone())
        .context("Failed to create transcription client")?;

    let mut state = AppState::new(Arc::new(transcriber), cfg.call.clone());

    match cfg.twilio_credentials() {
        Some((account_sid, auth_token)) => {
            let telephony = TwilioClient::new(account_sid, auth_token)
                .context("Failed to create telephony client")?;
            info!("Telephony client ready for account {}", telephony.account_sid());
            state = state.with_telephony(telephony);
        }
        None => warn!("TWILIO_ACCOUNT_SID / TWILIO_AUTH_TOKEN not set; telephony client disabled"),
    }

    let app = create_router(state);
    let addr = cfg.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("TwiloGram server is listening on {}", addr);
    info!("Expose this port publicly (e.g. with ngrok) so the provider can reach it");
    info!("Voice webhook URL should be: https://<your-public-host>/voice");

    axum::serve(listener, app).await?;

    Ok(())
}
