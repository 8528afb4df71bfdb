pub mod call;
pub mod config;
pub mod http;
pub mod reply;
pub mod setup;
pub mod telephony;
pub mod transcription;
pub mod voice;

pub use call::CallStage;
pub use config::{CallConfig, Config, DeepgramConfig};
pub use http::{create_router, AppState};
pub use reply::{ReplyStrategy, TemplateReply};
pub use telephony::{IncomingCall, RecordingCallback, TwilioClient};
pub use transcription::{DeepgramClient, Transcriber, Transcript, TranscriptionError};
pub use voice::{RecordOptions, VoiceResponse};
