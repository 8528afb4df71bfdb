//! Speech-to-text for recorded calls
//!
//! Sends the URL of a hosted recording to the transcription provider and
//! returns the first alternative of the first channel.

mod client;
mod error;
pub mod messages;

pub use client::{DeepgramClient, Transcriber};
pub use error::TranscriptionError;
pub use messages::Transcript;
