//! Voice-markup documents
//!
//! Builds the XML instructions returned to the telephony provider:
//! - `<Say>` speaks text with a provider voice
//! - `<Record>` records the caller and posts the recording location back
//! - `<Hangup>` ends the call

mod markup;

pub use markup::{escape, RecordOptions, Verb, VoiceResponse};
