//! Telephony provider integration
//!
//! - Webhook form bodies for incoming calls and finished recordings
//! - Management API client (constructed at startup, unused by the call flow)

mod client;
mod webhooks;

pub use client::{CallResource, TelephonyError, TwilioClient};
pub use webhooks::{IncomingCall, RecordingCallback};
