//! HTTP server for telephony webhooks
//!
//! - POST /voice - Greet an incoming caller and start recording
//! - POST /handle-recording - Transcribe the recording and reply
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::{APOLOGY_MESSAGE, NO_SPEECH_MESSAGE};
pub use routes::create_router;
pub use state::AppState;
