//! Reply generation from a caller's transcript

use anyhow::Result;
use async_trait::async_trait;

/// Turns a (non-empty) transcript into the text spoken back to the caller
///
/// The shipped strategy is a fixed template; a language-model backed
/// strategy plugs in here without changing the handlers.
#[async_trait]
pub trait ReplyStrategy: Send + Sync {
    async fn reply(&self, transcript: &str) -> Result<String>;
}

/// Confirms the recorded message back to the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateReply;

impl TemplateReply {
    pub fn render(transcript: &str) -> String {
        format!(
            "Thank you for your message. We have recorded: \"{}\". Our team will review it shortly. Goodbye.",
            transcript
        )
    }
}

#[async_trait]
impl ReplyStrategy for TemplateReply {
    async fn reply(&self, transcript: &str) -> Result<String> {
        Ok(Self::render(transcript))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_template_reply() {
        let reply = TemplateReply.reply("hello world").await.unwrap();
        assert_eq!(
            reply,
            "Thank you for your message. We have recorded: \"hello world\". Our team will review it shortly. Goodbye."
        );
    }
}
