//! Assistant
//!
//! Learning assistant chat. Replies come from a [`Responder`]; the bundled
//! [`CannedResponder`] answers every prompt with a fixed text.

use thiserror::Error;
use tracing::debug;

/// Reply used on the default workspace.
pub const GENERAL_REPLY: &str = "这是一个测试的AI回答。这是在后端获取到的API数据。";

/// Reply used on course and practice workspaces.
pub const COURSE_REPLY: &str =
    "这是一个示例回复。在实际应用中，这里会连接到后端API获取真实的AI回复。";

/// Assistant errors
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The responder couldn't produce a reply
    #[error("Assistant unavailable: {0}")]
    Unavailable(String),
}

/// Produces replies to user prompts.
pub trait Responder {
    /// Reply to `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an [`AssistantError`] if no reply can be produced.
    async fn reply(&self, prompt: &str) -> Result<String, AssistantError>;
}

/// Answers every prompt with the same text, immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedResponder {
    reply: String,
}

impl CannedResponder {
    /// Responder answering with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }

    /// Responder for the default workspace.
    pub fn general() -> Self {
        Self::new(GENERAL_REPLY)
    }

    /// Responder for course and practice workspaces.
    pub fn course() -> Self {
        Self::new(COURSE_REPLY)
    }
}

impl Responder for CannedResponder {
    async fn reply(&self, _prompt: &str) -> Result<String, AssistantError> {
        Ok(self.reply.clone())
    }
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// The learner.
    User,

    /// The assistant.
    Bot,
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Author.
    pub role: ChatRole,

    /// Text.
    pub content: String,
}

/// Transcript of an assistant chat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether nothing has been said yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Record `prompt` as a user message.
    ///
    /// Returns `false`, recording nothing, if the prompt is blank.
    pub fn ask(&mut self, prompt: &str) -> bool {
        if prompt.trim().is_empty() {
            return false;
        }

        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: prompt.to_string(),
        });

        true
    }

    /// Record an assistant reply.
    pub fn receive(&mut self, reply: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: ChatRole::Bot,
            content: reply.into(),
        });
    }

    /// Ask `prompt`, wait for `responder` and record its reply.
    ///
    /// Blank prompts are ignored and return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an [`AssistantError`] if the responder fails; the prompt stays
    /// in the transcript.
    pub async fn send<R: Responder>(
        &mut self,
        prompt: &str,
        responder: &R,
    ) -> Result<Option<&ChatMessage>, AssistantError> {
        if !self.ask(prompt) {
            return Ok(None);
        }

        let reply = responder.reply(prompt).await?;

        debug!(chars = reply.chars().count(), "assistant replied");

        self.receive(reply);

        Ok(self.messages.last())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[derive(Debug)]
    struct Offline;

    impl Responder for Offline {
        async fn reply(&self, _prompt: &str) -> Result<String, AssistantError> {
            Err(AssistantError::Unavailable("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn send_records_prompt_and_reply() -> TestResult {
        let mut conversation = Conversation::new();

        let reply = conversation
            .send("什么是闭包？", &CannedResponder::general())
            .await?
            .cloned();

        assert_eq!(
            reply,
            Some(ChatMessage {
                role: ChatRole::Bot,
                content: GENERAL_REPLY.to_string(),
            })
        );
        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(
            conversation.messages().first().map(|message| message.role),
            Some(ChatRole::User)
        );

        Ok(())
    }

    #[tokio::test]
    async fn blank_prompts_are_ignored() -> TestResult {
        let mut conversation = Conversation::new();

        let reply = conversation.send("  ", &CannedResponder::course()).await?;

        assert!(reply.is_none());
        assert!(conversation.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn failed_reply_keeps_the_prompt() {
        let mut conversation = Conversation::new();

        let result = conversation.send("hello", &Offline).await;

        assert!(matches!(result, Err(AssistantError::Unavailable(_))));
        assert_eq!(conversation.messages().len(), 1);
    }
}
